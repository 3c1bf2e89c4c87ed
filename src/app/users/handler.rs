//! 用户处理器

use axum::response::Json;

use super::model::{User, TEST_USERS};

/// 获取测试用户列表
pub async fn list_users() -> Json<&'static [User]> {
    Json(&TEST_USERS)
}

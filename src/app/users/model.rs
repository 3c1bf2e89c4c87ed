//! 测试用户数据

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

/// 固定的测试用户列表，原样返回，不受管理
pub static TEST_USERS: [User; 3] = [
    User {
        username: "sergio",
        email: "sriverabuitrago4@gmail.com",
        password: "1234",
    },
    User {
        username: "user2",
        email: "user2@example.com",
        password: "password2",
    },
    User {
        username: "user3",
        email: "user3@example.com",
        password: "password3",
    },
];

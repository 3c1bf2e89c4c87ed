//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 字段级校验失败的描述
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldViolation>,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldViolation>,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Conflict(_) => StatusCode::CONFLICT,
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            CoreError::Validation { .. } => "VALIDATION_ERROR",
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_response = ErrorResponse {
            error: self.tag().to_string(),
            message: self.to_string(),
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            details: match self {
                CoreError::Validation { details, .. } => details,
                _ => Vec::new(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// 字段报告顺序，结构级（`__all__`）规则排在最后
const FIELD_ORDER: [&str; 6] = ["id", "name", "price", "min_price", "max_price", "__all__"];

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len() - 1)
}

/// 展开 validator 的错误树，按固定字段顺序排列
pub fn flatten_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| {
            let field = field.to_string();
            match kind {
                ValidationErrorsKind::Field(list) => list
                    .iter()
                    .map(|e| FieldViolation {
                        field: field.clone(),
                        code: e.code.to_string(),
                        message: e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("invalid value ({})", e.code)),
                    })
                    .collect::<Vec<_>>(),
                // 本服务的模型没有嵌套结构
                _ => vec![FieldViolation {
                    field: field.clone(),
                    code: "nested".to_string(),
                    message: "invalid nested value".to_string(),
                }],
            }
        })
        .collect();

    violations.sort_by(|a, b| {
        field_rank(&a.field)
            .cmp(&field_rank(&b.field))
            .then_with(|| a.field.cmp(&b.field))
    });
    violations
}

impl From<ValidationErrors> for CoreError {
    fn from(err: ValidationErrors) -> Self {
        let details = flatten_violations(&err);
        let message = details
            .first()
            .map(|v| format!("{}: {}", v.field, v.message))
            .unwrap_or_else(|| "Validation error".to_string());

        CoreError::Validation { message, details }
    }
}

/// 请求体能解析为 JSON 但字段类型不符时按校验错误处理，其余（语法错误、
/// 缺少 content-type 等）为 400
impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => CoreError::Validation {
                message: format!("body: {}", message),
                details: vec![FieldViolation {
                    field: "body".to_string(),
                    code: "invalid_type".to_string(),
                    message,
                }],
            },
            _ => CoreError::BadRequest(message),
        }
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

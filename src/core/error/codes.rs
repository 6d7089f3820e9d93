//! 对外错误码定义
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (01=解析, 03=验证, 09=系统)
//! - YY: 具体错误

use serde::{Deserialize, Serialize};

/// 对外错误码
///
/// 错误码一旦定义不应随意修改，保证调用方兼容性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // ==================== 解析错误 (01xx) ====================
    /// 解析错误
    ParseError = 101,
    /// 缺少必要参数
    MissingParameter = 103,

    // ==================== 验证错误 (03xx) ====================
    /// 通用验证错误
    ValidationError = 300,
    /// 类型错误
    TypeError = 301,
    /// 无效输入
    InvalidInput = 302,

    // ==================== 系统错误 (09xx) ====================
    /// 内部错误
    InternalError = 900,
}

impl ErrorCode {
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 获取默认的错误消息
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "解析错误",
            ErrorCode::MissingParameter => "缺少必要参数",
            ErrorCode::ValidationError => "验证错误",
            ErrorCode::TypeError => "类型错误",
            ErrorCode::InvalidInput => "无效输入",
            ErrorCode::InternalError => "内部错误",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 对外错误信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicError {
    pub code: ErrorCode,
    pub message: String,
}

impl PublicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for PublicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// 内部错误到对外错误的转换 trait
pub trait ToPublicError {
    fn to_public_error(&self) -> PublicError;

    fn to_error_code(&self) -> ErrorCode;

    /// 获取对外错误消息（过滤内部细节）
    fn to_public_message(&self) -> String;
}

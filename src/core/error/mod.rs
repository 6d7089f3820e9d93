//! 统一错误处理系统
//!
//! 1. 解析器只有一种错误 `SymbolError`，直接返回给调用方，不做任何回退
//! 2. 属性映射、配置等外层使用各自的错误类型，通过 `#[from]` 汇总到 `EnumPropError`
//! 3. 外部库错误转换为字符串，降低模块耦合

use thiserror::Error;

pub mod codes;
pub mod property;
pub mod symbol;

pub use codes::{ErrorCode, PublicError, ToPublicError};
pub use property::{InvalidInputKind, PropertyError, PropertyResult};
pub use symbol::{SymbolError, SymbolTableError};

/// 统一的错误类型
#[derive(Error, Debug, Clone)]
pub enum EnumPropError {
    #[error("符号解析错误: {0}")]
    Symbol(#[from] SymbolError),

    #[error("符号表定义错误: {0}")]
    SymbolTable(#[from] SymbolTableError),

    #[error("属性错误: {0}")]
    Property(#[from] PropertyError),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(String),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

/// 统一的结果类型
pub type EnumPropResult<T> = Result<T, EnumPropError>;

impl ToPublicError for EnumPropError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            EnumPropError::Symbol(_) => ErrorCode::InvalidInput,
            EnumPropError::SymbolTable(_) => ErrorCode::ValidationError,
            EnumPropError::Property(pe) => pe.to_error_code(),
            EnumPropError::Config(_) => ErrorCode::ValidationError,
            EnumPropError::Io(_) => ErrorCode::InternalError,
            EnumPropError::Serialization(_) => ErrorCode::ParseError,
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            EnumPropError::Io(_) => "IO操作失败".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<std::io::Error> for EnumPropError {
    fn from(err: std::io::Error) -> Self {
        EnumPropError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EnumPropError {
    fn from(err: serde_json::Error) -> Self {
        EnumPropError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for EnumPropError {
    fn from(err: toml::de::Error) -> Self {
        EnumPropError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for EnumPropError {
    fn from(err: toml::ser::Error) -> Self {
        EnumPropError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_error_conversion() {
        let err: EnumPropError = SymbolError::unknown("Color", "yellow").into();
        assert!(matches!(err, EnumPropError::Symbol(_)));
        assert_eq!(err.to_error_code(), ErrorCode::InvalidInput);
        assert!(err.to_string().contains("yellow"));
    }

    #[test]
    fn test_io_error_hides_details() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "/secret/path");
        let err: EnumPropError = io.into();
        let public = err.to_public_error();
        assert_eq!(public.code, ErrorCode::InternalError);
        assert!(!public.message.contains("/secret/path"));
    }

    #[test]
    fn test_property_error_code_passthrough() {
        let err: EnumPropError = PropertyError::required(["name"]).into();
        assert_eq!(err.to_error_code(), ErrorCode::MissingParameter);
    }
}

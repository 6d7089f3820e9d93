//! 属性映射错误类型
//!
//! 所有错误都带有字段路径，嵌套映射中的错误通过 [`PropertyError::prefixed`]
//! 逐层补全父字段，最终路径形如 `["outer", "inner"]`。

use std::fmt;

use serde::de::{self, Expected, Unexpected};
use thiserror::Error;

use super::codes::{ErrorCode, PublicError, ToPublicError};
use super::symbol::SymbolError;

crate::symbol_type! {
    /// 无效输入的原因，名称即对外的稳定错误标识
    pub enum InvalidInputKind: "InvalidInputKind" {
        FieldRequired => "field_required",
        FieldNotAllowed => "field_not_allowed",
        FieldContentInvalid => "field_content_invalid",
        FieldTypeInvalid => "field_type_invalid",
        TypeInvalid => "type_invalid",
    }
}

impl InvalidInputKind {
    fn describe(&self, fields: &str, detail: Option<&str>) -> String {
        let detail = detail.unwrap_or("");
        match self {
            InvalidInputKind::FieldRequired => format!("字段 [{}] 是此操作的必需字段", fields),
            InvalidInputKind::FieldNotAllowed => format!("此操作不允许字段 [{}]", fields),
            InvalidInputKind::FieldContentInvalid => format!("字段 [{}] 无效: {}", fields, detail),
            InvalidInputKind::FieldTypeInvalid => {
                format!("字段 [{}] 的数据类型无效: {}", fields, detail)
            }
            InvalidInputKind::TypeInvalid => format!("无效的数据类型: {}", detail),
        }
    }
}

/// 属性操作结果类型
pub type PropertyResult<T> = Result<T, PropertyError>;

/// 属性映射错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error("字段 [{path}] 类型不匹配，期望 {expected}，实际为 {received}", path = .field_path.join("."))]
    TypeMismatch {
        field_path: Vec<String>,
        expected: String,
        received: String,
    },

    #[error("字段 [{path}] 解析失败: {message}", path = .field_path.join("."))]
    Parsing {
        field_path: Vec<String>,
        message: String,
    },

    #[error("{msg}", msg = invalid_input_message(.kind, .fields, .field_path, .detail.as_deref()))]
    InvalidInput {
        kind: InvalidInputKind,
        fields: Vec<String>,
        field_path: Vec<String>,
        detail: Option<String>,
    },
}

fn invalid_input_message(
    kind: &InvalidInputKind,
    fields: &[String],
    field_path: &[String],
    detail: Option<&str>,
) -> String {
    let mut message = kind.describe(&fields.join(", "), detail);
    if !field_path.is_empty() {
        message.push_str(" @ ");
        message.push_str(&field_path.join("."));
    }
    message
}

impl PropertyError {
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        PropertyError::TypeMismatch {
            field_path: vec![key.into()],
            expected: expected.into(),
            received: received.into(),
        }
    }

    pub fn parsing(key: impl Into<String>, message: impl Into<String>) -> Self {
        PropertyError::Parsing {
            field_path: vec![key.into()],
            message: message.into(),
        }
    }

    /// 尚未定位到字段的解析错误，路径由外层通过 [`PropertyError::prefixed`] 补全
    pub fn parsing_root(message: impl Into<String>) -> Self {
        PropertyError::Parsing {
            field_path: Vec::new(),
            message: message.into(),
        }
    }

    /// 字段值无法解析为符号常量
    pub fn symbol(key: impl Into<String>, err: &SymbolError) -> Self {
        Self::parsing(
            key,
            format!(
                "期望 {} 类型的有效值，实际为 \"{}\"",
                err.type_name(),
                err.query()
            ),
        )
    }

    pub fn invalid_input<I, S>(kind: InvalidInputKind, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyError::InvalidInput {
            kind,
            fields: fields.into_iter().map(Into::into).collect(),
            field_path: Vec::new(),
            detail: None,
        }
    }

    pub fn required<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::invalid_input(InvalidInputKind::FieldRequired, fields)
    }

    pub fn not_allowed<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::invalid_input(InvalidInputKind::FieldNotAllowed, fields)
    }

    pub fn type_invalid(expected: &str, received: &str) -> Self {
        Self::invalid_input(InvalidInputKind::TypeInvalid, Vec::<String>::new())
            .with_detail(format!("期望 {}，实际为 {}", expected, received))
    }

    pub fn with_detail(mut self, text: impl Into<String>) -> Self {
        if let PropertyError::InvalidInput { detail, .. } = &mut self {
            *detail = Some(text.into());
        }
        self
    }

    /// 在字段路径最前面补上父字段
    pub fn prefixed(mut self, parent: &str) -> Self {
        match &mut self {
            PropertyError::TypeMismatch { field_path, .. }
            | PropertyError::Parsing { field_path, .. }
            | PropertyError::InvalidInput { field_path, .. } => {
                field_path.insert(0, parent.to_string());
            }
        }
        self
    }

    pub fn field_path(&self) -> &[String] {
        match self {
            PropertyError::TypeMismatch { field_path, .. }
            | PropertyError::Parsing { field_path, .. }
            | PropertyError::InvalidInput { field_path, .. } => field_path,
        }
    }

    /// 无效输入的稳定错误标识，如 `field_required`
    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            PropertyError::InvalidInput { kind, .. } => Some(kind.as_str()),
            _ => None,
        }
    }
}

/// serde 反序列化错误直接落到属性错误上，字段路径在逐层返回时补全
impl de::Error for PropertyError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::parsing_root(msg.to_string())
    }

    fn invalid_type(unexp: Unexpected<'_>, exp: &dyn Expected) -> Self {
        PropertyError::TypeMismatch {
            field_path: Vec::new(),
            expected: exp.to_string(),
            received: unexpected_kind(&unexp),
        }
    }

    fn missing_field(field: &'static str) -> Self {
        Self::parsing_root(format!("缺少字段 {}", field))
    }

    fn unknown_field(field: &str, _expected: &'static [&'static str]) -> Self {
        Self::not_allowed([field])
    }
}

/// 与 `json_kind` 使用同一套类别名称
fn unexpected_kind(unexp: &Unexpected<'_>) -> String {
    match unexp {
        Unexpected::Unit | Unexpected::Option => "null".to_string(),
        Unexpected::Bool(_) => "bool".to_string(),
        Unexpected::Unsigned(_) | Unexpected::Signed(_) | Unexpected::Float(_) => {
            "number".to_string()
        }
        Unexpected::Char(_) | Unexpected::Str(_) => "string".to_string(),
        Unexpected::Seq => "array".to_string(),
        Unexpected::Map => "object".to_string(),
        other => other.to_string(),
    }
}

impl ToPublicError for PropertyError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            PropertyError::TypeMismatch { .. } => ErrorCode::TypeError,
            PropertyError::Parsing { .. } => ErrorCode::ParseError,
            PropertyError::InvalidInput {
                kind: InvalidInputKind::FieldRequired,
                ..
            } => ErrorCode::MissingParameter,
            PropertyError::InvalidInput { .. } => ErrorCode::InvalidInput,
        }
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}

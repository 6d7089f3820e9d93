//! 符号解析错误类型

use thiserror::Error;

/// 符号解析错误
///
/// 解析失败只有一种原因：没有任何常量的名称与输入忽略大小写相等。
/// 空字符串、含空白或未知字符的输入都归入此类。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("未知的符号常量: [{type_name}.{query}]，没有忽略大小写后匹配的常量")]
    UnknownSymbolicConstant { type_name: String, query: String },
}

impl SymbolError {
    pub fn unknown(type_name: impl Into<String>, query: impl Into<String>) -> Self {
        SymbolError::UnknownSymbolicConstant {
            type_name: type_name.into(),
            query: query.into(),
        }
    }

    /// 解析所针对的符号类型名称
    pub fn type_name(&self) -> &str {
        match self {
            SymbolError::UnknownSymbolicConstant { type_name, .. } => type_name,
        }
    }

    /// 未被修改的原始输入
    pub fn query(&self) -> &str {
        match self {
            SymbolError::UnknownSymbolicConstant { query, .. } => query,
        }
    }
}

/// 运行时符号表定义错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolTableError {
    #[error("符号表 {type_name} 没有任何常量")]
    Empty { type_name: String },

    #[error("符号表 {type_name} 中存在重复的常量名称: {name}")]
    DuplicateName { type_name: String, name: String },
}

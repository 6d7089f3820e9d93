//! EnumProp - case-insensitive resolution of symbolic constants
//!
//! This crate resolves externally supplied strings (configuration values,
//! property-map entries, CLI tokens) into members of closed symbol types,
//! matching declared names case-insensitively. On top of the resolver it
//! provides a typed property map, serde integration and runtime symbol tables.

pub mod config;
pub mod core;
pub mod utils;

// 错误和结果类型
pub use crate::core::error::{
    EnumPropError, EnumPropResult, PropertyError, PropertyResult, SymbolError, SymbolTableError,
};

// 符号解析
pub use crate::core::symbol::{resolve, resolve_in, NamedConstant, SymbolTable, SymbolType, SymbolicConstant};

// 属性映射
pub use crate::core::property::PropertyMap;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

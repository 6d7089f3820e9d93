//! 符号模块 - 封闭符号类型的声明与忽略大小写解析

pub mod fold;
pub mod macros;
pub mod resolver;
pub mod serde_support;
pub mod symbol_table;

pub use fold::eq_ignore_case;
pub use resolver::{resolve, resolve_in, SymbolType, SymbolicConstant};
pub use symbol_table::{NamedConstant, SymbolTable};

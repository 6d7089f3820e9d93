pub mod error;
pub mod property;
pub mod symbol;

// 错误和结果类型
pub use error::{
    EnumPropError, EnumPropResult, ErrorCode, InvalidInputKind, PropertyError, PropertyResult,
    PublicError, SymbolError, SymbolTableError, ToPublicError,
};

// 符号解析
pub use symbol::{
    eq_ignore_case, resolve, resolve_in, NamedConstant, SymbolTable, SymbolType, SymbolicConstant,
};

// 属性映射
pub use property::PropertyMap;

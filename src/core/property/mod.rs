//! 属性模块 - 带类型转换的属性映射

pub mod conversion;
mod de;
pub mod property_map;

pub use conversion::json_kind;
pub use property_map::PropertyMap;

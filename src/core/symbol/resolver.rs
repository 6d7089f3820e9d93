//! 符号解析器
//!
//! 把外部输入的字符串解析为某个封闭符号类型中的常量：
//! 按声明顺序线性扫描，忽略大小写比较声明名称，返回第一个匹配项。
//! 多个名称在忽略大小写后相同时，序号最小（最先声明）的常量胜出。
//!
//! 解析是纯函数：无状态、无锁、无 IO、不写日志，可在任意线程并发调用。

use super::fold::eq_ignore_case;
use crate::core::error::SymbolError;

/// 符号常量
///
/// 符号类型中的一个成员，`name` 是其规范的声明拼写。
pub trait SymbolicConstant {
    fn name(&self) -> &str;
}

/// 符号类型
///
/// 编译期固定、封闭且非空的常量集合。`constants()` 必须按声明顺序返回全部常量，
/// 同一类型内不得有逐字节相同的名称，但允许忽略大小写后相同的名称。
pub trait SymbolType: SymbolicConstant + Sized + 'static {
    /// 用于诊断信息的类型名称
    const TYPE_NAME: &'static str;

    /// 按声明顺序排列的全部常量
    fn constants() -> &'static [Self];

    /// 常量在声明顺序中的位置
    fn ordinal(&self) -> usize {
        let name = self.name();
        Self::constants()
            .iter()
            .position(|c| c.name() == name)
            .unwrap_or(usize::MAX)
    }
}

/// 解析符号类型 `T` 中名称与 `query` 忽略大小写相等的常量
///
/// 返回的是 `T::constants()` 中的常量本身，而不是副本。
///
/// # Examples
/// ```
/// use enumprop::symbol_type;
/// use enumprop::core::symbol::resolve;
///
/// symbol_type! {
///     pub enum Color: "Color" {
///         Red => "RED",
///         Green => "GREEN",
///         Blue => "BLUE",
///     }
/// }
///
/// assert_eq!(*resolve::<Color>("green").unwrap(), Color::Green);
/// assert!(resolve::<Color>("yellow").is_err());
/// ```
pub fn resolve<T: SymbolType>(query: &str) -> Result<&'static T, SymbolError> {
    resolve_in(T::TYPE_NAME, T::constants(), query)
}

/// 在显式给出的常量集合上执行解析
///
/// `constants` 的迭代顺序即声明顺序。
pub fn resolve_in<'a, C: SymbolicConstant>(
    type_name: &str,
    constants: &'a [C],
    query: &str,
) -> Result<&'a C, SymbolError> {
    constants
        .iter()
        .find(|c| eq_ignore_case(c.name(), query))
        .ok_or_else(|| SymbolError::unknown(type_name, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Named(&'static str);

    impl SymbolicConstant for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Status {
        Ok,
        OkUpper,
        Failed,
    }

    impl SymbolicConstant for Status {
        fn name(&self) -> &str {
            match self {
                Status::Ok => "Ok",
                Status::OkUpper => "OK",
                Status::Failed => "Failed",
            }
        }
    }

    impl SymbolType for Status {
        const TYPE_NAME: &'static str = "Status";

        fn constants() -> &'static [Self] {
            &[Status::Ok, Status::OkUpper, Status::Failed]
        }
    }

    #[test]
    fn test_resolve_in_declaration_order() {
        let constants = [Named("RED"), Named("GREEN"), Named("BLUE")];
        let found = resolve_in("Color", &constants, "green").expect("green should resolve");
        assert!(std::ptr::eq(found, &constants[1]));
    }

    #[test]
    fn test_resolve_in_unknown() {
        let constants = [Named("RED")];
        let err = resolve_in("Color", &constants, "yellow").unwrap_err();
        assert_eq!(err, SymbolError::unknown("Color", "yellow"));
    }

    #[test]
    fn test_default_ordinal() {
        assert_eq!(Status::Ok.ordinal(), 0);
        assert_eq!(Status::OkUpper.ordinal(), 1);
        assert_eq!(Status::Failed.ordinal(), 2);
    }

    #[test]
    fn test_tie_break_prefers_first_declared() {
        assert_eq!(*resolve::<Status>("ok").unwrap(), Status::Ok);
        assert_eq!(*resolve::<Status>("oK").unwrap(), Status::Ok);
        // 精确拼写也不会越过先声明的常量
        assert_eq!(*resolve::<Status>("OK").unwrap(), Status::Ok);
    }

    #[test]
    fn test_returns_declared_constant() {
        let found = resolve::<Status>("FAILED").unwrap();
        assert!(std::ptr::eq(found, &Status::constants()[2]));
    }
}

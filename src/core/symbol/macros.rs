//! 符号类型声明宏

/// 声明一个符号类型
///
/// 生成无字段枚举，并实现 `SymbolicConstant`、`SymbolType`、`Display`、`FromStr`
/// 以及 serde 的 `Serialize`/`Deserialize`（反序列化忽略大小写）。
/// 枚举自动派生 `Debug, Clone, Copy, PartialEq, Eq, Hash`，调用方不要重复派生。
///
/// 变体名与声明拼写相互独立，因此可以声明仅大小写不同的名称。
///
/// ```
/// use enumprop::symbol_type;
///
/// symbol_type! {
///     /// 响应状态
///     pub enum Status: "Status" {
///         Ok => "Ok",
///         OkUpper => "OK",
///     }
/// }
///
/// let status: Status = "ok".parse().unwrap();
/// assert_eq!(status, Status::Ok);
/// assert_eq!(Status::OkUpper.to_string(), "OK");
/// ```
#[macro_export]
macro_rules! symbol_type {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $enum_name:ident : $type_name:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant_name:ident => $symbol_name:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant_name,
            )+
        }

        impl $enum_name {
            /// 按声明顺序排列的全部常量
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant_name),+];

            /// 规范的声明拼写
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                        $enum_name::$variant_name => $symbol_name,
                    )+
                }
            }
        }

        impl $crate::core::symbol::SymbolicConstant for $enum_name {
            fn name(&self) -> &str {
                self.as_str()
            }
        }

        impl $crate::core::symbol::SymbolType for $enum_name {
            const TYPE_NAME: &'static str = $type_name;

            fn constants() -> &'static [Self] {
                Self::ALL
            }

            fn ordinal(&self) -> usize {
                *self as usize
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = $crate::core::error::SymbolError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::core::symbol::resolve::<Self>(s).copied()
            }
        }

        impl $crate::__private::serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::core::symbol::serde_support::deserialize(deserializer)
            }
        }
    };
}

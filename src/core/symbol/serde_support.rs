//! serde 集成
//!
//! 可直接用于 `#[serde(with = "enumprop::core::symbol::serde_support")]`，
//! 让任意 `SymbolType + Copy` 的字段在反序列化时忽略大小写。

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use super::resolver::{resolve, SymbolType, SymbolicConstant};

/// 以规范名称序列化符号常量
pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: SymbolicConstant,
{
    serializer.serialize_str(value.name())
}

/// 从字符串反序列化符号常量，匹配失败时错误信息包含类型名与原始输入
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: SymbolType + Copy,
{
    deserializer.deserialize_str(SymbolVisitor(PhantomData))
}

struct SymbolVisitor<T>(PhantomData<T>);

impl<'de, T: SymbolType + Copy> Visitor<'de> for SymbolVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} name", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        resolve::<T>(v).copied().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Mode {
        Fast,
        Safe,
    }

    impl super::SymbolicConstant for Mode {
        fn name(&self) -> &str {
            match self {
                Mode::Fast => "fast",
                Mode::Safe => "safe",
            }
        }
    }

    impl super::SymbolType for Mode {
        const TYPE_NAME: &'static str = "Mode";

        fn constants() -> &'static [Self] {
            &[Mode::Fast, Mode::Safe]
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Settings {
        #[serde(with = "super")]
        mode: Mode,
    }

    #[test]
    fn test_with_attribute() {
        let settings: Settings = toml::from_str("mode = \"SAFE\"").unwrap();
        assert_eq!(settings.mode, Mode::Safe);

        let out = toml::to_string(&settings).unwrap();
        assert!(out.contains("mode = \"safe\""));
    }

    #[test]
    fn test_unknown_value_message() {
        let err = toml::from_str::<Settings>("mode = \"turbo\"").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Mode"));
        assert!(message.contains("turbo"));
    }
}

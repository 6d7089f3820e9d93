//! 属性值转换
//!
//! 属性值统一使用 JSON 值表示，本模块负责 JSON 值与目标类型之间的转换。

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::core::error::{PropertyError, PropertyResult};
use crate::core::symbol::{resolve, NamedConstant, SymbolTable, SymbolType, SymbolicConstant};

/// JSON 值的类别名称，用于类型不匹配的错误信息
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 符号常量写入属性映射时使用其规范名称
pub fn symbol_to_value<C: SymbolicConstant + ?Sized>(constant: &C) -> Value {
    Value::String(constant.name().to_string())
}

pub fn value_to_symbol<T: SymbolType + Copy>(key: &str, value: &Value) -> PropertyResult<T> {
    match value {
        Value::String(s) => resolve::<T>(s)
            .copied()
            .map_err(|e| PropertyError::symbol(key, &e)),
        other => Err(PropertyError::type_mismatch(key, T::TYPE_NAME, json_kind(other))),
    }
}

pub fn value_to_table_symbol<'a>(
    table: &'a SymbolTable,
    key: &str,
    value: &Value,
) -> PropertyResult<&'a NamedConstant> {
    match value {
        Value::String(s) => table.resolve(s).map_err(|e| PropertyError::symbol(key, &e)),
        other => Err(PropertyError::type_mismatch(
            key,
            table.type_name(),
            json_kind(other),
        )),
    }
}

pub fn value_to_str<'a>(key: &str, value: &'a Value) -> PropertyResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| PropertyError::type_mismatch(key, "string", json_kind(value)))
}

pub fn value_to_i64(key: &str, value: &Value) -> PropertyResult<i64> {
    value
        .as_i64()
        .ok_or_else(|| PropertyError::type_mismatch(key, "integer", json_kind(value)))
}

/// 整数会被放宽为浮点数
pub fn value_to_f64(key: &str, value: &Value) -> PropertyResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| PropertyError::type_mismatch(key, "float", json_kind(value)))
}

pub fn value_to_bool(key: &str, value: &Value) -> PropertyResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| PropertyError::type_mismatch(key, "bool", json_kind(value)))
}

/// RFC 3339 格式的日期时间，保留原始时区偏移
pub fn value_to_datetime(key: &str, value: &Value) -> PropertyResult<DateTime<FixedOffset>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map_err(|_| PropertyError::parsing(key, "无效的日期/时间")),
        other => Err(PropertyError::type_mismatch(key, "datetime", json_kind(other))),
    }
}

/// TOML 值转换为 JSON 值，日期时间保留为字符串
///
/// JSON 无法表示 `nan` 和 `inf`，遇到时返回带字段路径的解析错误
pub fn toml_to_json(value: toml::Value) -> PropertyResult<Value> {
    let value = match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(Number::from(i)),
        toml::Value::Float(f) => Number::from_f64(f).map(Value::Number).ok_or_else(|| {
            PropertyError::parsing_root(format!("不支持非有限的浮点数: {}", f))
        })?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<PropertyResult<Vec<Value>>>()?,
        ),
        toml::Value::Table(table) => {
            let mut map = Map::new();
            for (key, item) in table {
                let item = toml_to_json(item).map_err(|e| e.prefixed(&key))?;
                map.insert(key, item);
            }
            Value::Object(map)
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::symbol_type! {
        enum Shape: "Shape" {
            Circle => "CIRCLE",
            Square => "SQUARE",
        }
    }

    #[test]
    fn test_value_to_symbol() {
        assert_eq!(
            value_to_symbol::<Shape>("shape", &json!("circle")).unwrap(),
            Shape::Circle
        );
    }

    #[test]
    fn test_value_to_symbol_wrong_kind() {
        let err = value_to_symbol::<Shape>("shape", &json!(3)).unwrap_err();
        assert_eq!(
            err,
            PropertyError::type_mismatch("shape", "Shape", "number")
        );
    }

    #[test]
    fn test_value_to_symbol_unknown_name() {
        let err = value_to_symbol::<Shape>("shape", &json!("triangle")).unwrap_err();
        assert!(matches!(err, PropertyError::Parsing { .. }));
        assert!(err.to_string().contains("triangle"));
    }

    #[test]
    fn test_int_widens_to_float() {
        assert_eq!(value_to_f64("x", &json!(3)).unwrap(), 3.0);
        assert!(value_to_i64("x", &json!(3.5)).is_err());
    }

    #[test]
    fn test_toml_to_json() {
        let table: toml::Table = toml::from_str(
            "name = \"a\"\ncount = 2\nratio = 0.5\n[nested]\nflag = true\n",
        )
        .unwrap();
        assert_eq!(
            toml_to_json(toml::Value::Table(table)).unwrap(),
            json!({"name": "a", "count": 2, "ratio": 0.5, "nested": {"flag": true}})
        );
    }

    #[test]
    fn test_toml_non_finite_float_is_rejected() {
        let table: toml::Table = toml::from_str("[nested]\nratio = nan\n").unwrap();
        let err = toml_to_json(toml::Value::Table(table)).unwrap_err();
        assert!(matches!(err, PropertyError::Parsing { .. }));
        assert_eq!(err.field_path(), &["nested".to_string(), "ratio".to_string()]);

        let table: toml::Table = toml::from_str("limit = inf\n").unwrap();
        assert!(toml_to_json(toml::Value::Table(table)).is_err());
    }

    #[test]
    fn test_value_to_datetime() {
        let dt = value_to_datetime("at", &json!("2016-04-14T17:00:00+02:00")).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);

        let err = value_to_datetime("at", &json!("2016-04-40T17:00:00Z")).unwrap_err();
        assert_eq!(err, PropertyError::parsing("at", "无效的日期/时间"));

        let err = value_to_datetime("at", &json!(5)).unwrap_err();
        assert_eq!(err, PropertyError::type_mismatch("at", "datetime", "number"));
    }
}

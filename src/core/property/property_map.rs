//! 属性映射
//!
//! `String -> JSON 值` 的映射，在读取时按目标类型做转换。
//! 字符串形式的符号常量通过忽略大小写的解析器转换为强类型值，
//! 转换失败时返回带字段路径的 `PropertyError`。
//! 整个映射也可以通过 serde 与带类型的结构体互相转换。

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Display;
use std::path::Path;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::conversion::{
    json_kind, symbol_to_value, toml_to_json, value_to_bool, value_to_datetime, value_to_f64,
    value_to_i64, value_to_str, value_to_symbol, value_to_table_symbol,
};
use super::de::ValueDeserializer;
use crate::core::error::{
    EnumPropError, EnumPropResult, InvalidInputKind, PropertyError, PropertyResult,
};
use crate::core::symbol::{NamedConstant, SymbolTable, SymbolType, SymbolicConstant};

/// 属性映射
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    values: HashMap<String, Value>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 对象创建，非对象值返回 `type_invalid`
    pub fn from_json(value: Value) -> PropertyResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            other => Err(PropertyError::type_invalid("object", json_kind(&other))),
        }
    }

    /// 读取 `.json` 或 `.toml` 属性文件
    pub fn load<P: AsRef<Path>>(path: P) -> EnumPropResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let value = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => {
                let table: toml::Table = toml::from_str(&content)?;
                toml_to_json(toml::Value::Table(table))?
            }
            Some(ext) if ext.eq_ignore_ascii_case("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(EnumPropError::Config(format!(
                    "不支持的属性文件格式: {}",
                    path.display()
                )))
            }
        };
        log::debug!("已读取属性文件: {}", path.display());
        Ok(Self::from_json(value)?)
    }

    /// 由可序列化的值创建，结构体字段成为映射的键
    ///
    /// 符号常量写入其规范名称，日期时间写入 RFC 3339 字符串。
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> PropertyResult<Self> {
        let json = serde_json::to_value(value)
            .map_err(|e| PropertyError::parsing_root(e.to_string()))?;
        Self::from_json(json)
    }

    /// 把整个映射反序列化为目标类型
    ///
    /// 字段值错误带有出错字段的完整路径；缺少必需字段时路径为其所在的对象。
    ///
    /// # Examples
    /// ```
    /// use enumprop::PropertyMap;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Simple {
    ///     s: String,
    ///     i: i64,
    /// }
    ///
    /// let props = PropertyMap::from_json(serde_json::json!({"s": "abc", "i": 5})).unwrap();
    /// let simple: Simple = props.deserialize().unwrap();
    /// assert_eq!(simple.s, "abc");
    /// assert_eq!(simple.i, 5);
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> PropertyResult<T> {
        let value = self.to_json();
        T::deserialize(ValueDeserializer::new(&value))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// 以规范名称写入符号常量
    pub fn insert_symbol<C: SymbolicConstant + ?Sized>(
        &mut self,
        key: impl Into<String>,
        constant: &C,
    ) -> Option<Value> {
        self.values.insert(key.into(), symbol_to_value(constant))
    }

    pub fn insert_datetime<Tz>(&mut self, key: impl Into<String>, value: &DateTime<Tz>) -> Option<Value>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.values
            .insert(key.into(), Value::String(value.to_rfc3339()))
    }

    pub fn insert_symbols<'a, C, I>(&mut self, key: impl Into<String>, constants: I) -> Option<Value>
    where
        C: SymbolicConstant + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        let list = constants.into_iter().map(symbol_to_value).collect();
        self.values.insert(key.into(), Value::Array(list))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn remove_raw(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 键不存在或值为 null 时返回 `None`
    fn present(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    pub fn get_str(&self, key: &str) -> PropertyResult<Option<&str>> {
        self.present(key).map(|v| value_to_str(key, v)).transpose()
    }

    pub fn get_i64(&self, key: &str) -> PropertyResult<Option<i64>> {
        self.present(key).map(|v| value_to_i64(key, v)).transpose()
    }

    pub fn get_f64(&self, key: &str) -> PropertyResult<Option<f64>> {
        self.present(key).map(|v| value_to_f64(key, v)).transpose()
    }

    pub fn get_bool(&self, key: &str) -> PropertyResult<Option<bool>> {
        self.present(key).map(|v| value_to_bool(key, v)).transpose()
    }

    /// 按 RFC 3339 读取日期时间，格式无效时返回 `Parsing`
    pub fn get_datetime(&self, key: &str) -> PropertyResult<Option<DateTime<FixedOffset>>> {
        self.present(key)
            .map(|v| value_to_datetime(key, v))
            .transpose()
    }

    /// 读取日期时间并换算为 UTC 时刻
    pub fn get_instant(&self, key: &str) -> PropertyResult<Option<DateTime<Utc>>> {
        Ok(self.get_datetime(key)?.map(|dt| dt.with_timezone(&Utc)))
    }

    /// 通过 serde 把字段值转换为任意类型，错误路径以 `key` 开头
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> PropertyResult<Option<T>> {
        self.present(key)
            .map(|v| T::deserialize(ValueDeserializer::new(v)).map_err(|e| e.prefixed(key)))
            .transpose()
    }

    /// 读取嵌套映射
    pub fn get_map(&self, key: &str) -> PropertyResult<Option<PropertyMap>> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Self {
                values: map.clone().into_iter().collect(),
            })),
            Some(other) => Err(PropertyError::type_mismatch(key, "object", json_kind(other))),
        }
    }

    /// 按忽略大小写的规则把字段值解析为符号常量
    pub fn get_symbol<T: SymbolType + Copy>(&self, key: &str) -> PropertyResult<Option<T>> {
        self.present(key)
            .map(|v| value_to_symbol::<T>(key, v))
            .transpose()
            .inspect_err(|e| log::debug!("属性转换失败: {}", e))
    }

    /// 读取符号常量列表，列表中不允许出现 null
    pub fn get_symbol_list<T: SymbolType + Copy>(&self, key: &str) -> PropertyResult<Option<Vec<T>>> {
        let items = match self.present(key) {
            None => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(PropertyError::type_mismatch(
                    key,
                    format!("list of {}", T::TYPE_NAME),
                    json_kind(other),
                ))
            }
        };

        items
            .iter()
            .map(|item| {
                if item.is_null() {
                    Err(PropertyError::parsing(key, "列表中不能包含 null 值"))
                } else {
                    value_to_symbol::<T>(key, item)
                }
            })
            .collect::<PropertyResult<Vec<T>>>()
            .map(Some)
    }

    /// 在运行时符号表中解析字段值
    pub fn get_symbol_in<'t>(
        &self,
        table: &'t SymbolTable,
        key: &str,
    ) -> PropertyResult<Option<&'t NamedConstant>> {
        self.present(key)
            .map(|v| value_to_table_symbol(table, key, v))
            .transpose()
    }

    /// 沿嵌套映射路径读取符号常量，错误中的字段路径为完整路径
    pub fn get_symbol_path<T: SymbolType + Copy>(&self, path: &[&str]) -> PropertyResult<Option<T>> {
        match path {
            [] => Ok(None),
            [key] => self.get_symbol::<T>(key),
            [parent, rest @ ..] => match self.get_map(parent)? {
                None => Ok(None),
                Some(nested) => nested
                    .get_symbol_path::<T>(rest)
                    .map_err(|e| e.prefixed(parent)),
            },
        }
    }

    /// 移除字段并转换为符号常量
    pub fn remove_symbol<T: SymbolType + Copy>(&mut self, key: &str) -> PropertyResult<Option<T>> {
        match self.values.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value_to_symbol::<T>(key, &value).map(Some),
        }
    }

    /// 必需字段：键必须存在且不为 null
    pub fn required_symbol<T: SymbolType + Copy>(&self, key: &str) -> PropertyResult<T> {
        self.get_symbol::<T>(key)?
            .ok_or_else(|| PropertyError::required([key]))
    }

    pub fn required_str(&self, key: &str) -> PropertyResult<&str> {
        self.get_str(key)?.ok_or_else(|| PropertyError::required([key]))
    }

    pub fn required<T: DeserializeOwned>(&self, key: &str) -> PropertyResult<T> {
        self.get::<T>(key)?
            .ok_or_else(|| PropertyError::required([key]))
    }

    /// 键必须存在，但值允许为 null
    pub fn required_nullable<T: DeserializeOwned>(&self, key: &str) -> PropertyResult<Option<T>> {
        if !self.contains(key) {
            return Err(PropertyError::required([key]));
        }
        self.get::<T>(key)
    }

    /// 不在允许列表中的键，按字典序排列
    pub fn keys_not_in(&self, allowed: &[&str]) -> BTreeSet<String> {
        self.values
            .keys()
            .filter(|k| !allowed.contains(&k.as_str()))
            .cloned()
            .collect()
    }

    /// 存在不允许的键时返回 `field_not_allowed`
    pub fn check_allowed(&self, allowed: &[&str]) -> PropertyResult<()> {
        let extra = self.keys_not_in(allowed);
        if extra.is_empty() {
            Ok(())
        } else {
            Err(PropertyError::not_allowed(extra))
        }
    }

    /// 按点号分隔的路径检查允许的字段，如 `["name", "style.accent"]`
    ///
    /// 声明了子路径的字段必须是对象（或 null），并递归检查其中的键；
    /// 嵌套层的错误以 `@ 父字段` 的形式给出位置。
    pub fn check_allowed_paths(&self, allowed: &[&str]) -> PropertyResult<()> {
        let mut top: Vec<&str> = Vec::with_capacity(allowed.len());
        let mut nested: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for path in allowed {
            match path.split_once('.') {
                Some((head, rest)) => {
                    top.push(head);
                    nested.entry(head).or_default().push(rest);
                }
                None => top.push(*path),
            }
        }
        self.check_allowed(&top)?;

        for (key, children) in nested {
            match self.present(key) {
                None => {}
                Some(Value::Object(map)) => {
                    let child: PropertyMap = map.clone().into_iter().collect();
                    child
                        .check_allowed_paths(&children)
                        .map_err(|e| e.prefixed(key))?;
                }
                Some(_) => {
                    return Err(PropertyError::invalid_input(
                        InvalidInputKind::FieldContentInvalid,
                        [key],
                    )
                    .with_detail("期望对象"))
                }
            }
        }
        Ok(())
    }

    /// 字段存在且解析结果与当前值不同时返回 true
    pub fn has_changed_symbol<T>(&self, key: &str, current: T) -> PropertyResult<bool>
    where
        T: SymbolType + Copy + PartialEq,
    {
        if !self.contains(key) {
            return Ok(false);
        }
        Ok(self.get_symbol::<T>(key)? != Some(current))
    }

    /// 字段发生变化时以新值调用 `block`
    pub fn with_changed_symbol<T, F>(&self, key: &str, current: T, block: F) -> PropertyResult<()>
    where
        T: SymbolType + Copy + PartialEq,
        F: FnOnce(Option<T>),
    {
        if self.has_changed_symbol(key, current)? {
            block(self.get_symbol::<T>(key)?);
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl From<HashMap<String, Value>> for PropertyMap {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, Value)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

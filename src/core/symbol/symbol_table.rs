//! 运行时符号表
//!
//! 用于只能在配置中声明的符号集合。常量按给定顺序分配序号，
//! 构造后不可变，解析规则与编译期符号类型完全一致。

use std::collections::HashSet;
use std::sync::Arc;

use super::resolver::{resolve_in, SymbolicConstant};
use crate::core::error::{SymbolError, SymbolTableError};

/// 运行时声明的符号常量
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedConstant {
    pub name: Arc<str>,
    pub ordinal: usize,
}

impl SymbolicConstant for NamedConstant {
    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for NamedConstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// 运行时符号表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    type_name: Arc<str>,
    constants: Vec<NamedConstant>,
}

impl SymbolTable {
    /// 按给定顺序创建符号表
    ///
    /// 名称为空集合或存在逐字节相同的名称时返回错误；
    /// 忽略大小写后相同的名称是允许的。
    pub fn new<I, S>(type_name: impl Into<Arc<str>>, names: I) -> Result<Self, SymbolTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let type_name = type_name.into();
        let mut seen = HashSet::new();
        let mut constants = Vec::new();

        for (ordinal, name) in names.into_iter().enumerate() {
            let name: Arc<str> = name.into();
            if !seen.insert(name.clone()) {
                return Err(SymbolTableError::DuplicateName {
                    type_name: type_name.to_string(),
                    name: name.to_string(),
                });
            }
            constants.push(NamedConstant { name, ordinal });
        }

        if constants.is_empty() {
            return Err(SymbolTableError::Empty {
                type_name: type_name.to_string(),
            });
        }

        Ok(Self {
            type_name,
            constants,
        })
    }

    /// 解析与 `query` 忽略大小写相等、序号最小的常量
    pub fn resolve(&self, query: &str) -> Result<&NamedConstant, SymbolError> {
        resolve_in(&self.type_name, &self.constants, query)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    pub fn get(&self, ordinal: usize) -> Option<&NamedConstant> {
        self.constants.get(ordinal)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedConstant> {
        self.constants.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constants.iter().map(|c| c.name.as_ref())
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a NamedConstant;
    type IntoIter = std::slice::Iter<'a, NamedConstant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

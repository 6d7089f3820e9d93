use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::error::{EnumPropError, EnumPropResult};
use crate::core::symbol::SymbolTable;

#[cfg(test)]
pub mod test_config;

crate::symbol_type! {
    /// 日志级别，配置文件中的取值不区分大小写
    pub enum LogLevel: "LogLevel" {
        Off => "off",
        Error => "error",
        Warn => "warn",
        Info => "info",
        Debug => "debug",
        Trace => "trace",
    }
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            to_file: false,
            dir: "logs".to_string(),
            file: "enumprop".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 配置中声明的符号表
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SymbolTableConfig {
    pub name: String,
    pub constants: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub symbols: Vec<SymbolTableConfig>,
    /// 属性键 -> 符号表名称
    pub fields: BTreeMap<String, String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> EnumPropResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> EnumPropResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 检查符号表定义以及字段绑定是否指向已声明的符号表
    pub fn validate(&self) -> EnumPropResult<()> {
        let tables = self.symbol_tables()?;
        for (field, table) in &self.fields {
            if !tables.iter().any(|t| t.type_name() == table) {
                return Err(EnumPropError::Config(format!(
                    "字段 {} 绑定了未声明的符号表 {}",
                    field, table
                )));
            }
        }
        Ok(())
    }

    /// 构建全部运行时符号表，重复的表名视为配置错误
    pub fn symbol_tables(&self) -> EnumPropResult<Vec<SymbolTable>> {
        let mut tables: Vec<SymbolTable> = Vec::with_capacity(self.symbols.len());
        for def in &self.symbols {
            if tables.iter().any(|t| t.type_name() == def.name) {
                return Err(EnumPropError::Config(format!("重复的符号表名称: {}", def.name)));
            }
            tables.push(SymbolTable::new(
                def.name.as_str(),
                def.constants.iter().map(String::as_str),
            )?);
        }
        Ok(tables)
    }

    /// 按表名（区分大小写）查找符号表
    pub fn symbol_table(&self, name: &str) -> EnumPropResult<SymbolTable> {
        let def = self
            .symbols
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| EnumPropError::Config(format!("未声明的符号表: {}", name)))?;
        Ok(SymbolTable::new(
            def.name.as_str(),
            def.constants.iter().map(String::as_str),
        )?)
    }
}

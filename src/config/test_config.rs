//! 测试配置模块
//!
//! 配置文件统一写入临时目录，避免在项目路径中留下文件。
//! 此模块仅在测试时编译

use std::path::PathBuf;

use tempfile::TempDir;

use super::{Config, SymbolTableConfig};

/// 测试配置结构体，临时目录随结构体一起释放
#[derive(Debug)]
pub struct TestConfig {
    root: TempDir,
}

impl TestConfig {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temporary directory"),
        }
    }

    /// 获取临时目录中的配置文件路径
    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.toml")
    }

    /// 带一个 Color 符号表和一个字段绑定的配置
    pub fn with_colors(&self) -> Config {
        let mut config = Config::default();
        config.symbols.push(SymbolTableConfig {
            name: "Color".to_string(),
            constants: ["RED", "GREEN", "BLUE"].iter().map(|s| s.to_string()).collect(),
        });
        config
            .fields
            .insert("color".to_string(), "Color".to_string());
        config
    }

    /// 写入原始 TOML 内容并返回路径
    pub fn write_raw(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::write(&path, content).expect("Failed to write config file");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_in_temp_dir() {
        let test_config = TestConfig::new();
        assert!(test_config.config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_with_colors_is_valid() {
        let config = TestConfig::new().with_colors();
        assert!(config.validate().is_ok());
    }
}

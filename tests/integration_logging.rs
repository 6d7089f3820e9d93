//! 日志系统集成测试
//!
//! 全局 logger 每个进程只能初始化一次，因此初始化流程集中在单个测试中

use std::fs;
use std::time::Duration;

use enumprop::config::{Config, LogConfig, LogLevel};
use enumprop::utils::logging;
use serial_test::serial;
use tempfile::TempDir;

/// 测试日志配置默认值
#[test]
#[serial]
fn test_log_config_defaults() {
    let config = Config::default();

    assert_eq!(config.log.level, LogLevel::Info);
    assert!(!config.log.to_file);
    assert_eq!(config.log.dir, "logs");
    assert_eq!(config.log.file, "enumprop");
    assert_eq!(config.log.max_files, 5);
}

/// 测试日志级别序列化为规范名称
#[test]
#[serial]
fn test_log_level_serialization() {
    let config = Config {
        log: LogConfig {
            level: LogLevel::Debug,
            ..LogConfig::default()
        },
        ..Config::default()
    };

    let toml_str = toml::to_string_pretty(&config).expect("序列化配置失败");
    assert!(toml_str.contains("level = \"debug\""));

    let loaded: Config = toml::from_str(&toml_str.replace("\"debug\"", "\"DeBuG\""))
        .expect("反序列化配置失败");
    assert_eq!(loaded.log.level, LogLevel::Debug);
}

/// 测试文件日志的初始化、写入和关闭
#[test]
#[serial]
fn test_file_logging_init_and_shutdown() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let log_config = LogConfig {
        level: LogLevel::Debug,
        to_file: true,
        dir: temp_dir.path().to_string_lossy().into_owned(),
        ..LogConfig::default()
    };

    let result = logging::init(&log_config);
    assert!(result.is_ok(), "日志初始化失败: {:?}", result.err());
    assert!(logging::is_initialized());

    log::debug!("测试日志消息");

    logging::shutdown();
    assert!(!logging::is_initialized());

    // 异步写入线程可能稍晚落盘
    std::thread::sleep(Duration::from_millis(100));
    let has_log_file = fs::read_dir(temp_dir.path())
        .expect("读取日志目录失败")
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("enumprop"));
    assert!(has_log_file);
}

//! 集成测试共享工具模块
//!
//! 提供测试用的符号类型和临时文件辅助函数

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

enumprop::symbol_type! {
    /// 三原色
    pub enum Color: "Color" {
        Red => "RED",
        Green => "GREEN",
        Blue => "BLUE",
    }
}

enumprop::symbol_type! {
    /// 名称仅大小写不同的符号类型
    pub enum Status: "Status" {
        Ok => "Ok",
        OkUpper => "OK",
        Failed => "Failed",
    }
}

enumprop::symbol_type! {
    /// 非 ASCII 名称
    pub enum Season: "Season" {
        Ete => "ÉTÉ",
        Hiver => "HIVER",
    }
}

/// 测试文件目录，结构体释放时自动清理
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("创建临时目录失败"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// 在临时目录中写入文件并返回其路径
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("创建文件失败");
        file.write_all(content.as_bytes()).expect("写入文件失败");
        path
    }
}

/// 把名称的大小写逐字符交替翻转
pub fn alternate_case(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_lowercase().collect::<String>()
            } else {
                c.to_uppercase().collect::<String>()
            }
        })
        .collect()
}

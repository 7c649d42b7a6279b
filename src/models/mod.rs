//! # 数据模型模块
//!
//! 定义变量、命令模板、过滤器以及匹配结果。
//!
//! ## 依赖关系
//! - 被 `registry/`, `resolve/`, `batch/`, `config/` 使用
//! - 子模块: token, command, filter

pub mod command;
pub mod filter;
pub mod token;

pub use command::{Command, CommandDef};
pub use filter::{Filter, FilterDef};
pub use token::{Token, TokenDef};

use crate::error::{PlowError, Result};
use std::path::{Path, PathBuf};

/// 路径转为 UTF-8 字符串；非 UTF-8 路径直接报错，不做有损替换
pub fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| PlowError::NonUtf8Path {
        path: path.display().to_string(),
    })
}

/// 匹配引擎产出的 (文件, 命令名) 记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    pub path: PathBuf,
    pub command: String,
}

impl MatchedFile {
    pub fn new(path: impl Into<PathBuf>, command: &str) -> Self {
        Self {
            path: path.into(),
            command: command.to_string(),
        }
    }
}

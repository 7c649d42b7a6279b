//! # 命令执行模块
//!
//! 串联配置加载、文件匹配、命令解析与顺序执行。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config/`, `registry/`, `resolve/`, `batch/`
//! - 子模块: run

pub mod run;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    run::execute(cli.run)
}

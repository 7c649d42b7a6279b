//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ```text
//! plow [OPTIONS] [PATHS]...
//! ```
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run

pub mod run;

use clap::Parser;

/// plow - 按过滤器将文件分派给 shell 命令
#[derive(Parser)]
#[command(name = "plow")]
#[command(version)]
#[command(about = "Run shell commands over files matched by declarative filters", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub run: run::RunArgs,
}

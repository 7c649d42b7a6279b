//! # 运行参数 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Args;
use std::path::PathBuf;

/// 运行参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Files or directories to process
    pub paths: Vec<PathBuf>,

    /// Config file path [default: ~/.plow]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the resolved commands without running them
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Number of threads used for glob expansion (0 = all CPUs)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Echo each command and its output as it completes
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

//! # plow - 声明式文件命令分派工具
//!
//! 按配置中的过滤器匹配输入文件，将命令模板替换变量后逐条执行。
//!
//! ## 流程
//! 输入路径 → 文件匹配 → (文件, 命令名) → 模板替换 → 顺序执行
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (主流程编排)
//!   │     ├── config/    (YAML 配置加载)
//!   │     ├── registry/  (过滤器与命令注册表)
//!   │     ├── resolve/   (占位符替换与命令解析)
//!   │     └── batch/     (文件匹配与顺序执行)
//!   ├── models/     (数据模型)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod registry;
mod resolve;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

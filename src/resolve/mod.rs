//! # 命令解析模块
//!
//! 把 (文件, 命令名) 解析为最终可执行的命令字符串。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `registry/commands.rs`, `models/`
//! - 子模块: template, runner

pub mod runner;
pub mod template;

pub use runner::CommandRunner;

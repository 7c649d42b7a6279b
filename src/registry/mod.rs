//! # 注册表模块
//!
//! 保存按注册顺序排列的命令模板与过滤器。
//! 同名条目不去重，查找时先注册者优先。
//!
//! ## 依赖关系
//! - 被 `resolve/` 和 `batch/` 使用
//! - 使用 `models/`
//! - 子模块: commands, filters

pub mod commands;
pub mod filters;

pub use commands::CommandRegistry;
pub use filters::FilterRegistry;

//! # 批量处理模块
//!
//! 文件匹配与命令的顺序执行。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 目录按过滤器并行展开 glob
//! - 单文件直接测试 glob 与路径正则
//! - 逐条执行命令并反馈进度
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `rayon` 并行展开 glob
//! - 使用 `indicatif` 显示进度

pub mod executor;
pub mod matcher;
pub mod target;

pub use matcher::FileMatcher;

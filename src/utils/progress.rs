//! # 进度条工具
//!
//! 命令执行进度条：显示已完成条数、预计剩余时间与当前命令。
//!
//! ## 依赖关系
//! - 被 `batch/executor.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

const COMMAND_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} ({eta}) {wide_msg}";

/// 创建命令队列进度条，消息位由执行器设为当前命令
pub fn create_command_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(COMMAND_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    ProgressBar::new(len).with_style(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_template_is_valid() {
        assert!(ProgressStyle::with_template(COMMAND_TEMPLATE).is_ok());
    }

    #[test]
    fn test_command_bar_length() {
        let pb = create_command_bar(3);
        assert_eq!(pb.length(), Some(3));
        assert_eq!(pb.position(), 0);
    }
}

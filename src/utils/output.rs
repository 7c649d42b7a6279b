//! # 终端输出工具
//!
//! 统一的状态行样式；错误与警告写入 stderr，不干扰被执行命令的 stdout。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/` 与 `batch/executor.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::time::Duration;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "::".blue().bold(), msg);
}

/// 单条命令完成行，如 `[2/5] make lint (0.4s)`
pub fn command_line(position: usize, total: usize, command: &str, elapsed: Duration) -> String {
    format!(
        "[{}/{}] {} ({:.1}s)",
        position,
        total,
        command,
        elapsed.as_secs_f64()
    )
}

/// 打印单条命令完成行
pub fn print_command(position: usize, total: usize, command: &str, elapsed: Duration) {
    println!(
        "{} {}",
        "ok".green().bold(),
        command_line(position, total, command, elapsed)
    );
}

/// 打印批次结束摘要
pub fn print_summary(completed: usize, elapsed: Duration) {
    println!(
        "{} ran {} command(s) in {:.1}s",
        "done".green().bold(),
        completed,
        elapsed.as_secs_f64()
    );
}

/// 打印执行计划标题
pub fn print_plan_header(count: usize) {
    println!("{} {} command(s) would run", "plan".cyan().bold(), count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_format() {
        let line = command_line(2, 5, "make lint", Duration::from_millis(420));
        assert_eq!(line, "[2/5] make lint (0.4s)");
    }
}

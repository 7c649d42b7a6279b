//! # 顺序执行器
//!
//! 逐条在子 shell 中执行已解析的命令。
//!
//! ## 功能
//! - `CommandQueue` 迭代器：每次 `next()` 启动一个子进程并等待其结束
//! - 失败（无法启动或非零退出）后迭代器终止，剩余命令不再执行
//! - 每完成一条命令推进一次进度条
//! - 不支持取消与超时
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `utils/progress.rs`, `utils/output.rs`

use crate::error::{PlowError, Result};
use crate::utils::{output, progress};

use std::process::{Command, Output};
use std::time::{Duration, Instant};

/// 单条命令完成事件
#[derive(Debug, Clone)]
pub struct Completion {
    /// 在批次中的序号（从 0 开始）
    pub index: usize,
    pub command: String,
    pub stdout: String,
    pub elapsed: Duration,
}

/// 批次执行统计
#[derive(Debug, Default)]
pub struct ExecSummary {
    pub completed: usize,
    pub elapsed: Duration,
}

/// 顺序命令队列
pub struct CommandQueue {
    commands: std::vec::IntoIter<String>,
    index: usize,
    halted: bool,
}

impl CommandQueue {
    pub fn new(commands: Vec<String>) -> Self {
        Self {
            commands: commands.into_iter(),
            index: 0,
            halted: false,
        }
    }

    /// 尚未执行的命令数（失败终止后即被跳过的命令数）
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }

    /// 下一条将要执行的命令
    pub fn peek(&self) -> Option<&str> {
        if self.halted {
            return None;
        }
        self.commands.as_slice().first().map(String::as_str)
    }
}

impl Iterator for CommandQueue {
    type Item = Result<Completion>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        let command = self.commands.next()?;
        let index = self.index;
        self.index += 1;

        let started = Instant::now();
        let result = execute(&command).map(|out| Completion {
            index,
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            command,
            elapsed: started.elapsed(),
        });

        if result.is_err() {
            self.halted = true;
        }
        Some(result)
    }
}

/// 构造平台相关的 shell 调用
fn shell(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

/// 执行单条命令并等待结束，非零退出视为失败
pub fn execute(command: &str) -> Result<Output> {
    let out = shell(command)
        .output()
        .map_err(|e| PlowError::CommandSpawn {
            command: command.to_string(),
            source: e,
        })?;

    if out.status.success() {
        Ok(out)
    } else {
        Err(PlowError::CommandFailed {
            command: command.to_string(),
            status: out.status.to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).trim_end().to_string(),
        })
    }
}

/// 带进度条顺序执行全部命令，遇到第一个失败即返回
pub fn run_sequential(commands: Vec<String>, verbose: bool) -> Result<ExecSummary> {
    let started = Instant::now();
    let total = commands.len();
    let pb = progress::create_command_bar(total as u64);
    let mut queue = CommandQueue::new(commands);
    let mut summary = ExecSummary::default();

    loop {
        if let Some(next) = queue.peek() {
            pb.set_message(next.to_string());
        }

        let done = match queue.next() {
            None => break,
            Some(Ok(done)) => done,
            Some(Err(e)) => {
                pb.abandon_with_message("failed");
                let skipped = queue.remaining();
                if skipped > 0 {
                    output::print_warning(&format!(
                        "Stopped after failure, {} command(s) not run",
                        skipped
                    ));
                }
                return Err(e);
            }
        };

        if verbose {
            pb.suspend(|| {
                output::print_command(done.index + 1, total, &done.command, done.elapsed);
                let stdout = done.stdout.trim_end();
                if !stdout.is_empty() {
                    println!("{}", stdout);
                }
            });
        }

        summary.completed += 1;
        pb.inc(1);
    }

    pb.finish_and_clear();
    summary.elapsed = started.elapsed();
    Ok(summary)
}

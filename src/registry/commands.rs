//! # 命令注册表
//!
//! ## 依赖关系
//! - 被 `resolve/runner.rs` 使用
//! - 使用 `models/command.rs`

use crate::error::Result;
use crate::models::{Command, CommandDef};

/// 命令模板注册表
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// 校验并追加一条命令
    pub fn add(&mut self, def: CommandDef) -> Result<()> {
        self.commands.push(Command::try_from(def)?);
        Ok(())
    }

    /// 按顺序追加多条命令，遇到非法条目立即返回
    pub fn add_all(&mut self, defs: impl IntoIterator<Item = CommandDef>) -> Result<()> {
        defs.into_iter().try_for_each(|def| self.add(def))
    }

    /// 线性查找，返回第一个同名命令
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

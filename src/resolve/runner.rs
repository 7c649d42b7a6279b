//! # 命令解析器
//!
//! 持有变量列表与命令注册表，把匹配结果解析为命令字符串。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `registry/commands.rs`, `resolve/template.rs`

use crate::error::{PlowError, Result};
use crate::models::{path_str, Command, CommandDef, MatchedFile, Token, TokenDef};
use crate::registry::CommandRegistry;
use crate::resolve::template::substitute;

/// 命令解析器
#[derive(Debug, Default)]
pub struct CommandRunner {
    tokens: Vec<Token>,
    commands: CommandRegistry,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_token(&mut self, def: TokenDef) -> Result<()> {
        self.tokens.push(Token::try_from(def)?);
        Ok(())
    }

    pub fn add_tokens(&mut self, defs: impl IntoIterator<Item = TokenDef>) -> Result<()> {
        defs.into_iter().try_for_each(|def| self.add_token(def))
    }

    pub fn add_command(&mut self, def: CommandDef) -> Result<()> {
        self.commands.add(def)
    }

    pub fn add_commands(&mut self, defs: impl IntoIterator<Item = CommandDef>) -> Result<()> {
        self.commands.add_all(defs)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn commands(&self) -> &[Command] {
        self.commands.commands()
    }

    /// 解析单个 (命令名, 文件路径)
    pub fn resolve(&self, command_name: &str, file_path: &str) -> Result<String> {
        let cmd = self
            .commands
            .find(command_name)
            .ok_or_else(|| PlowError::CommandNotFound {
                name: command_name.to_string(),
            })?;
        Ok(substitute(&cmd.run, &self.tokens, file_path))
    }

    /// 按输入顺序批量解析；任一失败则整体失败，不返回部分结果
    pub fn resolve_all(&self, files: &[MatchedFile]) -> Result<Vec<String>> {
        files
            .iter()
            .map(|f| self.resolve(&f.command, path_str(&f.path)?))
            .collect()
    }
}

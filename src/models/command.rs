//! # 命令模板数据模型
//!
//! 命名的 shell 命令模板，`run` 中可包含 `%TOKEN%` 与 `%FILE_NAME%` 占位符。
//!
//! ## 依赖关系
//! - 被 `resolve/` 使用
//! - 被 `config/` 反序列化

use crate::error::{PlowError, Result};
use serde::Deserialize;

/// 配置文件中的原始命令定义
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommandDef {
    pub name: Option<String>,
    pub run: Option<String>,
}

#[cfg(test)]
impl CommandDef {
    pub fn new(name: &str, run: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            run: Some(run.to_string()),
        }
    }
}

/// 已校验的命令模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub run: String,
}

impl TryFrom<CommandDef> for Command {
    type Error = PlowError;

    fn try_from(def: CommandDef) -> Result<Self> {
        let name = def.name.ok_or(PlowError::MissingField {
            kind: "command",
            field: "name",
        })?;
        let run = def.run.ok_or(PlowError::MissingField {
            kind: "command",
            field: "run",
        })?;
        Ok(Command { name, run })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_requires_name_and_run() {
        assert!(Command::try_from(CommandDef::new("name", "echo")).is_ok());

        let no_name = CommandDef {
            name: None,
            run: Some("echo".to_string()),
        };
        assert!(Command::try_from(no_name).unwrap_err().is_validation());

        let no_run = CommandDef {
            name: Some("name".to_string()),
            run: None,
        };
        let err = Command::try_from(no_run).unwrap_err();
        assert_eq!(err.to_string(), "run must be defined for each command");
    }
}

//! # 配置加载模块
//!
//! 读取 YAML 配置文件，结构如下：
//!
//! ```yaml
//! plow:
//!   filters:
//!     - { name: logs, files: "**/*.log", match: "area2", command: tail }
//!   commands:
//!     - { name: tail, run: "tail -n %LINES% %FILE_NAME%" }
//!   tokens:
//!     - { name: LINES, value: 20 }
//! ```
//!
//! 缺少 `plow` 节视为错误；`filters` / `commands` / `tokens` 缺省为空列表。
//! 默认路径为 `$HOME/.plow`。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `models/` 的原始定义类型
//! - 使用 `serde_yaml`, `dirs`

use crate::error::{PlowError, Result};
use crate::models::{CommandDef, FilterDef, TokenDef};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件名（位于用户主目录）
pub const DEFAULT_CONFIG_FILE: &str = ".plow";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    plow: Option<PlowConfig>,
}

/// `plow` 配置节
#[derive(Debug, Default, Deserialize)]
pub struct PlowConfig {
    #[serde(default)]
    pub filters: Vec<FilterDef>,
    #[serde(default)]
    pub commands: Vec<CommandDef>,
    #[serde(default)]
    pub tokens: Vec<TokenDef>,
}

impl PlowConfig {
    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| PlowError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&text, path)
    }

    /// 解析 YAML 文本，`origin` 仅用于错误信息
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(text).map_err(|e| PlowError::ConfigParse {
            path: origin.display().to_string(),
            source: e,
        })?;

        file.plow.ok_or_else(|| PlowError::ConfigMissingSection {
            path: origin.display().to_string(),
        })
    }

    /// `$HOME/.plow`
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_CONFIG_FILE))
            .ok_or(PlowError::HomeDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<PlowConfig> {
        PlowConfig::from_yaml(text, Path::new("test.yml"))
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
plow:
  filters:
    - name: logs
      files: "**/*.log"
      match: area2
      command: tail
    - name: text
      files: "*.txt"
      command: cat
  commands:
    - name: tail
      run: "tail -n %LINES% %FILE_NAME%"
    - name: cat
      run: "cat %FILE_NAME%"
  tokens:
    - name: LINES
      value: 20
"#,
        )
        .unwrap();

        assert_eq!(config.filters.len(), 2);
        assert_eq!(config.filters[0].matcher.as_deref(), Some("area2"));
        assert_eq!(config.filters[1].matcher, None);
        assert_eq!(config.commands[1], CommandDef::new("cat", "cat %FILE_NAME%"));
        assert_eq!(config.tokens[0], TokenDef::new("LINES", "20"));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let config = parse("plow:\n  commands:\n    - { name: a, run: echo }\n").unwrap();
        assert!(config.filters.is_empty());
        assert!(config.tokens.is_empty());
        assert_eq!(config.commands.len(), 1);
    }

    #[test]
    fn test_missing_fields_survive_parsing() {
        // 字段缺失在注册阶段报校验错误，而不是解析错误
        let config = parse("plow:\n  filters:\n    - { name: a, files: '*.txt' }\n").unwrap();
        assert_eq!(config.filters[0].command, None);
    }

    #[test]
    fn test_missing_plow_section() {
        let err = parse("other:\n  key: value\n").unwrap_err();
        assert!(matches!(err, PlowError::ConfigMissingSection { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse("plow: [unclosed").unwrap_err();
        assert!(matches!(err, PlowError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::Builder::new().prefix("plow").tempdir().unwrap();
        let err = PlowConfig::load(&dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, PlowError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::Builder::new().prefix("plow").tempdir().unwrap();
        let path = dir.path().join(".plow");
        fs::write(&path, "plow:\n  tokens:\n    - { name: A, value: b }\n").unwrap();

        let config = PlowConfig::load(&path).unwrap();
        assert_eq!(config.tokens, vec![TokenDef::new("A", "b")]);
    }
}

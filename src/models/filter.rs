//! # 过滤器数据模型
//!
//! 过滤器 = glob 文件模式 + 可选路径正则 + 关联命令名。
//! glob 与正则在注册时编译，非法模式立即报错。
//!
//! ## 依赖关系
//! - 被 `registry/filters.rs` 和 `batch/` 使用
//! - 使用 `glob`, `regex`

use crate::error::{PlowError, Result};
use crate::models::path_str;
use glob::{MatchOptions, Pattern};
use regex::Regex;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// glob 匹配选项：`*` 不跨越路径分隔符，默认不匹配隐藏文件
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// 配置文件中的原始过滤器定义
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterDef {
    pub name: Option<String>,
    pub files: Option<String>,
    #[serde(rename = "match")]
    pub matcher: Option<String>,
    pub command: Option<String>,
}

#[cfg(test)]
impl FilterDef {
    pub fn new(name: &str, files: &str, command: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            files: Some(files.to_string()),
            matcher: None,
            command: Some(command.to_string()),
        }
    }

    /// 追加路径正则
    pub fn with_match(mut self, regex: &str) -> Self {
        self.matcher = Some(regex.to_string());
        self
    }
}

/// 已校验的过滤器
#[derive(Debug, Clone)]
pub struct Filter {
    pub name: String,
    /// 原始 glob 文本（目录展开时拼接在根路径之后）
    pub files: String,
    /// 关联的命令名，解析时才校验是否存在
    pub command: String,
    pattern: Pattern,
    matcher: Option<Regex>,
}

impl Filter {
    /// 单文件匹配：不含分隔符的模式只与文件名比较（matchBase 语义），
    /// 否则与去掉开头 `./` 的完整路径比较
    pub fn matches_file(&self, path: &Path) -> Result<bool> {
        if self.files.contains('/') || self.files.contains(std::path::MAIN_SEPARATOR) {
            let trimmed: PathBuf = path
                .components()
                .skip_while(|c| matches!(c, Component::CurDir))
                .collect();
            return Ok(self.pattern.matches_with(path_str(&trimmed)?, MATCH_OPTIONS));
        }

        match path.file_name() {
            Some(name) => Ok(self
                .pattern
                .matches_with(path_str(Path::new(name))?, MATCH_OPTIONS)),
            None => Ok(false),
        }
    }

    /// 路径正则检查；未配置正则时恒为真
    pub fn accepts_path(&self, path: &Path) -> Result<bool> {
        match &self.matcher {
            Some(re) => Ok(re.is_match(path_str(path)?)),
            None => Ok(true),
        }
    }

    /// 隐藏名（以 `.` 开头）只能被同样以 `.` 开头的模式段显式匹配
    pub fn allows_hidden(&self, name: &str) -> bool {
        self.files
            .split(['/', std::path::MAIN_SEPARATOR])
            .filter(|seg| seg.starts_with('.'))
            .any(|seg| {
                Pattern::new(seg)
                    .map(|p| p.matches_with(name, MATCH_OPTIONS))
                    .unwrap_or(false)
            })
    }

    pub fn match_regex(&self) -> Option<&str> {
        self.matcher.as_ref().map(|re| re.as_str())
    }
}

impl TryFrom<FilterDef> for Filter {
    type Error = PlowError;

    fn try_from(def: FilterDef) -> Result<Self> {
        let name = def.name.ok_or(PlowError::MissingField {
            kind: "filter",
            field: "name",
        })?;
        let files = def.files.ok_or(PlowError::MissingField {
            kind: "filter",
            field: "files",
        })?;
        let command = def.command.ok_or(PlowError::MissingField {
            kind: "filter",
            field: "command",
        })?;

        let pattern = Pattern::new(&files).map_err(|e| PlowError::InvalidField {
            kind: "filter",
            name: name.clone(),
            field: "files",
            reason: e.to_string(),
        })?;

        let matcher = def
            .matcher
            .map(|m| Regex::new(&m))
            .transpose()
            .map_err(|e| PlowError::InvalidField {
                kind: "filter",
                name: name.clone(),
                field: "match",
                reason: e.to_string(),
            })?;

        Ok(Filter {
            name,
            files,
            command,
            pattern,
            matcher,
        })
    }
}

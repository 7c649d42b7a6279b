//! # 匹配目标
//!
//! 输入路径分为目录与单文件两类，对同一个过滤器产生候选文件的方式不同：
//! - 目录：展开 `根路径 + 过滤器 glob`，再用路径正则筛选
//! - 单文件：文件名（或完整路径）直接测试 glob，同时满足路径正则
//!
//! ## 依赖关系
//! - 被 `batch/matcher.rs` 调用
//! - 使用 `glob` 展开目录

use crate::error::{PlowError, Result};
use crate::models::filter::{Filter, MATCH_OPTIONS};
use crate::models::path_str;

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// 目录展开选项。隐藏文件由 `is_hidden` 另行排除：
/// glob 在 `require_literal_leading_dot` 下遇到非 UTF-8 文件名会 panic
const EXPAND_OPTIONS: MatchOptions = MatchOptions {
    require_literal_leading_dot: false,
    ..MATCH_OPTIONS
};

/// 匹配目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchTarget {
    Directory(PathBuf),
    File(PathBuf),
}

impl MatchTarget {
    /// 读取文件元数据判断路径类型；路径不存在或无权限时报错
    pub fn classify(root: &Path) -> Result<Self> {
        let meta = fs::metadata(root).map_err(|e| PlowError::FileSystem {
            path: root.display().to_string(),
            source: e,
        })?;

        if meta.is_dir() {
            Ok(MatchTarget::Directory(root.to_path_buf()))
        } else {
            Ok(MatchTarget::File(root.to_path_buf()))
        }
    }

    /// 生成该过滤器命中的候选文件
    pub fn candidates(&self, filter: &Filter) -> Result<Vec<PathBuf>> {
        match self {
            MatchTarget::Directory(dir) => expand_directory(dir, filter),
            MatchTarget::File(file) => {
                if filter.matches_file(file)? && filter.accepts_path(file)? {
                    Ok(vec![file.clone()])
                } else {
                    Ok(Vec::new())
                }
            }
        }
    }
}

/// 拼接目录 glob：根路径按字面量转义，必要时补分隔符
fn directory_pattern(dir: &Path, files: &str) -> Result<String> {
    let mut pattern = Pattern::escape(path_str(dir)?);
    if !pattern.ends_with('/') && !pattern.ends_with(std::path::MAIN_SEPARATOR) {
        pattern.push('/');
    }
    pattern.push_str(files);
    Ok(pattern)
}

/// `dir` 之下的任一路径段是否为隐藏名且未被模式显式匹配
fn is_hidden(dir: &Path, path: &Path, filter: &Filter) -> Result<bool> {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    for component in relative.components() {
        if let Component::Normal(name) = component {
            let name = path_str(Path::new(name))?;
            if name.starts_with('.') && !filter.allows_hidden(name) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// 展开目录下的 glob，只保留普通文件
fn expand_directory(dir: &Path, filter: &Filter) -> Result<Vec<PathBuf>> {
    let pattern = directory_pattern(dir, &filter.files)?;

    let entries =
        glob::glob_with(&pattern, EXPAND_OPTIONS).map_err(|e| PlowError::GlobPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| PlowError::FileSystem {
            path: e.path().display().to_string(),
            source: e.into(),
        })?;

        if is_hidden(dir, &path, filter)? {
            continue;
        }
        if path.is_file() && filter.accepts_path(&path)? {
            files.push(path);
        }
    }

    Ok(files)
}

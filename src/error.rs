//! # 统一错误处理模块
//!
//! 定义 plow 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// plow 统一错误类型
#[derive(Error, Debug)]
pub enum PlowError {
    // ─────────────────────────────────────────────────────────────
    // 校验错误（注册时同步抛出）
    // ─────────────────────────────────────────────────────────────
    #[error("{field} must be defined for each {kind}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("Invalid {field} for {kind} '{name}': {reason}")]
    InvalidField {
        kind: &'static str,
        name: String,
        field: &'static str,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 命令解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Command not found: {name}")]
    CommandNotFound { name: String },

    // ─────────────────────────────────────────────────────────────
    // 文件系统错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to access path: {path}")]
    FileSystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },

    #[error("Failed to expand glob pattern '{pattern}': {reason}")]
    GlobPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}\nReason: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config file has no 'plow' section: {path}")]
    ConfigMissingSection { path: String },

    #[error("Cannot determine home directory, pass --config explicitly")]
    HomeDirNotFound,

    // ─────────────────────────────────────────────────────────────
    // 外部命令执行错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to spawn command: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed ({status}): {command}\n{stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

#[cfg(test)]
impl PlowError {
    /// 是否为注册阶段的校验错误
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlowError::MissingField { .. } | PlowError::InvalidField { .. }
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PlowError>;

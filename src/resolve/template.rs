//! # 占位符替换
//!
//! 每个占位符只替换第一次出现的位置；未注册的占位符原样保留。
//!
//! ## 依赖关系
//! - 被 `resolve/runner.rs` 使用
//! - 无外部模块依赖

use crate::models::Token;

/// 保留的文件路径占位符
pub const FILE_NAME_PLACEHOLDER: &str = "%FILE_NAME%";

/// 替换 `haystack` 中第一次出现的 `needle`
pub fn replace_first(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    haystack.replacen(needle, replacement, 1)
}

/// 按注册顺序替换变量，最后替换 `%FILE_NAME%`
pub fn substitute(template: &str, tokens: &[Token], file_path: &str) -> String {
    let command = tokens.iter().fold(template.to_string(), |acc, token| {
        replace_first(&acc, &token.placeholder(), &token.value)
    });
    replace_first(&command, FILE_NAME_PLACEHOLDER, file_path)
}

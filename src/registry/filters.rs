//! # 过滤器注册表
//!
//! 注册顺序即匹配结果的输出顺序。
//!
//! ## 依赖关系
//! - 被 `batch/matcher.rs` 使用
//! - 使用 `models/filter.rs`

use crate::error::Result;
use crate::models::{Filter, FilterDef};

/// 过滤器注册表
#[derive(Debug, Default)]
pub struct FilterRegistry {
    filters: Vec<Filter>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 校验（含 glob/正则编译）并追加一个过滤器
    pub fn add_filter(&mut self, def: FilterDef) -> Result<()> {
        self.filters.push(Filter::try_from(def)?);
        Ok(())
    }

    pub fn add_filters(&mut self, defs: impl IntoIterator<Item = FilterDef>) -> Result<()> {
        defs.into_iter().try_for_each(|def| self.add_filter(def))
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }
}

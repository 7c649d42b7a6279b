//! # 文件匹配引擎
//!
//! 将输入路径映射为 (文件, 命令名) 记录。
//!
//! ## 功能
//! - 按输入顺序处理每个根路径
//! - 目录目标：各过滤器的 glob 展开在 rayon 线程池中并行执行，按注册顺序合并
//! - 单文件目标：逐个过滤器测试
//! - 同一文件被多个过滤器命中时，每个过滤器各产生一条记录
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `batch/target.rs`, `registry/filters.rs`
//! - 使用 `rayon` 进行并行展开

use crate::batch::target::MatchTarget;
use crate::error::{PlowError, Result};
use crate::models::{Filter, MatchedFile};
use crate::registry::FilterRegistry;

use rayon::prelude::*;
use std::path::Path;

/// 文件匹配引擎
pub struct FileMatcher<'a> {
    filters: &'a FilterRegistry,
    pool: rayon::ThreadPool,
}

impl<'a> FileMatcher<'a> {
    /// 创建匹配引擎，`jobs` 为 0 时使用全部 CPU
    pub fn new(filters: &'a FilterRegistry, jobs: usize) -> Result<Self> {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| PlowError::ThreadPool(e.to_string()))?;

        Ok(Self { filters, pool })
    }

    /// 匹配所有根路径；任一路径访问失败则整体失败
    pub fn match_files<P: AsRef<Path>>(&self, roots: &[P]) -> Result<Vec<MatchedFile>> {
        let mut matched = Vec::new();
        for root in roots {
            let target = MatchTarget::classify(root.as_ref())?;
            matched.extend(self.match_target(&target)?);
        }
        Ok(matched)
    }

    /// 对单个目标应用全部过滤器，结果按过滤器注册顺序展平
    pub fn match_target(&self, target: &MatchTarget) -> Result<Vec<MatchedFile>> {
        let filters = self.filters.filters();

        let per_filter: Vec<Vec<MatchedFile>> = match target {
            MatchTarget::Directory(_) => self.pool.install(|| {
                filters
                    .par_iter()
                    .map(|filter| Self::apply(target, filter))
                    .collect::<Result<Vec<_>>>()
            })?,
            MatchTarget::File(_) => filters
                .iter()
                .map(|filter| Self::apply(target, filter))
                .collect::<Result<Vec<_>>>()?,
        };

        Ok(per_filter.into_iter().flatten().collect())
    }

    fn apply(target: &MatchTarget, filter: &Filter) -> Result<Vec<MatchedFile>> {
        Ok(target
            .candidates(filter)?
            .into_iter()
            .map(|path| MatchedFile::new(path, &filter.command))
            .collect())
    }
}

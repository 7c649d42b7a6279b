//! # 运行流程实现
//!
//! ## 功能
//! - 加载配置并填充过滤器注册表与命令解析器
//! - 匹配输入路径，解析为命令字符串
//! - `--dry-run` 时以表格输出执行计划
//! - 否则逐条执行并显示进度，遇错即停
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `config/`, `registry/`, `resolve/`, `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{executor, FileMatcher};
use crate::cli::run::RunArgs;
use crate::config::PlowConfig;
use crate::error::Result;
use crate::models::MatchedFile;
use crate::registry::FilterRegistry;
use crate::resolve::CommandRunner;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行计划行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Command")]
    command: String,
    #[tabled(rename = "Resolved")]
    resolved: String,
}

/// 执行主流程
pub fn execute(args: RunArgs) -> Result<()> {
    let config_path = match args.config {
        Some(path) => path,
        None => PlowConfig::default_path()?,
    };
    let config = PlowConfig::load(&config_path)?;
    let (filters, runner) = build_pipeline(config)?;

    if args.verbose {
        output::print_info(&format!(
            "Loaded {} filter(s), {} command(s), {} token(s) from '{}'",
            filters.filters().len(),
            runner.commands().len(),
            runner.tokens().len(),
            config_path.display()
        ));
        for line in describe_filters(&filters) {
            output::print_info(&line);
        }
    }

    let matcher = FileMatcher::new(&filters, args.jobs)?;
    let matched = matcher.match_files(&args.paths)?;
    let commands = runner.resolve_all(&matched)?;

    if commands.is_empty() {
        output::print_warning("No files matched any filter.");
        return Ok(());
    }

    if args.dry_run {
        print_plan(&matched, &commands);
        return Ok(());
    }

    let summary = executor::run_sequential(commands, args.verbose)?;
    output::print_summary(summary.completed, summary.elapsed);

    Ok(())
}

/// 用配置填充注册表；任一条目非法即失败
pub fn build_pipeline(config: PlowConfig) -> Result<(FilterRegistry, CommandRunner)> {
    let mut filters = FilterRegistry::new();
    filters.add_filters(config.filters)?;

    let mut runner = CommandRunner::new();
    runner.add_tokens(config.tokens)?;
    runner.add_commands(config.commands)?;

    Ok((filters, runner))
}

/// 每个过滤器一行摘要：名称、glob、可选正则、命令
fn describe_filters(filters: &FilterRegistry) -> Vec<String> {
    filters
        .filters()
        .iter()
        .map(|f| match f.match_regex() {
            Some(re) => format!("  {}: {} (match /{}/) -> {}", f.name, f.files, re, f.command),
            None => format!("  {}: {} -> {}", f.name, f.files, f.command),
        })
        .collect()
}

/// 打印执行计划
fn print_plan(matched: &[MatchedFile], commands: &[String]) {
    let rows: Vec<PlanRow> = matched
        .iter()
        .zip(commands)
        .enumerate()
        .map(|(i, (file, resolved))| PlanRow {
            index: i + 1,
            file: file.path.display().to_string(),
            command: file.command.clone(),
            resolved: resolved.clone(),
        })
        .collect();

    output::print_plan_header(rows.len());
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlowError;
    use std::fs::{self, File};

    const CONFIG: &str = r#"
plow:
  filters:
    - { name: text, files: "**/*.txt", command: count }
    - { name: area2-logs, files: "*.log", match: area2, command: show }
  commands:
    - { name: count, run: "wc -l %FILE_NAME% >> %OUT%" }
    - { name: show, run: "cat %FILE_NAME%" }
  tokens:
    - { name: OUT, value: /dev/null }
"#;

    #[test]
    fn test_pipeline_end_to_end_resolution() {
        let dir = tempfile::Builder::new().prefix("plow").tempdir().unwrap();
        let area2 = dir.path().join("area2");
        fs::create_dir(&area2).unwrap();
        File::create(area2.join("a.txt")).unwrap();
        File::create(area2.join("b.log")).unwrap();

        let config = PlowConfig::from_yaml(CONFIG, std::path::Path::new("inline")).unwrap();
        let (filters, runner) = build_pipeline(config).unwrap();

        let matched = FileMatcher::new(&filters, 1)
            .unwrap()
            .match_files(&[dir.path().to_path_buf(), area2.join("b.log")])
            .unwrap();
        let commands = runner.resolve_all(&matched).unwrap();

        assert_eq!(
            commands,
            vec![
                format!("wc -l {} >> /dev/null", area2.join("a.txt").display()),
                format!("cat {}", area2.join("b.log").display()),
            ]
        );
    }

    #[test]
    fn test_describe_filters() {
        let config = PlowConfig::from_yaml(CONFIG, std::path::Path::new("inline")).unwrap();
        let (filters, _) = build_pipeline(config).unwrap();

        assert_eq!(
            describe_filters(&filters),
            vec![
                "  text: **/*.txt -> count".to_string(),
                "  area2-logs: *.log (match /area2/) -> show".to_string(),
            ]
        );
    }

    #[test]
    fn test_build_pipeline_rejects_invalid_entries() {
        let config = PlowConfig::from_yaml(
            "plow:\n  commands:\n    - { name: broken }\n",
            std::path::Path::new("inline"),
        )
        .unwrap();
        let err = build_pipeline(config).unwrap_err();
        assert!(matches!(
            err,
            PlowError::MissingField {
                kind: "command",
                field: "run"
            }
        ));
    }

    #[test]
    fn test_unknown_command_reference_fails_at_resolution() {
        let config = PlowConfig::from_yaml(
            "plow:\n  filters:\n    - { name: t, files: '*.txt', command: ghost }\n",
            std::path::Path::new("inline"),
        )
        .unwrap();
        let (filters, runner) = build_pipeline(config).unwrap();

        let dir = tempfile::Builder::new().prefix("plow").tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let matched = FileMatcher::new(&filters, 1)
            .unwrap()
            .match_files(&[dir.path().to_path_buf()])
            .unwrap();
        assert_eq!(matched.len(), 1);
        assert!(matches!(
            runner.resolve_all(&matched),
            Err(PlowError::CommandNotFound { .. })
        ));
    }
}

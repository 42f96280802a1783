//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑：收集参数、调用核心计算、打印结果、
//! 写出图表或数据文件。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `graphene/`, `cnt/`, `models/`, `utils/`
//! - 子模块: graphene, cnt

pub mod cnt;
pub mod graphene;

use crate::cli::{Commands, OutputFormat};
use crate::error::Result;

use std::path::{Path, PathBuf};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Graphene(args) => graphene::execute(args),
        Commands::Cnt(args) => cnt::execute(args),
    }
}

/// 确定输出格式：显式指定优先，否则按扩展名推断（默认 PNG）
fn resolve_format(explicit: Option<OutputFormat>, path: &Path) -> OutputFormat {
    explicit.unwrap_or_else(|| {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => OutputFormat::Svg,
            Some("csv") => OutputFormat::Csv,
            _ => OutputFormat::Png,
        }
    })
}

/// 在文件名后追加后缀并替换扩展名，如 `out.png` -> `out_atoms.csv`
fn sibling_path(path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    path.with_file_name(format!("{}{}.{}", stem, suffix, extension))
}

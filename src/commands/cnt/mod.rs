//! # cnt 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/cnt.rs` 定义的参数
//! - 子模块: analyze, bands, sweep

pub mod analyze;
pub mod bands;
pub mod sweep;

use crate::cli::cnt::{CntArgs, CntCommands};
use crate::error::Result;

/// 执行 cnt 命令
pub fn execute(args: CntArgs) -> Result<()> {
    match args.command {
        CntCommands::Analyze(analyze_args) => analyze::execute(analyze_args),
        CntCommands::Bands(bands_args) => bands::execute(bands_args),
        CntCommands::Sweep(sweep_args) => sweep::execute(sweep_args),
    }
}

//! # graphene 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/graphene.rs` 定义的参数
//! - 子模块: structure, bands

pub mod bands;
pub mod structure;

use crate::cli::graphene::{GrapheneArgs, GrapheneCommands};
use crate::error::Result;

/// 执行 graphene 命令
pub fn execute(args: GrapheneArgs) -> Result<()> {
    match args.command {
        GrapheneCommands::Structure(structure_args) => structure::execute(structure_args),
        GrapheneCommands::Bands(bands_args) => bands::execute(bands_args),
    }
}

//! # graphene 子命令 CLI 定义
//!
//! - `structure`: 生成蜂窝晶格并检测化学键
//! - `bands`: 沿高对称路径计算紧束缚能带
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/graphene/` 相应模块

use crate::cli::{FigureArgs, OutputFormat};

use clap::{Args, Subcommand};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// Graphene 主命令
// ─────────────────────────────────────────────────────────────

/// graphene 主命令参数
#[derive(Args, Debug)]
pub struct GrapheneArgs {
    #[command(subcommand)]
    pub command: GrapheneCommands,
}

/// graphene 子命令
#[derive(Subcommand, Debug)]
pub enum GrapheneCommands {
    /// Build a graphene honeycomb lattice and detect its bonds
    Structure(StructureArgs),

    /// Tight-binding band structure along Γ → K → M → Γ
    Bands(BandsArgs),
}

// ─────────────────────────────────────────────────────────────
// 结构子命令
// ─────────────────────────────────────────────────────────────

/// structure 子命令参数
#[derive(Args, Debug)]
pub struct StructureArgs {
    /// Unit cells along the first lattice vector
    #[arg(long, default_value_t = 8)]
    pub nx: usize,

    /// Unit cells along the second lattice vector
    #[arg(long, default_value_t = 8)]
    pub ny: usize,

    /// Lattice constant a (arb. units; equals the drawn bond length)
    #[arg(short = 'a', long, default_value_t = 1.0)]
    pub lattice_constant: f64,

    /// Target bond length for neighbour detection
    #[arg(long, default_value_t = 1.0)]
    pub bond_length: f64,

    /// Accepted deviation from the bond length (strict)
    #[arg(long, default_value_t = 0.2)]
    pub tolerance: f64,

    /// Output file (CSV export writes <stem>_atoms.csv and <stem>_bonds.csv)
    #[arg(short, long, default_value = "graphene_structure.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

// ─────────────────────────────────────────────────────────────
// 能带子命令
// ─────────────────────────────────────────────────────────────

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// Lattice constant a (arb. units)
    #[arg(short = 'a', long, default_value_t = 1.0)]
    pub lattice_constant: f64,

    /// Nearest-neighbour hopping energy t
    #[arg(short = 't', long, default_value_t = 1.0)]
    pub hopping: f64,

    /// Samples per path segment (segment endpoints included)
    #[arg(long, default_value_t = 150)]
    pub n_points: usize,

    /// Output file
    #[arg(short, long, default_value = "graphene_bands.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub figure: FigureArgs,
}

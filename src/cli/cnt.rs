//! # cnt 子命令 CLI 定义
//!
//! - `analyze`: 单个手性的类型、直径、带隙
//! - `bands`: 简化子带能带
//! - `sweep`: (n, m) 三角区域扫描
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cnt/` 相应模块

use crate::cli::{FigureArgs, OutputFormat};
use crate::models::{CntParams, SubbandParams};

use clap::{Args, Subcommand};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// CNT 主命令
// ─────────────────────────────────────────────────────────────

/// cnt 主命令参数
#[derive(Args, Debug)]
pub struct CntArgs {
    #[command(subcommand)]
    pub command: CntCommands,
}

/// cnt 子命令
#[derive(Subcommand, Debug)]
pub enum CntCommands {
    /// Classify a (n, m) tube and report its diameter and bandgap
    Analyze(AnalyzeArgs),

    /// Simplified multi-subband band structure along the tube axis
    Bands(BandsArgs),

    /// Sweep 1 <= n <= n_max, 0 <= m <= n and plot bandgap vs diameter
    Sweep(SweepArgs),
}

/// 共享物理常数
#[derive(Args, Debug, Clone, Copy)]
pub struct ConstantsArgs {
    /// Graphene lattice constant a in nm
    #[arg(long, default_value_t = 0.246)]
    pub lattice_constant: f64,

    /// Nearest-neighbour hopping energy t in eV
    #[arg(long, default_value_t = 2.7)]
    pub hopping: f64,

    /// Carbon-carbon bond length a_cc in nm
    #[arg(long, default_value_t = 0.142)]
    pub acc: f64,
}

impl ConstantsArgs {
    pub fn params(&self) -> CntParams {
        CntParams {
            lattice_constant: self.lattice_constant,
            hopping: self.hopping,
            bond_length: self.acc,
        }
    }
}

/// 手性指数参数
#[derive(Args, Debug, Clone, Copy)]
pub struct ChiralityArgs {
    /// Chiral index n
    #[arg(short = 'n', long)]
    pub n: u32,

    /// Chiral index m
    #[arg(short = 'm', long)]
    pub m: u32,
}

// ─────────────────────────────────────────────────────────────
// analyze 子命令
// ─────────────────────────────────────────────────────────────

/// analyze 子命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub chirality: ChiralityArgs,

    #[command(flatten)]
    pub constants: ConstantsArgs,
}

// ─────────────────────────────────────────────────────────────
// bands 子命令
// ─────────────────────────────────────────────────────────────

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    #[command(flatten)]
    pub chirality: ChiralityArgs,

    /// Subbands on each side of q = 0 (q runs over -modes..=modes)
    #[arg(long, default_value_t = 8)]
    pub modes: u32,

    /// Energy spacing between neighbouring subbands
    #[arg(long, default_value_t = 0.3)]
    pub spacing: f64,

    /// Number of k samples on [-π, π]
    #[arg(long, default_value_t = 400)]
    pub k_points: usize,

    /// Output file
    #[arg(short, long, default_value = "cnt_bands.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub constants: ConstantsArgs,

    #[command(flatten)]
    pub figure: FigureArgs,
}

impl BandsArgs {
    pub fn subband_params(&self) -> SubbandParams {
        SubbandParams {
            modes: self.modes,
            spacing: self.spacing,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// sweep 子命令
// ─────────────────────────────────────────────────────────────

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Largest n in the sweep
    #[arg(long, default_value_t = 20)]
    pub n_max: u32,

    /// Output file
    #[arg(short, long, default_value = "cnt_eg_vs_diameter.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of rows to print from the property table
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    #[command(flatten)]
    pub constants: ConstantsArgs,

    #[command(flatten)]
    pub figure: FigureArgs,
}

//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `graphene`: 石墨烯（嵌套子命令）
//!   - `structure`: 蜂窝结构与化学键
//!   - `bands`: Γ → K → M → Γ 能带
//! - `cnt`: 碳纳米管（嵌套子命令）
//!   - `analyze`: 单个 (n, m) 的类型、直径、带隙
//!   - `bands`: 简化子带能带
//!   - `sweep`: 带隙-直径扫描
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: graphene, cnt

pub mod cnt;
pub mod graphene;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// nanocarbon - 石墨烯与碳纳米管结构/能带工具箱
#[derive(Parser)]
#[command(name = "nanocarbon")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Graphene lattice and carbon nanotube electronic-structure toolkit",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Graphene honeycomb structure and tight-binding bands
    Graphene(graphene::GrapheneArgs),

    /// Carbon nanotube chirality analysis, bands and sweeps
    Cnt(cnt::CntArgs),
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file
    Csv,
}

/// 图表尺寸参数
#[derive(Args, Debug, Clone, Copy)]
pub struct FigureArgs {
    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 650)]
    pub height: u32,
}

impl FigureArgs {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

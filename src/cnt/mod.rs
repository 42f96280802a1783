//! # 碳纳米管计算模块
//!
//! 手性分类、直径与带隙、参数扫描以及简化子带能带。
//!
//! ## 子模块
//! - `chirality`: 类型判断、直径、带隙
//! - `sweep`: (n, m) 三角区域扫描
//! - `bands`: 沿管轴的多子带色散
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/cnt/` 使用
//! - 使用 `models/nanotube.rs`

pub mod bands;
pub mod chirality;
pub mod export;
pub mod plot;
pub mod sweep;

pub use bands::{subbands, CntBands};
pub use sweep::{generate_table, generate_table_parallel, CntTable};

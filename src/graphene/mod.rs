//! # 石墨烯计算模块
//!
//! 蜂窝晶格几何与紧束缚能带。
//!
//! ## 子模块
//! - `lattice`: 原子坐标生成与成键检测
//! - `kpath`: 倒空间高对称路径采样
//! - `dispersion`: 紧束缚色散关系
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/graphene/` 使用
//! - 使用 `models/sheet.rs`

pub mod dispersion;
pub mod export;
pub mod kpath;
pub mod lattice;
pub mod plot;

pub use dispersion::{band_structure, BandStructure};
pub use kpath::{graphene_path, linspace};
pub use lattice::{detect_bonds, generate_lattice};

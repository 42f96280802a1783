//! # 数据模型模块
//!
//! 定义石墨烯晶格与碳纳米管的值类型，以及带默认值的物理参数集。
//!
//! ## 依赖关系
//! - 被 `graphene/`, `cnt/` 和 `commands/` 使用
//! - 子模块: sheet, nanotube

pub mod nanotube;
pub mod sheet;

pub use nanotube::{Chirality, CntParams, CntRecord, CntType, SubbandParams};
pub use sheet::{Bond, BondCriteria, GrapheneParams, Point2};

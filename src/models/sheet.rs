//! # 石墨烯平面数据模型
//!
//! 二维坐标、化学键以及石墨烯计算所需的参数集。
//!
//! ## 依赖关系
//! - 被 `graphene/` 和 `commands/graphene/` 使用
//! - 使用 `error.rs` 的参数校验

use crate::error::{ensure_non_negative, ensure_positive, Result};

use serde::Serialize;

/// 二维实坐标 [x, y]（实空间位置或倒空间波矢）
pub type Point2 = [f64; 2];

/// 化学键：原子索引对，满足 i < j
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
}

impl Bond {
    /// 创建化学键，索引自动排序为 i < j
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Bond { i: a, j: b }
        } else {
            Bond { i: b, j: a }
        }
    }

    /// 键的两端坐标
    pub fn endpoints(&self, positions: &[Point2]) -> Option<(Point2, Point2)> {
        Some((*positions.get(self.i)?, *positions.get(self.j)?))
    }
}

/// 石墨烯紧束缚参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrapheneParams {
    /// 晶格常数 a（任意单位，默认 1.0）
    pub lattice_constant: f64,
    /// 最近邻跃迁能 t（默认 1.0）
    pub hopping: f64,
}

impl Default for GrapheneParams {
    fn default() -> Self {
        GrapheneParams {
            lattice_constant: 1.0,
            hopping: 1.0,
        }
    }
}

impl GrapheneParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("lattice constant a", self.lattice_constant)?;
        ensure_positive("hopping energy t", self.hopping)
    }
}

/// 成键判据：|d - bond_length| < tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCriteria {
    pub bond_length: f64,
    pub tolerance: f64,
}

impl Default for BondCriteria {
    fn default() -> Self {
        BondCriteria {
            bond_length: 1.0,
            tolerance: 0.2,
        }
    }
}

impl BondCriteria {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("bond_length", self.bond_length)?;
        ensure_non_negative("tolerance", self.tolerance)
    }

    /// 判断给定距离是否构成化学键
    pub fn accepts(&self, distance: f64) -> bool {
        (distance - self.bond_length).abs() < self.tolerance
    }
}

//! # 碳纳米管数据模型
//!
//! 手性指数、导电类型、性质记录，以及 CNT 计算所用的参数集。
//!
//! ## 依赖关系
//! - 被 `cnt/` 和 `commands/cnt/` 使用
//! - 使用 `error.rs` 的参数校验

use crate::error::{ensure_positive, NanoError, Result};

use serde::Serialize;

/// 手性指数 (n, m)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Chirality {
    pub n: u32,
    pub m: u32,
}

impl Chirality {
    pub fn new(n: u32, m: u32) -> Self {
        Chirality { n, m }
    }

    /// (0, 0) 不对应任何真实的管
    pub fn is_degenerate(&self) -> bool {
        self.n == 0 && self.m == 0
    }
}

impl std::fmt::Display for Chirality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.n, self.m)
    }
}

/// CNT 导电类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CntType {
    Metallic,
    Semiconducting,
}

impl CntType {
    pub fn is_metallic(&self) -> bool {
        matches!(self, CntType::Metallic)
    }
}

impl std::fmt::Display for CntType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CntType::Metallic => write!(f, "Metallic"),
            CntType::Semiconducting => write!(f, "Semiconducting"),
        }
    }
}

/// 单根 CNT 的性质记录（扫描表中的一行）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CntRecord {
    pub n: u32,
    pub m: u32,
    /// 直径（nm）
    pub diameter_nm: f64,
    /// 带隙（eV），金属型严格为 0.0
    pub bandgap_ev: f64,
    #[serde(rename = "type")]
    pub tube_type: CntType,
}

impl CntRecord {
    pub fn chirality(&self) -> Chirality {
        Chirality::new(self.n, self.m)
    }
}

/// CNT 物理常数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CntParams {
    /// 石墨烯晶格常数 a（nm，默认 0.246）
    pub lattice_constant: f64,
    /// 最近邻跃迁能 t（eV，默认 2.7）
    pub hopping: f64,
    /// C-C 键长 a_cc（nm，默认 0.142）
    pub bond_length: f64,
}

impl Default for CntParams {
    fn default() -> Self {
        CntParams {
            lattice_constant: 0.246,
            hopping: 2.7,
            bond_length: 0.142,
        }
    }
}

impl CntParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("lattice constant a", self.lattice_constant)?;
        ensure_positive("hopping energy t", self.hopping)?;
        ensure_positive("C-C bond length a_cc", self.bond_length)
    }
}

/// 简化子带模型参数
///
/// `spacing` 是相邻横向子带之间的固定能量间隔，没有物理推导，
/// 只是示意性的量子化。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubbandParams {
    /// 子带数：计算 q ∈ [-modes, +modes]（默认 8）
    pub modes: u32,
    /// 子带间隔（默认 0.3）
    pub spacing: f64,
}

impl Default for SubbandParams {
    fn default() -> Self {
        SubbandParams {
            modes: 8,
            spacing: 0.3,
        }
    }
}

impl SubbandParams {
    pub fn validate(&self) -> Result<()> {
        if self.modes == 0 {
            return Err(NanoError::config("modes", "must be at least 1"));
        }
        if i32::try_from(self.modes).is_err() {
            return Err(NanoError::config(
                "modes",
                format!("must not exceed {} (got {})", i32::MAX, self.modes),
            ));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(NanoError::config(
                "subband spacing",
                format!("must be a non-negative finite number (got {})", self.spacing),
            ));
        }
        Ok(())
    }
}

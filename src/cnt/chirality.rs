//! # CNT 手性模型
//!
//! 由手性指数 (n, m) 给出导电类型、直径与带隙的闭式近似。
//!
//! ## 公式
//! - 类型：(n - m) mod 3 == 0 为金属型，否则为半导体型
//! - 直径：d = (a/π)·sqrt(n² + m² + n·m)
//! - 带隙：金属型 Eg = 0；半导体型 Eg = 2·a_cc·t / d
//!
//! ## 依赖关系
//! - 被 `cnt/sweep.rs`, `cnt/bands.rs` 和 `commands/cnt/` 使用
//! - 使用 `models/nanotube.rs`

use crate::error::{ensure_positive, NanoError, Result};
use crate::models::{Chirality, CntParams, CntRecord, CntType};

use std::f64::consts::PI;

/// 判断导电类型
///
/// 对 n < m 的输入同样成立（使用欧几里得取余）。
pub fn classify(n: u32, m: u32) -> CntType {
    if (i64::from(n) - i64::from(m)).rem_euclid(3) == 0 {
        CntType::Metallic
    } else {
        CntType::Semiconducting
    }
}

/// 管径（nm），a 为石墨烯晶格常数
///
/// a 必须为正的有限实数，否则返回 `ConfigurationError`。
pub fn diameter(n: u32, m: u32, a: f64) -> Result<f64> {
    ensure_positive("lattice constant a", a)?;
    let (n, m) = (f64::from(n), f64::from(m));
    Ok((a / PI) * (n * n + m * m + n * m).sqrt())
}

/// 带隙（eV）
///
/// n = m = 0 时直径为零，返回 `DomainError`。
pub fn bandgap(n: u32, m: u32, params: &CntParams) -> Result<f64> {
    params.validate()?;

    if Chirality::new(n, m).is_degenerate() {
        return Err(NanoError::DomainError(format!(
            "bandgap of CNT ({},{}) is undefined: diameter is zero",
            n, m
        )));
    }
    let d = diameter(n, m, params.lattice_constant)?;

    match classify(n, m) {
        CntType::Metallic => Ok(0.0),
        CntType::Semiconducting => Ok(2.0 * params.bond_length * params.hopping / d),
    }
}

impl Chirality {
    pub fn classify(&self) -> CntType {
        classify(self.n, self.m)
    }

    pub fn diameter(&self, a: f64) -> Result<f64> {
        diameter(self.n, self.m, a)
    }

    pub fn bandgap(&self, params: &CntParams) -> Result<f64> {
        bandgap(self.n, self.m, params)
    }

    /// 计算完整的性质记录
    pub fn analyze(&self, params: &CntParams) -> Result<CntRecord> {
        let bandgap_ev = self.bandgap(params)?;
        Ok(CntRecord {
            n: self.n,
            m: self.m,
            diameter_nm: self.diameter(params.lattice_constant)?,
            bandgap_ev,
            tube_type: self.classify(),
        })
    }

    /// 常见几何名称：扶手椅 (n,n)、锯齿 (n,0) 或手性管
    pub fn geometry(&self) -> &'static str {
        if self.n == self.m {
            "armchair"
        } else if self.n == 0 || self.m == 0 {
            "zigzag"
        } else {
            "chiral"
        }
    }
}

//! # 石墨烯紧束缚色散关系
//!
//! 最近邻紧束缚模型：
//!
//! ```text
//! E(k) = t · sqrt(1 + 4·cos(√3·kx·a/2)·cos(ky·a/2) + 4·cos²(ky·a/2))
//! ```
//!
//! 返回能量幅值 E，导带为 +E，价带为 -E。
//!
//! ## 依赖关系
//! - 被 `commands/graphene/bands.rs` 调用
//! - 使用 `graphene/kpath.rs` 的 KPath

use crate::error::{NanoError, Result};
use crate::graphene::kpath::KPath;
use crate::models::{GrapheneParams, Point2};

/// 单个 k 点的能量幅值
///
/// 根号内浮点误差导致的微小负值截断为 0。
pub fn energy(kx: f64, ky: f64, params: &GrapheneParams) -> f64 {
    let a = params.lattice_constant;
    let cos_x = (3.0_f64.sqrt() * kx * a / 2.0).cos();
    let cos_y = (ky * a / 2.0).cos();

    let radicand = 1.0 + 4.0 * cos_x * cos_y + 4.0 * cos_y * cos_y;
    params.hopping * radicand.max(0.0).sqrt()
}

/// 逐元素计算色散关系，kx 与 ky 长度必须一致
pub fn dispersion(kx: &[f64], ky: &[f64], params: &GrapheneParams) -> Result<Vec<f64>> {
    params.validate()?;
    if kx.len() != ky.len() {
        return Err(NanoError::LengthMismatch {
            left: kx.len(),
            right: ky.len(),
        });
    }

    Ok(kx
        .iter()
        .zip(ky.iter())
        .map(|(&x, &y)| energy(x, y, params))
        .collect())
}

/// 沿路径的能带
#[derive(Debug, Clone)]
pub struct BandStructure {
    /// 采样路径
    pub path: KPath,
    /// 导带 +E
    pub conduction: Vec<f64>,
    /// 价带 -E
    pub valence: Vec<f64>,
}

impl BandStructure {
    /// 能带宽度：导带最大值
    pub fn bandwidth(&self) -> f64 {
        self.conduction.iter().cloned().fold(0.0, f64::max)
    }
}

/// 在给定路径上计算导带和价带
pub fn band_structure(path: KPath, params: &GrapheneParams) -> Result<BandStructure> {
    let (kx, ky): (Vec<f64>, Vec<f64>) = path.points.iter().map(|p: &Point2| (p[0], p[1])).unzip();
    let conduction = dispersion(&kx, &ky, params)?;
    let valence = conduction.iter().map(|e| -e).collect();

    Ok(BandStructure {
        path,
        conduction,
        valence,
    })
}

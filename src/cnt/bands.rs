//! # CNT 简化能带
//!
//! 沿管轴方向的一维多子带色散关系。第 q 个子带（q ∈ [-modes, +modes]）
//! 的横向能量偏移为 |q|·spacing：
//!
//! ```text
//! 金属型:   E_q(k) = sqrt(k² + shift²)
//! 半导体型: E_q(k) = sqrt(k² + shift² + (Eg/2)²)
//! ```
//!
//! 金属型的 q = 0 子带在 k = 0 处穿过零点；半导体型每个子带
//! 至少偏离零点 Eg/2。
//!
//! ## 依赖关系
//! - 被 `commands/cnt/bands.rs` 调用
//! - 使用 `cnt/chirality.rs` 获取类型与带隙

use crate::error::{NanoError, Result};
use crate::models::{Chirality, CntParams, CntType, SubbandParams};

/// 单个子带的一对能带分支
#[derive(Debug, Clone, PartialEq)]
pub struct Subband {
    /// 子带索引 q
    pub q: i32,
    /// 上分支 +E_q(k)
    pub upper: Vec<f64>,
    /// 下分支 -E_q(k)
    pub lower: Vec<f64>,
}

/// CNT 能带结果
#[derive(Debug, Clone, PartialEq)]
pub struct CntBands {
    pub chirality: Chirality,
    pub tube_type: CntType,
    /// 带隙（eV）
    pub bandgap: f64,
    /// 沿管轴的 k 采样
    pub k: Vec<f64>,
    /// 子带，按 q 从 -modes 到 +modes 排列
    pub subbands: Vec<Subband>,
}

impl CntBands {
    /// 能带分支总数 2·(2·modes + 1)
    pub fn branch_count(&self) -> usize {
        2 * self.subbands.len()
    }

    /// 所有分支中 |E| 的最小值
    pub fn min_abs_energy(&self) -> f64 {
        self.subbands
            .iter()
            .flat_map(|s| s.upper.iter())
            .cloned()
            .fold(f64::INFINITY, f64::min)
    }
}

/// 计算 CNT 子带
pub fn subbands(
    chirality: Chirality,
    k_range: &[f64],
    params: &CntParams,
    subband_params: &SubbandParams,
) -> Result<CntBands> {
    subband_params.validate()?;

    let tube_type = chirality.classify();
    let bandgap = chirality.bandgap(params)?;
    let half_gap = bandgap / 2.0;

    let modes = i32::try_from(subband_params.modes)
        .map_err(|_| NanoError::config("modes", "does not fit a signed subband index"))?;
    let subbands = (-modes..=modes)
        .map(|q| {
            let shift = f64::from(q.unsigned_abs()) * subband_params.spacing;
            let upper: Vec<f64> = k_range
                .iter()
                .map(|&k| match tube_type {
                    CntType::Metallic => (k * k + shift * shift).sqrt(),
                    CntType::Semiconducting => {
                        (k * k + shift * shift + half_gap * half_gap).sqrt()
                    }
                })
                .collect();
            let lower = upper.iter().map(|e| -e).collect();
            Subband { q, upper, lower }
        })
        .collect();

    Ok(CntBands {
        chirality,
        tube_type,
        bandgap,
        k: k_range.to_vec(),
        subbands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphene::kpath::linspace;
    use std::f64::consts::PI;

    #[test]
    fn test_branch_count_and_shape() {
        let k = linspace(-PI, PI, 400);
        let bands = subbands(
            Chirality::new(10, 0),
            &k,
            &CntParams::default(),
            &SubbandParams::default(),
        )
        .unwrap();
        assert_eq!(bands.subbands.len(), 17);
        assert_eq!(bands.branch_count(), 34);
        assert_eq!(bands.subbands[0].q, -8);
        assert_eq!(bands.subbands[16].q, 8);
        for s in &bands.subbands {
            assert_eq!(s.upper.len(), 400);
            assert_eq!(s.lower.len(), 400);
        }
    }

    #[test]
    fn test_metallic_zero_mode_crosses_zero() {
        let k = [-1.0, 0.0, 1.0];
        let bands = subbands(
            Chirality::new(10, 10),
            &k,
            &CntParams::default(),
            &SubbandParams::default(),
        )
        .unwrap();
        assert_eq!(bands.tube_type, CntType::Metallic);
        assert_eq!(bands.bandgap, 0.0);

        let zero_mode = bands.subbands.iter().find(|s| s.q == 0).unwrap();
        assert_eq!(zero_mode.upper, vec![1.0, 0.0, 1.0]);
        assert_eq!(bands.min_abs_energy(), 0.0);
    }

    #[test]
    fn test_semiconducting_gap_enforced() {
        let params = CntParams::default();
        let k = linspace(-PI, PI, 401);
        let bands = subbands(Chirality::new(10, 6), &k, &params, &SubbandParams::default())
            .unwrap();
        let eg = bands.bandgap;
        assert!(eg > 0.0);
        for s in &bands.subbands {
            for (&up, &low) in s.upper.iter().zip(s.lower.iter()) {
                assert!(up >= eg / 2.0 - 1e-12);
                assert_eq!(low, -up);
            }
        }
        // k = 0 处 q = 0 子带恰好为 Eg/2
        assert!((bands.min_abs_energy() - eg / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_shift_uses_abs_q() {
        let k = [0.0];
        let bands = subbands(
            Chirality::new(9, 0),
            &k,
            &CntParams::default(),
            &SubbandParams {
                modes: 2,
                spacing: 0.5,
            },
        )
        .unwrap();
        let energies: Vec<f64> = bands.subbands.iter().map(|s| s.upper[0]).collect();
        assert_eq!(energies, vec![1.0, 0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_rejects_zero_modes() {
        let result = subbands(
            Chirality::new(10, 0),
            &[0.0],
            &CntParams::default(),
            &SubbandParams {
                modes: 0,
                spacing: 0.3,
            },
        );
        assert!(matches!(result, Err(NanoError::ConfigurationError { .. })));
    }

    #[test]
    fn test_rejects_modes_that_overflow_subband_index() {
        let result = subbands(
            Chirality::new(10, 0),
            &[0.0],
            &CntParams::default(),
            &SubbandParams {
                modes: 3_000_000_000,
                spacing: 0.3,
            },
        );
        assert!(matches!(result, Err(NanoError::ConfigurationError { .. })));
    }

    #[test]
    fn test_degenerate_tube_is_domain_error() {
        let result = subbands(
            Chirality::new(0, 0),
            &[0.0],
            &CntParams::default(),
            &SubbandParams::default(),
        );
        assert!(matches!(result, Err(NanoError::DomainError(_))));
    }

    #[test]
    fn test_empty_k_range() {
        let bands = subbands(
            Chirality::new(8, 2),
            &[],
            &CntParams::default(),
            &SubbandParams::default(),
        )
        .unwrap();
        assert!(bands.subbands.iter().all(|s| s.upper.is_empty()));
    }
}

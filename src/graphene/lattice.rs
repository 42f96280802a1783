//! # 石墨烯晶格生成
//!
//! 在 nx × ny 个原胞上铺设双原子基元，并按距离阈值推断化学键。
//!
//! ## 晶格定义
//! - 基矢：a1 = (√3·a, 0)，a2 = (√3/2·a, 3/2·a)
//! - 基元：(0, 0) 与 (0, a)，即蜂窝结构的两套不等价子格
//!
//! ## 依赖关系
//! - 被 `commands/graphene/structure.rs` 调用
//! - 使用 `models/sheet.rs` 的 Point2, Bond, BondCriteria

use crate::error::{ensure_positive, NanoError, Result};
use crate::models::{Bond, BondCriteria, Point2};

/// 生成石墨烯原子坐标
///
/// 输出顺序：外层 i（0..nx），内层 j（0..ny），最内层基元索引。
/// 共 2·nx·ny 个原子。
pub fn generate_lattice(nx: usize, ny: usize, a: f64) -> Result<Vec<Point2>> {
    if nx == 0 {
        return Err(NanoError::config("nx", "must be at least 1"));
    }
    if ny == 0 {
        return Err(NanoError::config("ny", "must be at least 1"));
    }
    ensure_positive("lattice constant a", a)?;

    let sqrt3 = 3.0_f64.sqrt();
    let a1 = [sqrt3 * a, 0.0];
    let a2 = [sqrt3 / 2.0 * a, 1.5 * a];
    let basis: [Point2; 2] = [[0.0, 0.0], [0.0, a]];

    let count = nx
        .checked_mul(ny)
        .and_then(|cells| cells.checked_mul(2))
        .ok_or_else(|| NanoError::config("nx, ny", format!("{} x {} cells overflow", nx, ny)))?;

    let mut points = Vec::with_capacity(count);
    for i in 0..nx {
        for j in 0..ny {
            let (fi, fj) = (i as f64, j as f64);
            let origin = [fi * a1[0] + fj * a2[0], fi * a1[1] + fj * a2[1]];
            for b in &basis {
                points.push([origin[0] + b[0], origin[1] + b[1]]);
            }
        }
    }

    Ok(points)
}

/// 检测化学键
///
/// 遍历所有无序原子对 (i, j)，i < j，距离满足 |d - bond_length| < tolerance
/// 即成键。复杂度 O(N²)，结果按 (i, j) 字典序排列。
pub fn detect_bonds(positions: &[Point2], bond_length: f64, tolerance: f64) -> Result<Vec<Bond>> {
    let criteria = BondCriteria {
        bond_length,
        tolerance,
    };
    criteria.validate()?;

    let mut bonds = Vec::new();
    for (i, p) in positions.iter().enumerate() {
        for (j, q) in positions.iter().enumerate().skip(i + 1) {
            if criteria.accepts(distance(p, q)) {
                bonds.push(Bond::new(i, j));
            }
        }
    }

    Ok(bonds)
}

/// 欧氏距离
fn distance(p: &Point2, q: &Point2) -> f64 {
    let dx = p[0] - q[0];
    let dy = p[1] - q[1];
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_size_and_order() {
        let pts = generate_lattice(2, 2, 1.0).unwrap();
        assert_eq!(pts.len(), 8);

        let sqrt3 = 3.0_f64.sqrt();
        // (i=0, j=0)
        assert_eq!(pts[0], [0.0, 0.0]);
        assert_eq!(pts[1], [0.0, 1.0]);
        // (i=0, j=1) 由 a2 平移
        assert!((pts[2][0] - sqrt3 / 2.0).abs() < 1e-12);
        assert!((pts[2][1] - 1.5).abs() < 1e-12);
        // (i=1, j=0) 由 a1 平移
        assert!((pts[4][0] - sqrt3).abs() < 1e-12);
        assert!(pts[4][1].abs() < 1e-12);
    }

    #[test]
    fn test_lattice_scales_with_a() {
        let unit = generate_lattice(3, 2, 1.0).unwrap();
        let scaled = generate_lattice(3, 2, 0.142).unwrap();
        for (u, s) in unit.iter().zip(scaled.iter()) {
            assert!((u[0] * 0.142 - s[0]).abs() < 1e-12);
            assert!((u[1] * 0.142 - s[1]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_lattice_rejects_bad_config() {
        assert!(matches!(
            generate_lattice(0, 2, 1.0),
            Err(NanoError::ConfigurationError { .. })
        ));
        assert!(generate_lattice(2, 0, 1.0).is_err());
        assert!(generate_lattice(2, 2, 0.0).is_err());
        assert!(generate_lattice(2, 2, -1.0).is_err());
    }

    #[test]
    fn test_lattice_rejects_overflowing_size() {
        assert!(matches!(
            generate_lattice(usize::MAX, 2, 1.0),
            Err(NanoError::ConfigurationError { .. })
        ));
        assert!(generate_lattice(usize::MAX / 2 + 1, 1, 1.0).is_err());
    }

    #[test]
    fn test_bonds_on_small_lattice() {
        let pts = generate_lattice(2, 2, 1.0).unwrap();
        let bonds = detect_bonds(&pts, 1.0, 0.2).unwrap();

        assert!(!bonds.is_empty());
        for bond in &bonds {
            assert!(bond.i < bond.j);
            let d = distance(&pts[bond.i], &pts[bond.j]);
            assert!(d > 0.8 && d < 1.2, "bond ({}, {}) has length {}", bond.i, bond.j, d);
        }
    }

    #[test]
    fn test_every_basis_pair_is_bonded() {
        let pts = generate_lattice(3, 3, 1.0).unwrap();
        let bonds = detect_bonds(&pts, 1.0, 0.2).unwrap();
        for k in 0..9 {
            assert!(bonds.contains(&Bond::new(2 * k, 2 * k + 1)));
        }
    }

    #[test]
    fn test_coordination_at_most_three() {
        let pts = generate_lattice(5, 5, 1.0).unwrap();
        let bonds = detect_bonds(&pts, 1.0, 0.2).unwrap();
        let mut degree = vec![0usize; pts.len()];
        for bond in &bonds {
            degree[bond.i] += 1;
            degree[bond.j] += 1;
        }
        assert!(degree.iter().all(|&d| (1..=3).contains(&d)));
        assert!(degree.iter().any(|&d| d == 3));
    }

    #[test]
    fn test_bond_detection_rejects_bad_criteria() {
        let pts = generate_lattice(2, 2, 1.0).unwrap();
        assert!(detect_bonds(&pts, 0.0, 0.2).is_err());
        assert!(detect_bonds(&pts, -1.0, 0.2).is_err());
        assert!(detect_bonds(&pts, 1.0, -0.01).is_err());
    }

    #[test]
    fn test_zero_tolerance_yields_no_bonds() {
        let pts = generate_lattice(2, 2, 1.0).unwrap();
        let bonds = detect_bonds(&pts, 1.0, 0.0).unwrap();
        assert!(bonds.is_empty());
    }

    #[test]
    fn test_repeatable() {
        let a = generate_lattice(4, 3, 1.0).unwrap();
        let b = generate_lattice(4, 3, 1.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            detect_bonds(&a, 1.0, 0.2).unwrap(),
            detect_bonds(&b, 1.0, 0.2).unwrap()
        );
    }
}

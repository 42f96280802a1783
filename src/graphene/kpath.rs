//! # 倒空间路径采样
//!
//! 在相邻高对称点之间线性插值，生成能带计算用的 k 点序列。
//!
//! ## 约定
//! - 每段包含两个端点，共 n_points 个采样点
//! - 相邻两段共享边界点，因此每个内部转折点出现两次；
//!   绘图时刻度索引依赖这一重复
//!
//! ## 依赖关系
//! - 被 `graphene/dispersion.rs` 和 `commands/` 使用
//! - 使用 `models/sheet.rs` 的 Point2

use crate::error::{ensure_positive, NanoError, Result};
use crate::models::Point2;

use std::f64::consts::PI;

/// 石墨烯布里渊区高对称点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighSymmetryPoint {
    Gamma,
    K,
    M,
}

impl HighSymmetryPoint {
    /// 笛卡尔坐标，晶格常数为 a
    ///
    /// Γ = (0, 0)，K = (4π/(3√3·a), 0)，M = (π/(√3·a), π/(3a))
    pub fn coordinates(&self, a: f64) -> Point2 {
        let sqrt3 = 3.0_f64.sqrt();
        match self {
            HighSymmetryPoint::Gamma => [0.0, 0.0],
            HighSymmetryPoint::K => [4.0 * PI / (3.0 * sqrt3 * a), 0.0],
            HighSymmetryPoint::M => [PI / (sqrt3 * a), PI / (3.0 * a)],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HighSymmetryPoint::Gamma => "Γ",
            HighSymmetryPoint::K => "K",
            HighSymmetryPoint::M => "M",
        }
    }
}

/// 采样后的 k 路径及其刻度
#[derive(Debug, Clone)]
pub struct KPath {
    /// 采样 k 点
    pub points: Vec<Point2>,
    /// (索引, 标签)，每个转折点一个
    pub ticks: Vec<(usize, String)>,
}

impl KPath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 路径描述，如 "Γ → K → M → Γ"
    pub fn description(&self) -> String {
        self.ticks
            .iter()
            .map(|(_, label)| label.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// 在 [start, end] 上均匀取 count 个点（包含两端）
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| start + (i as f64 / last) * (end - start))
                .collect()
        }
    }
}

/// 沿折线路径采样
///
/// 长度为 n_points × (waypoints.len() - 1)。
pub fn sample_path(waypoints: &[Point2], n_points: usize) -> Result<Vec<Point2>> {
    if waypoints.len() < 2 {
        return Err(NanoError::config(
            "waypoints",
            format!("needs at least 2 points (got {})", waypoints.len()),
        ));
    }
    if n_points < 2 {
        return Err(NanoError::config(
            "n_points",
            format!("must be at least 2 (got {})", n_points),
        ));
    }

    let fractions = linspace(0.0, 1.0, n_points);
    let mut path = Vec::with_capacity(n_points * (waypoints.len() - 1));

    for segment in waypoints.windows(2) {
        let (start, end) = (segment[0], segment[1]);
        for &s in &fractions {
            path.push([
                start[0] + s * (end[0] - start[0]),
                start[1] + s * (end[1] - start[1]),
            ]);
        }
    }

    Ok(path)
}

/// 按高对称点序列构造 k 路径
pub fn high_symmetry_path(
    stops: &[HighSymmetryPoint],
    a: f64,
    n_points: usize,
) -> Result<KPath> {
    ensure_positive("lattice constant a", a)?;

    let waypoints: Vec<Point2> = stops.iter().map(|p| p.coordinates(a)).collect();
    let points = sample_path(&waypoints, n_points)?;

    // 第 s 个转折点位于第 s 段起点；终点取最后一个样本
    let ticks = stops
        .iter()
        .enumerate()
        .map(|(s, p)| {
            let index = if s + 1 == stops.len() {
                points.len() - 1
            } else {
                s * n_points
            };
            (index, p.label().to_string())
        })
        .collect();

    Ok(KPath { points, ticks })
}

/// 石墨烯标准路径 Γ → K → M → Γ
pub fn graphene_path(a: f64, n_points: usize) -> Result<KPath> {
    use HighSymmetryPoint::*;
    high_symmetry_path(&[Gamma, K, M, Gamma], a, n_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_path_duplicates_shared_waypoint() {
        let path = sample_path(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]], 3).unwrap();
        let expected = vec![
            [0.0, 0.0],
            [0.5, 0.0],
            [1.0, 0.0],
            [1.0, 0.0],
            [1.0, 0.5],
            [1.0, 1.0],
        ];
        assert_eq!(path, expected);
    }

    #[test]
    fn test_sample_path_length() {
        let waypoints = [[0.0, 0.0], [1.0, 2.0], [3.0, -1.0], [0.0, 0.0]];
        let path = sample_path(&waypoints, 150).unwrap();
        assert_eq!(path.len(), 150 * 3);
        assert_eq!(path[0], waypoints[0]);
        assert_eq!(*path.last().unwrap(), waypoints[3]);
    }

    #[test]
    fn test_sample_path_rejects_bad_config() {
        assert!(sample_path(&[[0.0, 0.0]], 10).is_err());
        assert!(sample_path(&[], 10).is_err());
        assert!(sample_path(&[[0.0, 0.0], [1.0, 1.0]], 1).is_err());
    }

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-PI, PI, 400);
        assert_eq!(xs.len(), 400);
        assert_eq!(xs[0], -PI);
        assert!((xs[399] - PI).abs() < 1e-12);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_high_symmetry_coordinates() {
        let k = HighSymmetryPoint::K.coordinates(1.0);
        assert!((k[0] - 2.418399152).abs() < 1e-8);
        assert_eq!(k[1], 0.0);

        let m = HighSymmetryPoint::M.coordinates(2.0);
        let m1 = HighSymmetryPoint::M.coordinates(1.0);
        assert!((m[0] * 2.0 - m1[0]).abs() < 1e-12);
        assert!((m[1] * 2.0 - m1[1]).abs() < 1e-12);
    }

    #[test]
    fn test_graphene_path_ticks() {
        let path = graphene_path(1.0, 150).unwrap();
        assert_eq!(path.len(), 450);
        let indices: Vec<usize> = path.ticks.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 150, 300, 449]);
        assert_eq!(path.description(), "Γ → K → M → Γ");
        assert_eq!(path.points[150], HighSymmetryPoint::K.coordinates(1.0));
    }
}

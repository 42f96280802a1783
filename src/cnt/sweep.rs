//! # CNT 参数扫描
//!
//! 遍历三角形参数区域 1 ≤ n ≤ n_max, 0 ≤ m ≤ n，生成性质表
//! （直径、带隙、类型、标签），用于带隙-直径散点分析。
//!
//! ## 功能
//! - 顺序生成：`generate_table`
//! - 并行生成：`generate_table_parallel`，基于 rayon，输出与顺序版本完全一致
//!
//! ## 依赖关系
//! - 被 `commands/cnt/sweep.rs` 调用
//! - 使用 `cnt/chirality.rs` 计算单根管的性质
//! - 使用 `rayon` 进行并行计算

use crate::error::{NanoError, Result};
use crate::models::{Chirality, CntParams, CntRecord, CntType};

use rayon::prelude::*;

/// CNT 性质表（四个等长的平行序列）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CntTable {
    /// 直径（nm）
    pub diameters: Vec<f64>,
    /// 带隙（eV）
    pub bandgaps: Vec<f64>,
    /// 导电类型
    pub types: Vec<CntType>,
    /// 手性标签 (n, m)
    pub labels: Vec<Chirality>,
}

impl CntTable {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 追加一行
    pub fn push(&mut self, record: CntRecord) {
        self.diameters.push(record.diameter_nm);
        self.bandgaps.push(record.bandgap_ev);
        self.types.push(record.tube_type);
        self.labels.push(record.chirality());
    }

    /// 第 index 行
    pub fn record(&self, index: usize) -> Option<CntRecord> {
        let label = self.labels.get(index)?;
        Some(CntRecord {
            n: label.n,
            m: label.m,
            diameter_nm: *self.diameters.get(index)?,
            bandgap_ev: *self.bandgaps.get(index)?,
            tube_type: *self.types.get(index)?,
        })
    }

    /// 按行遍历
    pub fn records(&self) -> impl Iterator<Item = CntRecord> + '_ {
        (0..self.len()).filter_map(move |i| self.record(i))
    }

    /// 按类型筛选出 (直径, 带隙) 点
    pub fn points_of(&self, tube_type: CntType) -> Vec<(f64, f64)> {
        self.records()
            .filter(|r| r.tube_type == tube_type)
            .map(|r| (r.diameter_nm, r.bandgap_ev))
            .collect()
    }

    /// (金属型数量, 半导体型数量)
    pub fn type_counts(&self) -> (usize, usize) {
        let metallic = self.types.iter().filter(|t| t.is_metallic()).count();
        (metallic, self.len() - metallic)
    }
}

impl FromIterator<CntRecord> for CntTable {
    fn from_iter<I: IntoIterator<Item = CntRecord>>(iter: I) -> Self {
        let mut table = CntTable::default();
        for record in iter {
            table.push(record);
        }
        table
    }
}

/// 扫描区域内的所有手性，顺序为 n 升序、m 升序
pub fn chirality_pairs(n_max: u32) -> Result<Vec<Chirality>> {
    if n_max == 0 {
        return Err(NanoError::config("n_max", "must be at least 1"));
    }
    let len = table_len(n_max).ok_or_else(|| {
        NanoError::config("n_max", format!("row count overflows for n_max = {}", n_max))
    })?;

    let mut pairs = Vec::with_capacity(len);
    for n in 1..=n_max {
        for m in 0..=n {
            pairs.push(Chirality::new(n, m));
        }
    }
    Ok(pairs)
}

/// 扫描表行数 Σ_{n=1}^{n_max} (n + 1)，溢出时为 None
pub fn table_len(n_max: u32) -> Option<usize> {
    let n = usize::try_from(n_max).ok()?;
    Some(n.checked_mul(n.checked_add(3)?)? / 2)
}

/// 顺序生成性质表
pub fn generate_table(n_max: u32, params: &CntParams) -> Result<CntTable> {
    params.validate()?;
    chirality_pairs(n_max)?
        .iter()
        .map(|c| c.analyze(params))
        .collect()
}

/// 并行生成性质表
///
/// jobs = 0 时使用全部 CPU 核心。
pub fn generate_table_parallel(n_max: u32, params: &CntParams, jobs: usize) -> Result<CntTable> {
    params.validate()?;
    let pairs = chirality_pairs(n_max)?;

    let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| NanoError::InvalidArgument(format!("cannot build thread pool: {}", e)))?;

    let records: Result<Vec<CntRecord>> =
        pool.install(|| pairs.par_iter().map(|c| c.analyze(params)).collect());

    Ok(records?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_n_max_3() {
        let table = generate_table(3, &CntParams::default()).unwrap();
        assert_eq!(table.len(), 9);
        assert_eq!(table.diameters.len(), 9);
        assert_eq!(table.bandgaps.len(), 9);
        assert_eq!(table.types.len(), 9);
        assert_eq!(table.labels[0], Chirality::new(1, 0));
        assert_eq!(table.labels[8], Chirality::new(3, 3));
    }

    #[test]
    fn test_table_order() {
        let table = generate_table(4, &CntParams::default()).unwrap();
        let labels: Vec<(u32, u32)> = table.labels.iter().map(|c| (c.n, c.m)).collect();
        assert_eq!(
            &labels[..6],
            &[(1, 0), (1, 1), (2, 0), (2, 1), (2, 2), (3, 0)]
        );
    }

    #[test]
    fn test_table_len_formula() {
        for n_max in 1..30 {
            let table = generate_table(n_max, &CntParams::default()).unwrap();
            let expected: usize = (1..=n_max as usize).map(|n| n + 1).sum();
            assert_eq!(table.len(), expected);
            assert_eq!(table_len(n_max), Some(expected));
            assert_eq!(chirality_pairs(n_max).unwrap().len(), expected);
        }
    }

    #[test]
    fn test_table_len_overflow() {
        assert_eq!(table_len(u32::MAX), None);
        assert!(matches!(
            chirality_pairs(u32::MAX),
            Err(NanoError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_record_with_ragged_columns() {
        let mut table = generate_table(2, &CntParams::default()).unwrap();
        table.bandgaps.pop();
        assert!(table.record(0).is_some());
        assert!(table.record(4).is_none());
        assert_eq!(table.records().count(), 4);
    }

    #[test]
    fn test_table_invariants() {
        let table = generate_table(20, &CntParams::default()).unwrap();
        for record in table.records() {
            assert!(record.diameter_nm > 0.0);
            if record.tube_type.is_metallic() {
                assert_eq!(record.bandgap_ev, 0.0);
            } else {
                assert!(record.bandgap_ev > 0.0);
            }
        }
        let (metallic, semi) = table.type_counts();
        assert_eq!(metallic + semi, table.len());
        assert!(metallic > 0 && semi > 0);
        assert_eq!(table.points_of(CntType::Metallic).len(), metallic);
    }

    #[test]
    fn test_table_rejects_zero_n_max() {
        assert!(matches!(
            generate_table(0, &CntParams::default()),
            Err(NanoError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let params = CntParams::default();
        let sequential = generate_table(25, &params).unwrap();
        let parallel = generate_table_parallel(25, &params, 4).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_repeatable() {
        let params = CntParams::default();
        assert_eq!(
            generate_table(10, &params).unwrap(),
            generate_table(10, &params).unwrap()
        );
    }
}

//! # CNT 数据导出
//!
//! ## 支持格式
//! - 扫描表 CSV：n, m, diameter_nm, bandgap_ev, type
//! - 能带 CSV：k, 以及每个子带的 +E / -E 两列
//!
//! ## 依赖关系
//! - 被 `commands/cnt/` 调用
//! - 使用 `csv` + `serde` 写入

use crate::cnt::{CntBands, CntTable};
use crate::error::{NanoError, Result};

use std::path::Path;

/// 导出扫描表
pub fn table_to_csv(table: &CntTable, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    for record in table.records() {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(|e| NanoError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 导出子带能带
pub fn bands_to_csv(bands: &CntBands, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec!["k".to_string()];
    for s in &bands.subbands {
        header.push(format!("q{}_upper", s.q));
        header.push(format!("q{}_lower", s.q));
    }
    wtr.write_record(&header)?;

    for (i, k) in bands.k.iter().enumerate() {
        let mut row = Vec::with_capacity(header.len());
        row.push(format!("{:.6}", k));
        for s in &bands.subbands {
            row.push(format!("{:.6}", s.upper[i]));
            row.push(format!("{:.6}", s.lower[i]));
        }
        wtr.write_record(&row)?;
    }

    wtr.flush().map_err(|e| NanoError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnt::{generate_table, subbands};
    use crate::models::{Chirality, CntParams, SubbandParams};

    use std::fs;

    #[test]
    fn test_table_csv() {
        let dir = std::env::temp_dir().join("nanocarbon_cnt_table_export");
        fs::create_dir_all(&dir).unwrap();

        let table = generate_table(3, &CntParams::default()).unwrap();
        let path = dir.join("sweep.csv");
        table_to_csv(&table, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "n,m,diameter_nm,bandgap_ev,type");
        assert!(lines[1].starts_with("1,0,"));
        assert!(lines[1].ends_with(",Semiconducting"));
        assert!(lines[9].starts_with("3,3,"));
        assert!(lines[9].ends_with(",0.0,Metallic"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_bands_csv() {
        let dir = std::env::temp_dir().join("nanocarbon_cnt_bands_export");
        fs::create_dir_all(&dir).unwrap();

        let bands = subbands(
            Chirality::new(10, 10),
            &[-1.0, 0.0, 1.0],
            &CntParams::default(),
            &SubbandParams {
                modes: 1,
                spacing: 0.3,
            },
        )
        .unwrap();
        let path = dir.join("bands.csv");
        bands_to_csv(&bands, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "k,q-1_upper,q-1_lower,q0_upper,q0_lower,q1_upper,q1_lower"
        );
        assert!(lines[2].starts_with("0.000000,0.300000,-0.300000,0.000000,"));

        fs::remove_dir_all(&dir).ok();
    }
}

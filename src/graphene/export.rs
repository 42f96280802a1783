//! # 石墨烯数据导出
//!
//! 导出原子坐标、化学键和能带数据为 CSV。
//!
//! ## 支持格式
//! - 原子：index, x, y
//! - 化学键：i, j
//! - 能带：index, kx, ky, conduction, valence
//!
//! ## 依赖关系
//! - 被 `commands/graphene/` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{NanoError, Result};
use crate::graphene::BandStructure;
use crate::models::{Bond, Point2};

use std::path::Path;

/// 导出原子坐标
pub fn atoms_to_csv(positions: &[Point2], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["index", "x", "y"])?;
    for (index, p) in positions.iter().enumerate() {
        wtr.write_record(&[
            index.to_string(),
            format!("{:.6}", p[0]),
            format!("{:.6}", p[1]),
        ])?;
    }

    flush(wtr, output_path)
}

/// 导出化学键（serde 序列化，表头取字段名）
pub fn bonds_to_csv(bonds: &[Bond], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    for bond in bonds {
        wtr.serialize(bond)?;
    }
    flush(wtr, output_path)
}

/// 导出沿路径的能带
pub fn bands_to_csv(bands: &BandStructure, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["index", "kx", "ky", "conduction", "valence"])?;
    for (index, ((k, e_c), e_v)) in bands
        .path
        .points
        .iter()
        .zip(bands.conduction.iter())
        .zip(bands.valence.iter())
        .enumerate()
    {
        wtr.write_record(&[
            index.to_string(),
            format!("{:.6}", k[0]),
            format!("{:.6}", k[1]),
            format!("{:.6}", e_c),
            format!("{:.6}", e_v),
        ])?;
    }

    flush(wtr, output_path)
}

fn flush(mut wtr: csv::Writer<std::fs::File>, output_path: &Path) -> Result<()> {
    wtr.flush().map_err(|e| NanoError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphene::{band_structure, detect_bonds, generate_lattice, graphene_path};
    use crate::models::GrapheneParams;

    use std::fs;

    #[test]
    fn test_atoms_and_bonds_csv() {
        let dir = std::env::temp_dir().join("nanocarbon_graphene_export");
        fs::create_dir_all(&dir).unwrap();

        let pts = generate_lattice(2, 2, 1.0).unwrap();
        let bonds = detect_bonds(&pts, 1.0, 0.2).unwrap();

        let atoms_path = dir.join("atoms.csv");
        atoms_to_csv(&pts, &atoms_path).unwrap();
        let text = fs::read_to_string(&atoms_path).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.lines().next().unwrap(), "index,x,y");
        assert_eq!(text.lines().nth(2).unwrap(), "1,0.000000,1.000000");

        let bonds_path = dir.join("bonds.csv");
        bonds_to_csv(&bonds, &bonds_path).unwrap();
        let text = fs::read_to_string(&bonds_path).unwrap();
        assert_eq!(text.lines().next().unwrap(), "i,j");
        assert_eq!(text.lines().count(), bonds.len() + 1);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_bands_csv() {
        let dir = std::env::temp_dir().join("nanocarbon_graphene_bands_export");
        fs::create_dir_all(&dir).unwrap();

        let bands =
            band_structure(graphene_path(1.0, 10).unwrap(), &GrapheneParams::default()).unwrap();
        let path = dir.join("bands.csv");
        bands_to_csv(&bands, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 31);
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "0,0.000000,0.000000,3.000000,-3.000000"
        );

        fs::remove_dir_all(&dir).ok();
    }
}

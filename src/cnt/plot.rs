//! # CNT 图表生成
//!
//! ## 功能
//! - 子带能带图：每个子带的 ±E 分支、零能量线、半导体型带隙标注
//! - 带隙-直径散点图：按金属型/半导体型分色
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/cnt/` 调用
//! - 使用 `cnt/bands.rs`, `cnt/sweep.rs`
//! - 使用 `plotters` 渲染图表

use crate::cnt::{CntBands, CntTable};
use crate::error::{NanoError, Result};
use crate::models::CntType;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 生成子带能带图
pub fn generate_band_plot(
    bands: &CntBands,
    output_path: &Path,
    title: &str,
    size: (u32, u32),
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_bands(&root, bands, title)?;
        root.present().map_err(NanoError::plot)?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_bands(&root, bands, title)?;
        root.present().map_err(NanoError::plot)?;
    }
    Ok(())
}

/// 生成带隙-直径散点图
pub fn generate_scatter_plot(
    table: &CntTable,
    output_path: &Path,
    title: &str,
    size: (u32, u32),
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_scatter(&root, table, title)?;
        root.present().map_err(NanoError::plot)?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_scatter(&root, table, title)?;
        root.present().map_err(NanoError::plot)?;
    }
    Ok(())
}

fn draw_bands<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    bands: &CntBands,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(NanoError::plot)?;

    let k_min = bands.k.iter().cloned().fold(f64::INFINITY, f64::min);
    let k_max = bands.k.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (k_min, k_max) = if k_min < k_max {
        (k_min, k_max)
    } else {
        (-1.0, 1.0)
    };

    let e_max = bands
        .subbands
        .iter()
        .flat_map(|s| s.upper.iter())
        .cloned()
        .fold(0.0, f64::max)
        * 1.05
        + 0.1;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(k_min..k_max, -e_max..e_max)
        .map_err(NanoError::plot)?;

    chart
        .configure_mesh()
        .x_desc("k (tube axis)")
        .y_desc("Energy (arb units)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(NanoError::plot)?;

    for (idx, subband) in bands.subbands.iter().enumerate() {
        let color = Palette99::pick(idx);
        for branch in [&subband.upper, &subband.lower] {
            chart
                .draw_series(LineSeries::new(
                    bands.k.iter().cloned().zip(branch.iter().cloned()),
                    color.stroke_width(1),
                ))
                .map_err(NanoError::plot)?;
        }
    }

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(k_min, 0.0), (k_max, 0.0)],
            BLACK.mix(0.5).stroke_width(1),
        )))
        .map_err(NanoError::plot)?;

    if bands.tube_type == CntType::Semiconducting {
        chart
            .draw_series(std::iter::once(Text::new(
                format!("Bandgap ≈ {:.2} eV", bands.bandgap),
                (0.1, 0.5),
                ("sans-serif", 16).into_font().color(&BLACK),
            )))
            .map_err(NanoError::plot)?;
    }

    Ok(())
}

fn draw_scatter<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &CntTable,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(NanoError::plot)?;

    let d_max = table.diameters.iter().cloned().fold(0.0, f64::max) * 1.05 + 0.05;
    let eg_max = table.bandgaps.iter().cloned().fold(0.0, f64::max) * 1.1 + 0.1;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..d_max, -0.05..eg_max)
        .map_err(NanoError::plot)?;

    chart
        .configure_mesh()
        .x_desc("Diameter (nm)")
        .y_desc("Bandgap Eg (eV)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(NanoError::plot)?;

    let series = [
        (
            CntType::Semiconducting,
            "Semiconducting CNTs",
            RGBColor(0, 102, 204),
        ),
        (CntType::Metallic, "Metallic CNTs", RGBColor(230, 120, 0)),
    ];

    for (tube_type, label, color) in series {
        let points = table.points_of(tube_type);
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(d, eg)| Circle::new((d, eg), 4, color.filled())),
            )
            .map_err(NanoError::plot)?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(NanoError::plot)?;

    Ok(())
}

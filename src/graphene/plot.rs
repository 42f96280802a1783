//! # 石墨烯图表生成
//!
//! 使用 `plotters` 绘制蜂窝结构与能带图。
//!
//! ## 功能
//! - 结构图：原子散点 + 化学键线段，等比例坐标
//! - 能带图：沿 Γ → K → M → Γ 的导带 (+E) 与价带 (-E)
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/graphene/` 调用
//! - 使用 `graphene/dispersion.rs` 的 BandStructure
//! - 使用 `plotters` 渲染图表

use crate::error::{NanoError, Result};
use crate::graphene::BandStructure;
use crate::models::{Bond, Point2};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 生成结构图
pub fn generate_structure_plot(
    positions: &[Point2],
    bonds: &[Bond],
    output_path: &Path,
    title: &str,
    size: (u32, u32),
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_structure(&root, positions, bonds, title)?;
        root.present().map_err(NanoError::plot)?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_structure(&root, positions, bonds, title)?;
        root.present().map_err(NanoError::plot)?;
    }
    Ok(())
}

/// 生成能带图
pub fn generate_band_plot(
    bands: &BandStructure,
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

/// 绘制结构图
fn draw_structure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    positions: &[Point2],
    bonds: &[Bond],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(NanoError::plot)?;

    // 等比例：x、y 使用相同跨度
    let (x_range, y_range) = square_bounds(positions);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(NanoError::plot)?;

    chart
        .configure_mesh()
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .draw()
        .map_err(NanoError::plot)?;

    let bond_color = RGBColor(90, 90, 90);
    chart
        .draw_series(bonds.iter().filter_map(|b| b.endpoints(positions)).map(|(p, q)| {
            PathElement::new(vec![(p[0], p[1]), (q[0], q[1])], bond_color.stroke_width(2))
        }))
        .map_err(NanoError::plot)?;

    let atom_color = RGBColor(0, 102, 204);
    chart
        .draw_series(
            positions
                .iter()
                .map(|p| Circle::new((p[0], p[1]), 5, atom_color.filled())),
        )
        .map_err(NanoError::plot)?;

    Ok(())
}

/// 绘制能带图
fn draw_bands<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    bands: &BandStructure,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(NanoError::plot)?;

    let x_max = bands.conduction.len().saturating_sub(1).max(1) as f64;
    let y_max = bands.bandwidth() * 1.1 + 0.1;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, -y_max..y_max)
        .map_err(NanoError::plot)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_: &f64| String::new())
        .x_desc(format!("k-path ({})", bands.path.description()))
        .y_desc("Energy (arb units)")
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(NanoError::plot)?;

    // 高对称点竖线与标签
    for (index, label) in &bands.path.ticks {
        let x = *index as f64;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, -y_max), (x, y_max)],
                BLACK.mix(0.3).stroke_width(1),
            )))
            .map_err(NanoError::plot)?;
        chart
            .draw_series(std::iter::once(Text::new(
                label.clone(),
                (x, -y_max * 0.95),
                ("sans-serif", 18).into_font().color(&BLACK),
            )))
            .map_err(NanoError::plot)?;
    }

    // 零能量参考线
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (x_max, 0.0)],
            BLACK.mix(0.5).stroke_width(1),
        )))
        .map_err(NanoError::plot)?;

    let conduction_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            bands.conduction.iter().enumerate().map(|(i, e)| (i as f64, *e)),
            conduction_color.stroke_width(2),
        ))
        .map_err(NanoError::plot)?
        .label("Conduction (+E)")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], conduction_color.stroke_width(2))
        });

    let valence_color = RGBColor(204, 51, 0);
    chart
        .draw_series(LineSeries::new(
            bands.valence.iter().enumerate().map(|(i, e)| (i as f64, *e)),
            valence_color.stroke_width(2),
        ))
        .map_err(NanoError::plot)?
        .label("Valence (-E)")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], valence_color.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(NanoError::plot)?;

    Ok(())
}

/// 计算包含所有点、x/y 跨度相同的绘图范围
fn square_bounds(positions: &[Point2]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    if positions.is_empty() {
        return (-1.0..1.0, -1.0..1.0);
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in positions {
        x_min = x_min.min(p[0]);
        x_max = x_max.max(p[0]);
        y_min = y_min.min(p[1]);
        y_max = y_max.max(p[1]);
    }

    let half = 0.5 * (x_max - x_min).max(y_max - y_min) + 0.5;
    let (cx, cy) = (0.5 * (x_min + x_max), 0.5 * (y_min + y_max));
    (cx - half..cx + half, cy - half..cy + half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        let (x, y) = square_bounds(&[[0.0, 0.0], [4.0, 1.0]]);
        assert!(((x.end - x.start) - (y.end - y.start)).abs() < 1e-12);
        assert!(x.start < 0.0 && x.end > 4.0);
        assert!(y.start < 0.0 && y.end > 1.0);
    }
}

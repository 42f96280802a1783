//! # cnt bands 子命令实现
//!
//! 在 k ∈ [-π, π] 上计算简化子带能带，输出能带图或 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/cnt.rs` 定义的 BandsArgs
//! - 使用 `cnt/bands.rs`, `cnt/plot.rs`, `cnt/export.rs`

use crate::cli::cnt::BandsArgs;
use crate::cli::OutputFormat;
use crate::cnt::{self, subbands};
use crate::commands::resolve_format;
use crate::error::{NanoError, Result};
use crate::graphene::linspace;
use crate::models::{Chirality, CntType};
use crate::utils::output;

use std::f64::consts::PI;

/// 执行 bands 子命令
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("CNT Band Structure");

    if args.k_points < 2 {
        return Err(NanoError::config("k_points", "must be at least 2"));
    }

    let chirality = Chirality::new(args.chirality.n, args.chirality.m);
    let k = linspace(-PI, PI, args.k_points);
    let bands = subbands(
        chirality,
        &k,
        &args.constants.params(),
        &args.subband_params(),
    )?;

    output::print_info(&format!(
        "CNT{} -> {}, {} subbands ({} branches) over {} k-points",
        chirality,
        bands.tube_type,
        bands.subbands.len(),
        bands.branch_count(),
        k.len()
    ));
    if bands.tube_type == CntType::Semiconducting {
        output::print_value("Eg", &format!("{:.3} eV", bands.bandgap));
    }
    output::print_value("min |E|", &format!("{:.4}", bands.min_abs_energy()));

    match resolve_format(args.format, &args.output) {
        OutputFormat::Csv => cnt::export::bands_to_csv(&bands, &args.output)?,
        format => {
            let title = format!("CNT Band Structure {} -> {}", chirality, bands.tube_type);
            cnt::plot::generate_band_plot(
                &bands,
                &args.output,
                &title,
                args.figure.size(),
                format == OutputFormat::Svg,
            )?
        }
    }

    output::print_success(&format!("Bands saved to '{}'", args.output.display()));
    Ok(())
}

//! # graphene bands 子命令实现
//!
//! 沿 Γ → K → M → Γ 计算紧束缚能带，输出能带图或 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/graphene.rs` 定义的 BandsArgs
//! - 使用 `graphene/kpath.rs`, `graphene/dispersion.rs`, `graphene/plot.rs`

use crate::cli::graphene::BandsArgs;
use crate::cli::OutputFormat;
use crate::commands::resolve_format;
use crate::error::Result;
use crate::graphene::{self, band_structure, graphene_path};
use crate::models::GrapheneParams;
use crate::utils::output;

/// 执行 bands 子命令
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("Graphene Band Structure");

    let params = GrapheneParams {
        lattice_constant: args.lattice_constant,
        hopping: args.hopping,
    };
    params.validate()?;

    let path = graphene_path(params.lattice_constant, args.n_points)?;
    output::print_info(&format!(
        "Sampling {} k-points along {}",
        path.len(),
        path.description()
    ));

    let bands = band_structure(path, &params)?;
    output::print_value("t", &format!("{}", params.hopping));
    output::print_value("E(Γ)", &format!("{:.4}", bands.conduction[0]));
    output::print_value("Bandwidth", &format!("{:.4}", bands.bandwidth()));

    match resolve_format(args.format, &args.output) {
        OutputFormat::Csv => graphene::export::bands_to_csv(&bands, &args.output)?,
        format => graphene::plot::generate_band_plot(
            &bands,
            &args.output,
            "Graphene Band Structure",
            args.figure.size(),
            format == OutputFormat::Svg,
        )?,
    }

    output::print_success(&format!("Bands saved to '{}'", args.output.display()));
    Ok(())
}

//! # graphene structure 子命令实现
//!
//! 生成 nx × ny 蜂窝晶格、检测化学键，输出结构图或 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/graphene.rs` 定义的 StructureArgs
//! - 使用 `graphene/lattice.rs`, `graphene/plot.rs`, `graphene/export.rs`

use crate::cli::graphene::StructureArgs;
use crate::cli::OutputFormat;
use crate::commands::{resolve_format, sibling_path};
use crate::error::Result;
use crate::graphene::{self, detect_bonds, generate_lattice};
use crate::utils::output;

/// 执行 structure 子命令
pub fn execute(args: StructureArgs) -> Result<()> {
    output::print_header("Graphene Honeycomb Structure");

    let positions = generate_lattice(args.nx, args.ny, args.lattice_constant)?;
    output::print_success(&format!(
        "Generated {} atoms on a {} x {} cell grid (a = {})",
        positions.len(),
        args.nx,
        args.ny,
        args.lattice_constant
    ));

    let bonds = detect_bonds(&positions, args.bond_length, args.tolerance)?;
    output::print_success(&format!(
        "Detected {} bonds (|d - {}| < {})",
        bonds.len(),
        args.bond_length,
        args.tolerance
    ));
    if bonds.is_empty() {
        output::print_warning("No bonds found; check --bond-length against --lattice-constant");
    }

    match resolve_format(args.format, &args.output) {
        OutputFormat::Csv => {
            let atoms_path = sibling_path(&args.output, "_atoms", "csv");
            let bonds_path = sibling_path(&args.output, "_bonds", "csv");
            graphene::export::atoms_to_csv(&positions, &atoms_path)?;
            graphene::export::bonds_to_csv(&bonds, &bonds_path)?;
            output::print_success(&format!(
                "Atoms saved to '{}', bonds saved to '{}'",
                atoms_path.display(),
                bonds_path.display()
            ));
        }
        format => {
            let title = format!("Graphene Structure ({} x {})", args.nx, args.ny);
            graphene::plot::generate_structure_plot(
                &positions,
                &bonds,
                &args.output,
                &title,
                (args.width, args.height),
                format == OutputFormat::Svg,
            )?;
            output::print_success(&format!("Structure saved to '{}'", args.output.display()));
        }
    }

    Ok(())
}

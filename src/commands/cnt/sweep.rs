//! # cnt sweep 子命令实现
//!
//! 并行扫描 (n, m) 三角区域，打印统计与部分结果，
//! 输出带隙-直径散点图或 CSV 表。
//!
//! ## 依赖关系
//! - 使用 `cli/cnt.rs` 定义的 SweepArgs
//! - 使用 `cnt/sweep.rs`, `cnt/plot.rs`, `cnt/export.rs`
//! - 使用 `utils/progress.rs` 显示进度

use crate::cli::cnt::SweepArgs;
use crate::cli::OutputFormat;
use crate::cnt::{self, generate_table, generate_table_parallel, CntTable};
use crate::commands::resolve_format;
use crate::error::Result;
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 扫描结果行
#[derive(Debug, Clone, Tabled)]
struct SweepRow {
    #[tabled(rename = "(n,m)")]
    chirality: String,
    #[tabled(rename = "Type")]
    tube_type: String,
    #[tabled(rename = "Diameter (nm)")]
    diameter: String,
    #[tabled(rename = "Eg (eV)")]
    bandgap: String,
}

/// 执行 sweep 子命令
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("CNT Bandgap vs Diameter");

    let params = args.constants.params();
    let spinner = progress::create_spinner(&format!("Sweeping n = 1..={}", args.n_max));
    let table = if args.jobs == 1 {
        generate_table(args.n_max, &params)
    } else {
        generate_table_parallel(args.n_max, &params, args.jobs)
    };
    spinner.finish_and_clear();
    let table = table?;

    let (metallic, semiconducting) = table.type_counts();
    output::print_success(&format!(
        "Generated {} tubes: {} metallic, {} semiconducting",
        table.len(),
        metallic,
        semiconducting
    ));

    print_table(&table, args.top_n);

    match resolve_format(args.format, &args.output) {
        OutputFormat::Csv => cnt::export::table_to_csv(&table, &args.output)?,
        format => cnt::plot::generate_scatter_plot(
            &table,
            &args.output,
            "CNT Bandgap vs Diameter",
            args.figure.size(),
            format == OutputFormat::Svg,
        )?,
    }

    output::print_separator();
    output::print_success(&format!("Sweep saved to '{}'", args.output.display()));
    output::print_info(
        "Smaller-diameter CNTs generally have larger bandgaps; metallic CNTs show Eg = 0.",
    );

    Ok(())
}

/// 打印带隙最大的前 count 根管
fn print_table(table: &CntTable, count: usize) {
    let mut records: Vec<_> = table.records().collect();
    records.sort_by(|a, b| {
        b.bandgap_ev
            .partial_cmp(&a.bandgap_ev)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let rows: Vec<SweepRow> = records
        .iter()
        .take(count)
        .map(|r| SweepRow {
            chirality: r.chirality().to_string(),
            tube_type: r.tube_type.to_string(),
            diameter: format!("{:.3}", r.diameter_nm),
            bandgap: format!("{:.3}", r.bandgap_ev),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("Top {} Tubes by Bandgap", rows.len()));
        println!("{}", Table::new(&rows));
    }
}

//! # cnt analyze 子命令实现
//!
//! 报告单个 (n, m) 管的导电类型、几何名称、直径与带隙。
//!
//! ## 依赖关系
//! - 使用 `cli/cnt.rs` 定义的 AnalyzeArgs
//! - 使用 `cnt/chirality.rs`

use crate::cli::cnt::AnalyzeArgs;
use crate::error::Result;
use crate::models::{Chirality, CntType};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 分析结果行
#[derive(Debug, Clone, Tabled)]
struct AnalysisRow {
    #[tabled(rename = "(n,m)")]
    chirality: String,
    #[tabled(rename = "Geometry")]
    geometry: String,
    #[tabled(rename = "Type")]
    tube_type: String,
    #[tabled(rename = "Diameter (nm)")]
    diameter: String,
    #[tabled(rename = "Eg (eV)")]
    bandgap: String,
}

/// 执行 analyze 子命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    output::print_header("CNT Chirality Analyzer");

    let params = args.constants.params();
    let chirality = Chirality::new(args.chirality.n, args.chirality.m);
    if chirality.m > chirality.n {
        output::print_warning(&format!(
            "m > n: {} is equivalent to ({},{}) by convention",
            chirality, chirality.m, chirality.n
        ));
    }

    let record = chirality.analyze(&params)?;

    match record.tube_type {
        CntType::Metallic => {
            output::print_success(&format!("CNT{} is METALLIC (Eg = 0)", chirality))
        }
        CntType::Semiconducting => {
            output::print_success(&format!("CNT{} is SEMICONDUCTING", chirality))
        }
    }

    let row = AnalysisRow {
        chirality: chirality.to_string(),
        geometry: chirality.geometry().to_string(),
        tube_type: record.tube_type.to_string(),
        diameter: format!("{:.3}", record.diameter_nm),
        bandgap: format!("{:.3}", record.bandgap_ev),
    };
    println!("{}", Table::new([row]));

    Ok(())
}

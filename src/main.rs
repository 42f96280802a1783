//! # nanocarbon - 石墨烯与碳纳米管工具箱
//!
//! 由结构参数推导原子坐标、成键拓扑、金属/半导体分类、管径、带隙与色散关系。
//! 所有公式均为闭式近似，面向教学演示。
//!
//! ## 子命令
//! - `graphene structure` - 蜂窝晶格与化学键
//! - `graphene bands`     - 紧束缚能带 (Γ → K → M → Γ)
//! - `cnt analyze`        - 单个 (n, m) 的类型、直径、带隙
//! - `cnt bands`          - 简化子带能带
//! - `cnt sweep`          - 带隙-直径扫描
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── graphene/  (晶格、k 路径、色散)
//!   │     ├── cnt/       (手性、扫描、子带)
//!   │     └── models/    (数据模型与参数集)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod cnt;
mod commands;
mod error;
mod graphene;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

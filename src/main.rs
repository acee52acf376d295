//! # jarvis-cif - JARVIS-DFT 结构抽样导出工具
//!
//! 从 JARVIS-DFT 数据集中随机抽取材料条目，转换为晶体结构并写出 CIF 文件。
//!
//! ## 流程
//! 加载数据集 → 随机抽样 → 逐条转换 → 写入 `<jid>.cif` → 汇总
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (批处理执行逻辑)
//!   │     ├── dataset/    (数据集加载与抽样)
//!   │     ├── converters/ (结构解码与 CIF 生成)
//!   │     └── models/     (数据模型)
//!   ├── utils/      (输出、进度条、文件写入)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod converters;
mod dataset;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

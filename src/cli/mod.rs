//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! 只暴露输出目录一个选项；数据集名称、抽样数量、对称容差均为固定常量，
//! 见 `commands::generate::GenerateConfig`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::Parser;
use std::path::PathBuf;

/// jarvis-cif - JARVIS-DFT 抽样导出 CIF
#[derive(Parser, Debug)]
#[command(name = "jarvis-cif")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Generate CIF files for 1K randomly sampled jarvis-dft materials",
    long_about = None
)]
pub struct Cli {
    /// Folder to store the generated .cif files
    #[arg(long = "output_folder", alias = "output-folder", default_value = "cif_output")]
    pub output_folder: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_folder() {
        let cli = Cli::try_parse_from(["jarvis-cif"]).unwrap();
        assert_eq!(cli.output_folder, PathBuf::from("cif_output"));
    }

    #[test]
    fn test_output_folder_flag_and_alias() {
        let cli = Cli::try_parse_from(["jarvis-cif", "--output_folder", "out/a"]).unwrap();
        assert_eq!(cli.output_folder, PathBuf::from("out/a"));

        let cli = Cli::try_parse_from(["jarvis-cif", "--output-folder", "out/b"]).unwrap();
        assert_eq!(cli.output_folder, PathBuf::from("out/b"));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["jarvis-cif", "--sample-size", "10"]).is_err());
    }
}

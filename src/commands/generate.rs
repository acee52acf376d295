//! # CIF 批量生成
//!
//! 加载 JARVIS-DFT 数据集，随机抽样后逐条转换为 CIF 文件。
//!
//! ## 流程
//! - 加载数据集（失败即终止，退出码 1）
//! - 无放回抽样 `min(1000, N)` 个条目
//! - 逐条解码、生成 CIF、写入 `<jid>.cif`
//! - 单个条目失败只记录并跳过，不中断批处理
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `dataset/`, `converters/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/files.rs`

use crate::cli::Cli;
use crate::converters::{
    AtomsDecoder, CifConverter, CifSerializer, ConvertOutcome, FormulaProvider,
};
use crate::dataset::figshare::FigshareSource;
use crate::dataset::sampler::sample_records;
use crate::dataset::{DatasetSource, Record};
use crate::error::Result;
use crate::utils::{files, output, progress};

use indicatif::ProgressBar;
use rand::Rng;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 批处理配置
///
/// 除输出目录外均为固定常量，不通过命令行暴露。
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub dataset: String,
    pub sample_size: usize,
    /// 对称容差 (Å)
    pub symprec: f64,
    /// 写入条目注释行的来源标记
    pub tag: String,
    pub output_folder: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            dataset: "dft_3d".to_string(),
            sample_size: 1000,
            symprec: 0.1,
            tag: env!("CARGO_PKG_NAME").to_string(),
            output_folder: PathBuf::from("cif_output"),
        }
    }
}

impl From<Cli> for GenerateConfig {
    fn from(cli: Cli) -> Self {
        GenerateConfig {
            output_folder: cli.output_folder,
            ..Default::default()
        }
    }
}

/// 批处理统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// 已处理条目数（含跳过）
    pub attempted: usize,
    pub written: usize,
    pub missing_payload: usize,
    pub decode_failed: usize,
    pub empty: usize,
    pub write_failed: usize,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// 执行 CIF 生成
pub fn execute(cli: Cli) -> Result<()> {
    let config = GenerateConfig::from(cli);
    let source = FigshareSource::new()?;
    run_with(&config, &source, &mut rand::rng())?;
    Ok(())
}

/// 使用给定数据来源和随机数发生器运行完整流程
pub fn run_with<S, R>(config: &GenerateConfig, source: &S, rng: &mut R) -> Result<BatchSummary>
where
    S: DatasetSource,
    R: Rng + ?Sized,
{
    output::print_header("Generating CIF files from JARVIS-DFT");

    output::print_info(&format!("Loading dataset '{}'...", config.dataset));
    let records = source.load(&config.dataset)?;
    output::print_info(&format!("Loaded {} records", records.len()));

    let sample = sample_records(records, config.sample_size, rng);
    if sample.len() < config.sample_size {
        output::print_warning(&format!(
            "Dataset has only {} records, sampling all of them",
            sample.len()
        ));
    }

    files::ensure_dir(&config.output_folder)?;

    let converter = CifConverter::native(config.symprec, config.tag.clone());
    let pb = progress::create_progress_bar(sample.len() as u64, "Generating CIF files");
    let summary = process_batch(&sample, &converter, &config.output_folder, &pb);
    pb.finish_with_message("Done");

    // 计数为已处理条目数，而不是实际写出的文件数
    output::print_done(&format!(
        "Successfully generated {} CIF files in '{}'.",
        summary.attempted,
        config.output_folder.display()
    ));
    print_summary(&summary);

    Ok(summary)
}

/// 逐条转换并写出；单个条目失败不会中断
pub fn process_batch<D, F, S>(
    records: &[Record],
    converter: &CifConverter<D, F, S>,
    output_dir: &Path,
    pb: &ProgressBar,
) -> BatchSummary
where
    D: AtomsDecoder,
    F: FormulaProvider,
    S: CifSerializer,
{
    let mut summary = BatchSummary::default();

    for record in records {
        match converter.convert(record) {
            ConvertOutcome::MissingPayload => summary.missing_payload += 1,
            ConvertOutcome::DecodeFailed { id, error } => {
                summary.decode_failed += 1;
                pb.suspend(|| {
                    output::print_error_chain(&format!("Error processing entry {}", id), &error);
                });
            }
            ConvertOutcome::Empty => summary.empty += 1,
            ConvertOutcome::Converted { id, text } => {
                match files::write_cif(output_dir, &id, &text) {
                    Ok(_) => summary.written += 1,
                    Err(e) => {
                        summary.write_failed += 1;
                        pb.suspend(|| {
                            output::print_error_chain(
                                &format!("Error processing entry {}", id),
                                &e,
                            );
                        });
                    }
                }
            }
        }

        summary.attempted += 1;
        pb.inc(1);
    }

    summary
}

fn print_summary(summary: &BatchSummary) {
    let rows = vec![
        SummaryRow {
            outcome: "Written",
            count: summary.written,
        },
        SummaryRow {
            outcome: "Missing atoms",
            count: summary.missing_payload,
        },
        SummaryRow {
            outcome: "Decode failed",
            count: summary.decode_failed,
        },
        SummaryRow {
            outcome: "No output",
            count: summary.empty,
        },
        SummaryRow {
            outcome: "Write failed",
            count: summary.write_failed,
        },
    ];

    let table = Table::new(&rows);
    println!("{}", table);
}

//! # 结构转换模块
//!
//! 将数据集条目转换为带注释头的 CIF 文本。
//!
//! ## 可替换的能力接口
//! - `AtomsDecoder`: 原子结构载荷 → `Crystal`
//! - `FormulaProvider`: `Crystal` → 约化化学式
//! - `CifSerializer`: `Crystal` + 容差 → CIF 文本
//!
//! `CifConverter` 组合三者，对单个条目给出 `ConvertOutcome`。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `dataset/`, `models/`
//! - 子模块: jarvis, cif

pub mod cif;
pub mod jarvis;

use crate::dataset::Record;
use crate::error::{JarvisCifError, Result};
use crate::models::Crystal;

use serde_json::Value;

pub use cif::P1CifWriter;
pub use jarvis::JarvisAtomsDecoder;

/// 原子结构载荷解码
pub trait AtomsDecoder {
    fn decode(&self, payload: &Value) -> Result<Crystal>;
}

/// 约化化学式
pub trait FormulaProvider {
    fn reduced_formula(&self, crystal: &Crystal) -> Result<String>;
}

/// CIF 文本生成
pub trait CifSerializer {
    fn serialize(&self, crystal: &Crystal, symprec: f64) -> Result<String>;
}

/// 由结构组分计算约化化学式
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositionFormula;

impl FormulaProvider for CompositionFormula {
    fn reduced_formula(&self, crystal: &Crystal) -> Result<String> {
        let comp = crystal.composition();
        if comp.is_empty() {
            return Err(JarvisCifError::InvalidStructure(
                "cannot derive formula of an empty structure".to_string(),
            ));
        }
        Ok(comp.reduced_formula())
    }
}

/// 单个条目的转换结果
#[derive(Debug)]
pub enum ConvertOutcome {
    /// 条目没有原子结构载荷，静默跳过
    MissingPayload,
    /// 载荷解码失败，需要报告
    DecodeFailed { id: String, error: JarvisCifError },
    /// 化学式或 CIF 生成失败，不输出
    Empty,
    /// 转换成功
    Converted { id: String, text: String },
}

/// 条目 → CIF 文本转换器
pub struct CifConverter<D, F, S> {
    decoder: D,
    formula: F,
    serializer: S,
    symprec: f64,
    tag: String,
}

impl CifConverter<JarvisAtomsDecoder, CompositionFormula, P1CifWriter> {
    /// JARVIS 载荷 + 组分化学式 + P1 CIF 的默认组合
    pub fn native(symprec: f64, tag: impl Into<String>) -> Self {
        CifConverter::new(
            JarvisAtomsDecoder,
            CompositionFormula,
            P1CifWriter,
            symprec,
            tag,
        )
    }
}

impl<D, F, S> CifConverter<D, F, S>
where
    D: AtomsDecoder,
    F: FormulaProvider,
    S: CifSerializer,
{
    pub fn new(
        decoder: D,
        formula: F,
        serializer: S,
        symprec: f64,
        tag: impl Into<String>,
    ) -> Self {
        CifConverter {
            decoder,
            formula,
            serializer,
            symprec,
            tag: tag.into(),
        }
    }

    /// 转换单个条目
    pub fn convert(&self, record: &Record) -> ConvertOutcome {
        let payload = match record.atoms() {
            Some(p) => p,
            None => return ConvertOutcome::MissingPayload,
        };
        let id = record.identifier();

        let crystal = match self.decoder.decode(payload) {
            Ok(c) => c,
            Err(error) => return ConvertOutcome::DecodeFailed { id, error },
        };

        match self.cif_text(&id, &crystal) {
            Some((_, text)) => ConvertOutcome::Converted { id, text },
            None => ConvertOutcome::Empty,
        }
    }

    /// 生成带注释头的 CIF 文本；任何失败都返回 `None`
    pub fn cif_text(&self, id: &str, crystal: &Crystal) -> Option<(String, String)> {
        let formula = self.formula.reduced_formula(crystal).ok()?;
        let cif = self.serializer.serialize(crystal, self.symprec).ok()?;

        let text = format!("{}\n{}", entry_comment(id, &formula, &self.tag), cif);
        let text = retitle(&text, &formula);
        Some((formula, text))
    }
}

/// 条目注释行
pub fn entry_comment(id: &str, formula: &str, tag: &str) -> String {
    format!("# Entry {} {} generated using {}", id, formula, tag)
}

/// 将第一行 `data_` 声明改写为 `data_<formula>`
pub fn retitle(text: &str, formula: &str) -> String {
    let mut replaced = false;
    text.split('\n')
        .map(|line| {
            if !replaced && line.starts_with("data_") {
                replaced = true;
                format!("data_{}", formula)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

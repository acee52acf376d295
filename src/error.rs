//! # 统一错误处理模块
//!
//! 定义 jarvis-cif 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// jarvis-cif 统一错误类型
#[derive(Error, Debug)]
pub enum JarvisCifError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 数据集错误（唯一的致命错误）
    // ─────────────────────────────────────────────────────────────
    #[error("Dataset '{dataset}' is unavailable: {reason}")]
    DataUnavailable { dataset: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 解析 / 结构错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode {format} payload: {reason}")]
    DecodeError { format: String, reason: String },

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 转换错误
    // ─────────────────────────────────────────────────────────────
    #[error("Conversion failed: {from} -> {to}\nReason: {reason}")]
    ConversionError {
        from: String,
        to: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl JarvisCifError {
    /// 构造数据集不可用错误
    pub fn unavailable(dataset: &str, reason: impl ToString) -> Self {
        JarvisCifError::DataUnavailable {
            dataset: dataset.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, JarvisCifError>;

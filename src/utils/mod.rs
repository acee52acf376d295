//! # 工具函数模块
//!
//! 提供美化输出、进度条、CIF 文件写入等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `dataset/` 模块使用
//! - 子模块: files, output, progress

pub mod files;
pub mod output;
pub mod progress;

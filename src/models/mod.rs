//! # 数据模型模块
//!
//! 定义统一的晶体结构与化学组分数据模型。
//!
//! ## 依赖关系
//! - 被 `converters/` 和 `commands/` 使用
//! - 子模块: structure, composition, elements

pub mod composition;
pub mod elements;
pub mod structure;

pub use structure::{Atom, Crystal, Lattice};

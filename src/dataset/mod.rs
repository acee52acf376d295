//! # 数据集模块
//!
//! 加载材料数据集并随机抽样。
//!
//! ## 组成
//! - `Record`: 数据集中的一个条目（JSON 对象）
//! - `DatasetSource`: 数据集来源接口，生产实现为 `figshare::FigshareSource`
//! - `sampler`: 无放回均匀抽样
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 子模块: figshare, sampler

pub mod figshare;
pub mod sampler;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 条目缺少 `jid` 时使用的占位标识
pub const UNKNOWN_ID: &str = "unknown_id";

/// 数据集条目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// 条目标识 (`jid`)，缺失时为 `unknown_id`
    pub fn identifier(&self) -> String {
        match self.fields.get("jid") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => UNKNOWN_ID.to_string(),
        }
    }

    /// 原子结构载荷；缺失或为 `null` 均视为不存在
    pub fn atoms(&self) -> Option<&Value> {
        match self.fields.get("atoms") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v),
        }
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Record { fields },
            _ => Record::default(),
        }
    }
}

/// 数据集来源
pub trait DatasetSource {
    /// 加载指定名称的完整数据集；失败时返回 `DataUnavailable`
    fn load(&self, name: &str) -> Result<Vec<Record>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier() {
        let rec = Record::from(json!({"jid": "JVASP-1002"}));
        assert_eq!(rec.identifier(), "JVASP-1002");

        let rec = Record::from(json!({"jid": 42}));
        assert_eq!(rec.identifier(), "42");

        let rec = Record::from(json!({"formula": "Si"}));
        assert_eq!(rec.identifier(), UNKNOWN_ID);

        let rec = Record::from(json!({"jid": null}));
        assert_eq!(rec.identifier(), UNKNOWN_ID);
    }

    #[test]
    fn test_atoms_payload() {
        let rec = Record::from(json!({"jid": "A", "atoms": {"elements": ["Si"]}}));
        assert!(rec.atoms().is_some());

        let rec = Record::from(json!({"jid": "B", "atoms": null}));
        assert!(rec.atoms().is_none());

        let rec = Record::from(json!({"jid": "C"}));
        assert!(rec.atoms().is_none());
    }

    #[test]
    fn test_records_deserialize_from_array() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"jid": "A", "optb88vdw_bandgap": 1.1}, {"jid": "B"}]"#)
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].identifier(), "B");
        assert_eq!(
            serde_json::to_value(&records[0]).unwrap(),
            json!({"jid": "A", "optb88vdw_bandgap": 1.1})
        );
    }
}

//! # 随机抽样
//!
//! 从完整数据集中无放回地均匀抽取 `min(size, len)` 个条目。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `rand::seq::index::sample`

use rand::seq::index;
use rand::Rng;

use super::Record;

/// 无放回抽样，输出顺序无保证
pub fn sample_records<R: Rng + ?Sized>(
    records: Vec<Record>,
    size: usize,
    rng: &mut R,
) -> Vec<Record> {
    let amount = size.min(records.len());
    let mut slots: Vec<Option<Record>> = records.into_iter().map(Some).collect();

    index::sample(rng, slots.len(), amount)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;
    use std::collections::HashSet;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::from(json!({ "jid": format!("JVASP-{}", i) })))
            .collect()
    }

    #[test]
    fn test_sample_size_is_clamped() {
        let mut rng = StdRng::seed_from_u64(7);
        for (requested, available) in [(1000, 3), (3, 1000), (0, 10), (10, 0), (5, 5)] {
            let sample = sample_records(records(available), requested, &mut rng);
            assert_eq!(sample.len(), requested.min(available));
        }
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(11);
        let sample = sample_records(records(500), 200, &mut rng);
        let ids: HashSet<String> = sample.iter().map(|r| r.identifier()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let a = sample_records(records(100), 10, &mut StdRng::seed_from_u64(3));
        let b = sample_records(records(100), 10, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_sample_is_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        let sample = sample_records(records(20), 1000, &mut rng);
        let ids: HashSet<String> = sample.iter().map(|r| r.identifier()).collect();
        let expected: HashSet<String> = (0..20).map(|i| format!("JVASP-{}", i)).collect();
        assert_eq!(ids, expected);
    }
}

//! # 化学组分
//!
//! 统计结构中各元素的原子数，并给出约化化学式。
//!
//! ## 约化化学式规则
//! - 各元素原子数除以最大公约数
//! - 元素按 Pauling 电负性升序排列，无电负性的元素排在最后，相同时按符号排序
//! - 原子数为 1 时省略
//! - 双原子分子与过氧化物等特殊化学式单独处理（如 `O` → `O2`，`HO` → `H2O2`）
//!
//! ## 依赖关系
//! - 被 `models/structure.rs` 和 `converters/` 使用
//! - 使用 `models/elements.rs`

use std::collections::BTreeMap;

use super::elements;

/// 约化后需要改写的特殊化学式
const SPECIAL_FORMULAS: &[(&str, &str)] = &[
    ("LiO", "LiO2"),
    ("NaO", "NaO2"),
    ("KO", "KO2"),
    ("HO", "H2O2"),
    ("CsO", "CsO2"),
    ("RbO", "RbO2"),
    ("O", "O2"),
    ("N", "N2"),
    ("F", "F2"),
    ("Cl", "Cl2"),
    ("H", "H2"),
];

/// 元素组分（元素符号 → 原子数）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    counts: BTreeMap<String, usize>,
}

impl Composition {
    pub fn from_symbols<'a>(symbols: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = BTreeMap::new();
        for sym in symbols {
            *counts.entry(sym.to_string()).or_insert(0) += 1;
        }
        Composition { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 按电负性排序的 (元素, 原子数) 列表
    pub fn sorted_counts(&self) -> Vec<(&str, usize)> {
        let mut items: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(el, n)| (el.as_str(), *n))
            .collect();

        items.sort_by(|(a, _), (b, _)| {
            sort_key(a)
                .total_cmp(&sort_key(b))
                .then_with(|| a.cmp(b))
        });
        items
    }

    /// 约化化学式与约化倍数
    ///
    /// 特殊化学式改写后倍数相应减半，因此倍数可能不是整数。
    pub fn reduced_formula_and_factor(&self) -> (String, f64) {
        let items = self.sorted_counts();
        let divisor = items.iter().fold(0, |acc, (_, n)| gcd(acc, *n)).max(1);

        let formula: String = items
            .iter()
            .map(|(el, n)| {
                let n = n / divisor;
                if n == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, n)
                }
            })
            .collect();

        match SPECIAL_FORMULAS.iter().find(|(from, _)| *from == formula) {
            Some((_, to)) => (to.to_string(), divisor as f64 / 2.0),
            None => (formula, divisor as f64),
        }
    }

    /// 约化化学式，如 `NaCl`、`SiO2`、`Fe2O3`
    pub fn reduced_formula(&self) -> String {
        self.reduced_formula_and_factor().0
    }

    /// 完整化学式，原子数为 1 时也写出，如 `Na4 Cl4`
    pub fn formula_sum(&self) -> String {
        self.sorted_counts()
            .iter()
            .map(|(el, n)| format!("{}{}", el, n))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn sort_key(symbol: &str) -> f64 {
    elements::lookup(symbol)
        .and_then(|e| e.electronegativity)
        .unwrap_or(f64::INFINITY)
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

//! # 元素周期表
//!
//! 元素符号（按原子序数排列）与 Pauling 电负性。电负性用于化学式中元素的排序。
//!
//! ## 依赖关系
//! - 被 `models/composition.rs` 和 `converters/jarvis.rs` 使用
//! - 无外部模块依赖

/// 元素信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub symbol: &'static str,
    /// Pauling 电负性；惰性气体等无定义的为 `None`
    pub electronegativity: Option<f64>,
}

macro_rules! el {
    ($sym:literal, $x:expr) => {
        Element {
            symbol: $sym,
            electronegativity: $x,
        }
    };
}

const N: Option<f64> = None;

static ELEMENTS: &[Element] = &[
    el!("H", Some(2.20)),
    el!("He", N),
    el!("Li", Some(0.98)),
    el!("Be", Some(1.57)),
    el!("B", Some(2.04)),
    el!("C", Some(2.55)),
    el!("N", Some(3.04)),
    el!("O", Some(3.44)),
    el!("F", Some(3.98)),
    el!("Ne", N),
    el!("Na", Some(0.93)),
    el!("Mg", Some(1.31)),
    el!("Al", Some(1.61)),
    el!("Si", Some(1.90)),
    el!("P", Some(2.19)),
    el!("S", Some(2.58)),
    el!("Cl", Some(3.16)),
    el!("Ar", N),
    el!("K", Some(0.82)),
    el!("Ca", Some(1.00)),
    el!("Sc", Some(1.36)),
    el!("Ti", Some(1.54)),
    el!("V", Some(1.63)),
    el!("Cr", Some(1.66)),
    el!("Mn", Some(1.55)),
    el!("Fe", Some(1.83)),
    el!("Co", Some(1.88)),
    el!("Ni", Some(1.91)),
    el!("Cu", Some(1.90)),
    el!("Zn", Some(1.65)),
    el!("Ga", Some(1.81)),
    el!("Ge", Some(2.01)),
    el!("As", Some(2.18)),
    el!("Se", Some(2.55)),
    el!("Br", Some(2.96)),
    el!("Kr", Some(3.00)),
    el!("Rb", Some(0.82)),
    el!("Sr", Some(0.95)),
    el!("Y", Some(1.22)),
    el!("Zr", Some(1.33)),
    el!("Nb", Some(1.60)),
    el!("Mo", Some(2.16)),
    el!("Tc", Some(1.90)),
    el!("Ru", Some(2.20)),
    el!("Rh", Some(2.28)),
    el!("Pd", Some(2.20)),
    el!("Ag", Some(1.93)),
    el!("Cd", Some(1.69)),
    el!("In", Some(1.78)),
    el!("Sn", Some(1.96)),
    el!("Sb", Some(2.05)),
    el!("Te", Some(2.10)),
    el!("I", Some(2.66)),
    el!("Xe", Some(2.60)),
    el!("Cs", Some(0.79)),
    el!("Ba", Some(0.89)),
    el!("La", Some(1.10)),
    el!("Ce", Some(1.12)),
    el!("Pr", Some(1.13)),
    el!("Nd", Some(1.14)),
    el!("Pm", Some(1.13)),
    el!("Sm", Some(1.17)),
    el!("Eu", Some(1.20)),
    el!("Gd", Some(1.20)),
    el!("Tb", Some(1.10)),
    el!("Dy", Some(1.22)),
    el!("Ho", Some(1.23)),
    el!("Er", Some(1.24)),
    el!("Tm", Some(1.25)),
    el!("Yb", Some(1.10)),
    el!("Lu", Some(1.27)),
    el!("Hf", Some(1.30)),
    el!("Ta", Some(1.50)),
    el!("W", Some(2.36)),
    el!("Re", Some(1.90)),
    el!("Os", Some(2.20)),
    el!("Ir", Some(2.20)),
    el!("Pt", Some(2.28)),
    el!("Au", Some(2.54)),
    el!("Hg", Some(2.00)),
    el!("Tl", Some(1.62)),
    el!("Pb", Some(2.33)),
    el!("Bi", Some(2.02)),
    el!("Po", Some(2.00)),
    el!("At", Some(2.20)),
    el!("Rn", N),
    el!("Fr", Some(0.70)),
    el!("Ra", Some(0.90)),
    el!("Ac", Some(1.10)),
    el!("Th", Some(1.30)),
    el!("Pa", Some(1.50)),
    el!("U", Some(1.38)),
    el!("Np", Some(1.36)),
    el!("Pu", Some(1.28)),
    el!("Am", Some(1.30)),
    el!("Cm", Some(1.30)),
    el!("Bk", Some(1.30)),
    el!("Cf", Some(1.30)),
    el!("Es", Some(1.30)),
    el!("Fm", Some(1.30)),
    el!("Md", Some(1.30)),
    el!("No", Some(1.30)),
    el!("Lr", N),
];

/// 按符号查找元素（区分大小写）
pub fn lookup(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// 元素符号是否合法
pub fn is_known(symbol: &str) -> bool {
    lookup(symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_first_103_elements() {
        assert_eq!(ELEMENTS.len(), 103);
        assert_eq!(ELEMENTS[0].symbol, "H");
        assert_eq!(ELEMENTS[102].symbol, "Lr");
    }

    #[test]
    fn test_lookup() {
        let na = lookup("Na").unwrap();
        assert_eq!(na.symbol, "Na");
        assert_eq!(na.electronegativity, Some(0.93));

        assert!(lookup("Ar").unwrap().electronegativity.is_none());
        assert!(lookup("na").is_none());
        assert!(!is_known("Xx"));
    }
}

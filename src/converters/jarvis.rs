//! # JARVIS `atoms` 载荷解码
//!
//! 将 JARVIS 数据集中 `atoms` 字段解码为 `Crystal`。
//!
//! ## 载荷格式
//! ```text
//! {
//!   "lattice_mat": [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]],   # Å，行向量
//!   "abc":         [a, b, c],           # 缺少 lattice_mat 时使用
//!   "angles":      [alpha, beta, gamma],
//!   "coords":      [[x, y, z], ...],
//!   "elements":    ["Si", "Si", ...],
//!   "cartesian":   false,                                       # 可缺省
//!   ...
//! }
//! ```
//!
//! ## 依赖关系
//! - 被 `converters/mod.rs` 使用
//! - 使用 `models/structure.rs`, `models/elements.rs`

use crate::error::{JarvisCifError, Result};
use crate::models::{elements, Atom, Crystal, Lattice};

use serde::Deserialize;
use serde_json::Value;

use super::AtomsDecoder;

const FORMAT: &str = "jarvis atoms";

#[derive(Debug, Deserialize)]
struct JarvisAtoms {
    lattice_mat: Option<[[f64; 3]; 3]>,
    abc: Option<[f64; 3]>,
    angles: Option<[f64; 3]>,
    coords: Vec<[f64; 3]>,
    elements: Vec<String>,
    #[serde(default)]
    cartesian: bool,
}

/// JARVIS `atoms` 解码器
#[derive(Debug, Clone, Copy, Default)]
pub struct JarvisAtomsDecoder;

impl AtomsDecoder for JarvisAtomsDecoder {
    fn decode(&self, payload: &Value) -> Result<Crystal> {
        let raw = JarvisAtoms::deserialize(payload).map_err(|e| decode_error(e.to_string()))?;

        if raw.coords.len() != raw.elements.len() {
            return Err(decode_error(format!(
                "{} coordinates but {} elements",
                raw.coords.len(),
                raw.elements.len()
            )));
        }
        if raw.elements.is_empty() {
            return Err(decode_error("structure has no sites"));
        }

        let lattice = match (raw.lattice_mat, raw.abc, raw.angles) {
            (Some(matrix), _, _) => Lattice::from_vectors(matrix),
            (None, Some([a, b, c]), Some([alpha, beta, gamma])) => {
                Lattice::from_parameters(a, b, c, alpha, beta, gamma)
            }
            _ => return Err(decode_error("missing lattice_mat (or abc and angles)")),
        };
        if !lattice.volume().is_finite() || lattice.inverse().is_none() {
            return Err(JarvisCifError::InvalidStructure(
                "lattice matrix is singular".to_string(),
            ));
        }

        let mut atoms = Vec::with_capacity(raw.elements.len());
        for (symbol, coord) in raw.elements.iter().zip(raw.coords) {
            let symbol = symbol.trim();
            if !elements::is_known(symbol) {
                return Err(JarvisCifError::UnknownElement(symbol.to_string()));
            }

            let frac = if raw.cartesian {
                lattice
                    .cart_to_frac(coord)
                    .ok_or_else(|| decode_error("lattice matrix is singular"))?
            } else {
                coord
            };
            atoms.push(Atom::new(symbol, frac));
        }

        Ok(Crystal::new(lattice, atoms))
    }
}

fn decode_error(reason: impl Into<String>) -> JarvisCifError {
    JarvisCifError::DecodeError {
        format: FORMAT.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_fractional() {
        let payload = json!({
            "lattice_mat": [[0.0, 2.734, 2.734], [2.734, 0.0, 2.734], [2.734, 2.734, 0.0]],
            "coords": [[0.0, 0.0, 0.0], [0.25, 0.25, 0.25]],
            "elements": ["Si", "Si"],
            "abc": [3.867, 3.867, 3.867],
            "angles": [60.0, 60.0, 60.0],
            "cartesian": false,
            "props": ["", ""]
        });
        let crystal = JarvisAtomsDecoder.decode(&payload).unwrap();
        assert_eq!(crystal.atoms.len(), 2);
        assert_eq!(crystal.atoms[1].element, "Si");
        assert!((crystal.atoms[1].position[0] - 0.25).abs() < 1e-12);

        let (a, _, _, alpha, _, _) = crystal.lattice.parameters();
        assert!((a - 3.8664).abs() < 1e-3);
        assert!((alpha - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_decode_cartesian() {
        let payload = json!({
            "lattice_mat": [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
            "coords": [[0.0, 0.0, 0.0], [2.0, 2.0, 2.0]],
            "elements": ["Cs", "Cl"],
            "cartesian": true
        });
        let crystal = JarvisAtomsDecoder.decode(&payload).unwrap();
        let p = crystal.atoms[1].position;
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!((p[1] - 0.5).abs() < 1e-12);
        assert!((p[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_decode_lattice_from_abc_angles() {
        let payload = json!({
            "abc": [3.0, 3.0, 5.0],
            "angles": [90.0, 90.0, 120.0],
            "coords": [[0.0, 0.0, 0.0]],
            "elements": ["Mg"]
        });
        let crystal = JarvisAtomsDecoder.decode(&payload).unwrap();
        let (a, _, c, _, _, gamma) = crystal.lattice.parameters();
        assert!((a - 3.0).abs() < 1e-6);
        assert!((c - 5.0).abs() < 1e-6);
        assert!((gamma - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_decode_cartesian_flag_defaults_to_false() {
        let payload = json!({
            "lattice_mat": [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
            "coords": [[0.5, 0.5, 0.5]],
            "elements": ["Po"]
        });
        let crystal = JarvisAtomsDecoder.decode(&payload).unwrap();
        assert_eq!(crystal.atoms[0].position, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_decode_rejects_mismatched_lengths() {
        let payload = json!({
            "lattice_mat": [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
            "coords": [[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
            "elements": ["Si"]
        });
        let err = JarvisAtomsDecoder.decode(&payload).unwrap_err();
        assert!(matches!(err, JarvisCifError::DecodeError { .. }));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        // 缺少字段
        assert!(JarvisAtomsDecoder.decode(&json!({"elements": ["Si"]})).is_err());
        // 不是对象
        assert!(JarvisAtomsDecoder.decode(&json!("Si2")).is_err());
        // 未知元素
        let payload = json!({
            "lattice_mat": [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
            "coords": [[0.0, 0.0, 0.0]],
            "elements": ["Qq"]
        });
        assert!(matches!(
            JarvisAtomsDecoder.decode(&payload),
            Err(JarvisCifError::UnknownElement(_))
        ));
        // 奇异晶格
        let payload = json!({
            "lattice_mat": [[4.0, 0.0, 0.0], [8.0, 0.0, 0.0], [0.0, 0.0, 4.0]],
            "coords": [[0.0, 0.0, 0.0]],
            "elements": ["Si"]
        });
        assert!(matches!(
            JarvisAtomsDecoder.decode(&payload),
            Err(JarvisCifError::InvalidStructure(_))
        ));
    }
}

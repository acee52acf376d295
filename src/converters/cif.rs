//! # CIF 文本生成
//!
//! 将 `Crystal` 写成 P1 设置下的 CIF 文本块。
//!
//! 不做空间群识别；容差 `symprec` (Å) 用于检查位点重叠：
//! 周期边界下任意两个位点距离小于容差时拒绝输出。
//!
//! ## 依赖关系
//! - 被 `converters/mod.rs` 使用
//! - 使用 `models/structure.rs`, `models/composition.rs`

use crate::error::{JarvisCifError, Result};
use crate::models::Crystal;

use std::fmt::Write;

use super::CifSerializer;

/// P1 CIF 写出器
#[derive(Debug, Clone, Copy, Default)]
pub struct P1CifWriter;

impl CifSerializer for P1CifWriter {
    fn serialize(&self, crystal: &Crystal, symprec: f64) -> Result<String> {
        if crystal.atoms.is_empty() {
            return Err(conversion_error("structure has no sites"));
        }

        let volume = crystal.lattice.volume().abs();
        if volume < 1e-10 {
            return Err(conversion_error("lattice volume is zero"));
        }

        check_overlaps(crystal, symprec)?;

        let comp = crystal.composition();
        let (formula, factor) = comp.reduced_formula_and_factor();
        let z = (factor.round() as usize).max(1);
        let (a, b, c, alpha, beta, gamma) = crystal.lattice.parameters();

        let mut out = String::new();
        // 写入 String 不会失败
        let _ = write_block(
            &mut out,
            &formula,
            &comp.formula_sum(),
            [a, b, c, alpha, beta, gamma],
            volume,
            z,
            crystal,
        );
        Ok(out)
    }
}

fn write_block(
    out: &mut String,
    formula: &str,
    formula_sum: &str,
    cell: [f64; 6],
    volume: f64,
    z: usize,
    crystal: &Crystal,
) -> std::fmt::Result {
    let [a, b, c, alpha, beta, gamma] = cell;

    writeln!(out, "data_{}", formula)?;
    writeln!(out, "_symmetry_space_group_name_H-M   'P 1'")?;
    writeln!(out, "_cell_length_a   {:.8}", a)?;
    writeln!(out, "_cell_length_b   {:.8}", b)?;
    writeln!(out, "_cell_length_c   {:.8}", c)?;
    writeln!(out, "_cell_angle_alpha   {:.8}", alpha)?;
    writeln!(out, "_cell_angle_beta   {:.8}", beta)?;
    writeln!(out, "_cell_angle_gamma   {:.8}", gamma)?;
    writeln!(out, "_symmetry_Int_Tables_number   1")?;
    writeln!(out, "_chemical_formula_structural   {}", formula)?;
    writeln!(out, "_chemical_formula_sum   '{}'", formula_sum)?;
    writeln!(out, "_cell_volume   {:.8}", volume)?;
    writeln!(out, "_cell_formula_units_Z   {}", z)?;

    writeln!(out, "loop_")?;
    writeln!(out, " _symmetry_equiv_pos_site_id")?;
    writeln!(out, " _symmetry_equiv_pos_as_xyz")?;
    writeln!(out, "  1  'x, y, z'")?;

    writeln!(out, "loop_")?;
    writeln!(out, " _atom_site_type_symbol")?;
    writeln!(out, " _atom_site_label")?;
    writeln!(out, " _atom_site_symmetry_multiplicity")?;
    writeln!(out, " _atom_site_fract_x")?;
    writeln!(out, " _atom_site_fract_y")?;
    writeln!(out, " _atom_site_fract_z")?;
    writeln!(out, " _atom_site_occupancy")?;

    for (i, atom) in crystal.atoms.iter().enumerate() {
        let [x, y, z] = atom.position.map(wrap_unit);
        writeln!(
            out,
            "  {}  {}{}  1  {:.8}  {:.8}  {:.8}  1",
            atom.element, atom.element, i, x, y, z
        )?;
    }

    Ok(())
}

/// 分数坐标折回 [0, 1)
fn wrap_unit(x: f64) -> f64 {
    let w = x - x.floor();
    // 舍入到 8 位后等于 1 的值按 0 输出
    if w >= 1.0 - 5e-9 {
        0.0
    } else {
        w
    }
}

fn check_overlaps(crystal: &Crystal, symprec: f64) -> Result<()> {
    if symprec <= 0.0 {
        return Ok(());
    }

    let atoms = &crystal.atoms;
    for i in 0..atoms.len() {
        for j in (i + 1)..atoms.len() {
            let d = crystal
                .lattice
                .periodic_distance(atoms[i].position, atoms[j].position);
            if d < symprec {
                return Err(conversion_error(&format!(
                    "sites {} and {} are {:.4} Å apart (tolerance {} Å)",
                    i, j, d, symprec
                )));
            }
        }
    }
    Ok(())
}

fn conversion_error(reason: &str) -> JarvisCifError {
    JarvisCifError::ConversionError {
        from: "structure".to_string(),
        to: "cif".to_string(),
        reason: reason.to_string(),
    }
}

//! # CIF 文件写入
//!
//! 创建输出目录并按条目标识写出 `<identifier>.cif`。
//! 直接覆盖同名文件，不做临时文件改名。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `regex` 清理文件名

use crate::error::{JarvisCifError, Result};

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// 创建输出目录（含父目录）
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| JarvisCifError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })
}

/// 标识转换为文件名主干；`[A-Za-z0-9._-]` 以外的字符替换为 `_`
pub fn file_stem(identifier: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let re = UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]").unwrap());

    let stem = re.replace_all(identifier, "_").into_owned();
    // 避免 `.` 与 `..`
    if stem.chars().all(|c| c == '.') {
        stem.replace('.', "_")
    } else {
        stem
    }
}

/// CIF 输出路径
pub fn cif_path(dir: &Path, identifier: &str) -> PathBuf {
    dir.join(format!("{}.cif", file_stem(identifier)))
}

/// 写出 CIF 文本，返回写入路径
pub fn write_cif(dir: &Path, identifier: &str, text: &str) -> Result<PathBuf> {
    let path = cif_path(dir, identifier);
    fs::write(&path, text).map_err(|e| JarvisCifError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("JVASP-1002"), "JVASP-1002");
        assert_eq!(file_stem("unknown_id"), "unknown_id");
        assert_eq!(file_stem("../etc/passwd"), ".._etc_passwd");
        assert_eq!(file_stem(".."), "__");
        assert_eq!(file_stem("a b/c"), "a_b_c");
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // 已存在时不报错
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_write_cif_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_cif(tmp.path(), "JVASP-1", "first\n").unwrap();
        assert_eq!(path, tmp.path().join("JVASP-1.cif"));

        write_cif(tmp.path(), "JVASP-1", "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_cif_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = write_cif(&tmp.path().join("absent"), "X", "data_X\n").unwrap_err();
        assert!(matches!(err, JarvisCifError::FileWriteError { .. }));
    }
}

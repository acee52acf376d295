//! # JARVIS figshare 数据集来源
//!
//! 从 figshare 下载 JARVIS 数据集 zip 包并解析其中的 JSON。
//!
//! ## 缓存
//! zip 包缓存在用户缓存目录 (`directories::ProjectDirs`) 中，已存在则直接复用；
//! 缓存损坏时删除并重新下载一次。下载先写入同目录下的临时文件，完成后再改名。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `reqwest`, `zip`, `tempfile`, `directories`
//! - 使用 `utils/progress.rs`

use crate::error::{JarvisCifError, Result};
use crate::utils::progress;

use directories::ProjectDirs;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::fs::{self, File};
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use std::time::Duration;
use zip::ZipArchive;

use super::{DatasetSource, Record};

/// 已登记的数据集
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetInfo {
    pub name: &'static str,
    pub url: &'static str,
    /// zip 包内的 JSON 文件名
    pub json_name: &'static str,
}

static REGISTRY: &[DatasetInfo] = &[
    DatasetInfo {
        name: "dft_3d",
        url: "https://ndownloader.figshare.com/files/38521619",
        json_name: "jdft_3d-12-12-2022.json",
    },
    DatasetInfo {
        name: "dft_3d_2021",
        url: "https://ndownloader.figshare.com/files/26808917",
        json_name: "d3-3-16-2021.json",
    },
];

/// 按名称查找数据集
pub fn dataset_info(name: &str) -> Option<&'static DatasetInfo> {
    REGISTRY.iter().find(|d| d.name == name)
}

/// figshare 数据集来源
pub struct FigshareSource {
    cache_dir: PathBuf,
}

impl FigshareSource {
    /// 使用默认用户缓存目录
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("org", "jarvis", "jarvis-cif").ok_or_else(|| {
            JarvisCifError::Other("Cannot determine user cache directory".to_string())
        })?;
        Ok(Self::with_cache_dir(dirs.cache_dir()))
    }

    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        FigshareSource {
            cache_dir: cache_dir.into(),
        }
    }

    /// 数据集 zip 包的缓存路径
    pub fn archive_path(&self, info: &DatasetInfo) -> PathBuf {
        self.cache_dir.join(format!("{}.zip", info.json_name))
    }

    /// 按登记信息加载：优先读缓存，缓存损坏时重新下载一次
    pub fn load_info(&self, info: &DatasetInfo) -> Result<Vec<Record>> {
        let path = self.archive_path(info);

        if path.exists() {
            match read_archive(&path, info.json_name) {
                Ok(records) => return Ok(records),
                Err(_) => {
                    // 缓存损坏，删除后重新下载
                    let _ = fs::remove_file(&path);
                }
            }
        }

        self.download(info, &path)?;
        read_archive(&path, info.json_name).map_err(|e| JarvisCifError::unavailable(info.name, e))
    }

    fn download(&self, info: &DatasetInfo, dest: &Path) -> Result<()> {
        fs::create_dir_all(&self.cache_dir).map_err(|e| JarvisCifError::FileWriteError {
            path: self.cache_dir.display().to_string(),
            source: e,
        })?;

        let spinner =
            progress::create_spinner(&format!("Downloading {} from figshare", info.name));
        let result = fetch_to(info.url, &self.cache_dir, dest);
        spinner.finish_and_clear();

        result.map_err(|reason| JarvisCifError::unavailable(info.name, reason))
    }
}

impl DatasetSource for FigshareSource {
    fn load(&self, name: &str) -> Result<Vec<Record>> {
        let info = dataset_info(name)
            .ok_or_else(|| JarvisCifError::unavailable(name, "not a registered dataset"))?;
        self.load_info(info)
    }
}

/// 下载到 `dir` 中的临时文件，完成后改名为 `dest`
fn fetch_to(url: &str, dir: &Path, dest: &Path) -> std::result::Result<(), String> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&format!("jarvis-cif/{}", env!("CARGO_PKG_VERSION")))
            .map_err(|e| e.to_string())?,
    );

    // 不设置超时
    let client = Client::builder()
        .default_headers(headers)
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| e.to_string())?;

    let mut response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| e.to_string())?;
    response.copy_to(&mut tmp).map_err(|e| e.to_string())?;
    tmp.persist(dest).map_err(|e| e.error.to_string())?;
    Ok(())
}

fn read_archive(path: &Path, json_name: &str) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| JarvisCifError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    read_records(file, json_name)
}

/// 从 zip 包中读取记录；优先读取 `json_name`，否则读取第一个 `.json` 文件
pub fn read_records<R: Read + Seek>(reader: R, json_name: &str) -> Result<Vec<Record>> {
    let mut archive = ZipArchive::new(reader).map_err(|e| JarvisCifError::DecodeError {
        format: "zip".to_string(),
        reason: e.to_string(),
    })?;

    let member = if archive.index_for_name(json_name).is_some() {
        json_name.to_string()
    } else {
        archive
            .file_names()
            .find(|n| n.ends_with(".json"))
            .map(str::to_string)
            .ok_or_else(|| JarvisCifError::DecodeError {
                format: "zip".to_string(),
                reason: "archive contains no .json file".to_string(),
            })?
    };

    let entry = archive
        .by_name(&member)
        .map_err(|e| JarvisCifError::DecodeError {
            format: "zip".to_string(),
            reason: e.to_string(),
        })?;

    let records: Vec<Record> = serde_json::from_reader(BufReader::new(entry))?;
    Ok(records)
}

//! 回执归档服务 - 业务能力层
//!
//! 扫描回执目录（不递归），把所有符合 `receipt-*.pdf` 命名的文件写入一个 zip。

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::write::FileOptions;
use zip::CompressionMethod;

use crate::error::{AppError, AppResult};
use crate::models::is_receipt_file_name;

/// 归档结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// 归档文件路径
    pub path: PathBuf,
    /// 归档中的条目名（已排序）
    pub entries: Vec<String>,
}

/// 列出目录下所有回执文件名，按名称排序
pub fn list_receipts(receipts_dir: &Path) -> AppResult<Vec<String>> {
    let mut names = Vec::new();
    let entries = fs::read_dir(receipts_dir).map_err(|e| AppError::io(receipts_dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| AppError::io(receipts_dir, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| AppError::io(entry.path(), e))?
            .is_file();
        let name = entry.file_name().to_string_lossy().to_string();
        if is_file && is_receipt_file_name(&name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// 删除目录中遗留的回执文件，返回删除数量
///
/// 目录不存在时视为没有遗留文件。
pub fn remove_stale_receipts(receipts_dir: &Path) -> AppResult<usize> {
    if !receipts_dir.exists() {
        return Ok(0);
    }

    let stale = list_receipts(receipts_dir)?;
    for name in &stale {
        let path = receipts_dir.join(name);
        fs::remove_file(&path).map_err(|e| AppError::io(&path, e))?;
        debug!("已删除遗留回执: {}", path.display());
    }
    Ok(stale.len())
}

/// 将回执目录中的所有回执写入 `archive_path`，已存在的归档会被覆盖
///
/// 条目名就是文件名本身；没有回执时生成一个空 zip。
pub fn archive_receipts(receipts_dir: &Path, archive_path: &Path) -> AppResult<ArchiveReport> {
    info!("🗜️ 正在归档回执: {}", receipts_dir.display());

    let names = list_receipts(receipts_dir)?;
    let zip_error = |source| AppError::Archive {
        path: archive_path.to_path_buf(),
        source,
    };

    let file = File::create(archive_path).map_err(|e| AppError::io(archive_path, e))?;
    let mut zip = zip::ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for name in &names {
        let path = receipts_dir.join(name);
        let mut source = File::open(&path).map_err(|e| AppError::io(&path, e))?;

        zip.start_file(name.as_str(), options).map_err(zip_error)?;
        io::copy(&mut source, &mut zip).map_err(|e| AppError::io(&path, e))?;
        debug!("已加入归档: {}", name);
    }

    let mut file = zip.finish().map_err(zip_error)?;
    file.flush().map_err(|e| AppError::io(archive_path, e))?;

    info!(
        "✓ 归档完成: {} ({} 个回执)",
        archive_path.display(),
        names.len()
    );

    Ok(ArchiveReport {
        path: archive_path.to_path_buf(),
        entries: names,
    })
}

// ==========================================
// 采购明细汇总 - 输入文件定位
// ==========================================
// 输入目录中必须恰好有一个 CSV 文件;
// 0 个或多个均报错, 不做"取第一个"的隐式选择
// ==========================================

use crate::importer::error::{IngestError, IngestResult};
use std::path::{Path, PathBuf};
use tracing::info;

/// 在目录中定位唯一的 CSV 文件
pub fn resolve_input_file(dir: &Path) -> IngestResult<PathBuf> {
    if !dir.is_dir() {
        return Err(IngestError::FileNotFound(dir.display().to_string()));
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false)
        })
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => Err(IngestError::NoInputFile(dir.display().to_string())),
        1 => {
            let path = candidates.remove(0);
            info!(path = %path.display(), "已定位输入文件");
            Ok(path)
        }
        _ => Err(IngestError::AmbiguousInput {
            dir: dir.display().to_string(),
            files: candidates
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .collect(),
        }),
    }
}

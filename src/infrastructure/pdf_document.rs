//! PDF 文档信息读取
//!
//! 使用 lopdf 加载文档并读取页数。文档无法加载或解析时返回致命错误，
//! 由调用方中止整次运行。

use crate::error::{AppError, AppResult};
use std::path::Path;
use tokio::process::Command;

/// 读取 PDF 的总页数
///
/// lopdf 解析是 CPU 密集操作，放在 spawn_blocking 中执行。
pub async fn page_count(pdf_path: &Path) -> AppResult<usize> {
    let path = pdf_path.to_path_buf();
    let display = pdf_path.display().to_string();

    let result = tokio::task::spawn_blocking(move || {
        lopdf::Document::load(&path).map(|doc| doc.get_pages().len())
    })
    .await;

    match result {
        Ok(Ok(count)) => Ok(count),
        Ok(Err(e)) => Err(AppError::page_count(display, e)),
        Err(e) => Err(AppError::page_count(display, e)),
    }
}

/// 检查 pdftoppm 和 tesseract 是否可用
///
/// 只用于启动时的提示和测试跳过，不影响运行流程。
pub async fn is_ocr_toolchain_available() -> bool {
    let pdftoppm = Command::new("pdftoppm")
        .arg("-v")
        .output()
        .await
        .is_ok();

    let tesseract = Command::new("tesseract")
        .arg("--version")
        .output()
        .await
        .is_ok();

    if !pdftoppm {
        tracing::warn!("未找到 pdftoppm，请安装 poppler-utils");
    }
    if !tesseract {
        tracing::warn!("未找到 tesseract，请安装 tesseract-ocr");
    }

    pdftoppm && tesseract
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_page_count_missing_file() {
        let result = page_count(Path::new("does/not/exist.pdf")).await;
        assert!(matches!(result, Err(AppError::PageCount { .. })));
    }
}

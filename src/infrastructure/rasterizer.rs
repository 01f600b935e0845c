//! 页面光栅化 - 基础设施层
//!
//! 只负责"单页转图片"能力，不关心页循环与失败策略

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// 页面光栅化能力接口
///
/// 给定 PDF 和页码，在输出目录产出一张图片并返回其路径。
#[async_trait]
pub trait PageRasterizer: Send + Sync {
    async fn rasterize(&self, pdf_path: &Path, page: usize, image_dir: &Path)
        -> AppResult<PathBuf>;
}

/// 基于 pdftoppm（poppler-utils）的光栅化实现
///
/// 输出文件命名为 `前缀-页码.jpg`，页码补零到三位，
/// 使用 `-singlefile` 保证文件名确定、不受文档总页数影响。
pub struct PdftoppmRasterizer {
    prefix: String,
    dpi: u32,
}

impl PdftoppmRasterizer {
    pub fn new(prefix: impl Into<String>, dpi: u32) -> Self {
        Self {
            prefix: prefix.into(),
            dpi,
        }
    }
}

#[async_trait]
impl PageRasterizer for PdftoppmRasterizer {
    async fn rasterize(
        &self,
        pdf_path: &Path,
        page: usize,
        image_dir: &Path,
    ) -> AppResult<PathBuf> {
        let out_prefix = image_dir.join(format!("{}-{:03}", self.prefix, page));

        debug!("pdftoppm: 第 {} 页 → {}", page, out_prefix.display());

        let output = Command::new("pdftoppm")
            .arg("-jpeg")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-f")
            .arg(page.to_string())
            .arg("-l")
            .arg(page.to_string())
            .arg("-singlefile")
            .arg(pdf_path)
            .arg(&out_prefix)
            .output()
            .await
            .map_err(|e| AppError::rasterize(page, format!("无法启动 pdftoppm: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::rasterize(page, stderr.trim().to_string()));
        }

        let image_path = out_prefix.with_extension("jpg");
        if !image_path.exists() {
            return Err(AppError::rasterize(
                page,
                format!("pdftoppm 未产出图片: {}", image_path.display()),
            ));
        }

        Ok(image_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_naming_is_zero_padded() {
        let rasterizer = PdftoppmRasterizer::new("output_page", 300);
        let out = Path::new("output_images").join(format!("{}-{:03}", rasterizer.prefix, 7));
        assert_eq!(out, Path::new("output_images/output_page-007"));
    }
}

//! 文字识别 - 基础设施层
//!
//! 只负责"单张图片 OCR"能力，不关心页循环与失败策略

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, warn};

/// 文字识别能力接口
///
/// 给定图片路径和语言模式，返回尽力识别出的文本。
/// 对文本的格式、空白与换行不做任何结构保证。
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image_path: &Path, lang_mode: &str) -> AppResult<String>;
}

/// 基于 tesseract CLI 的识别实现
///
/// 语言模式形如 `mal+eng`，即两个语言包在同一次识别中混合使用。
pub struct TesseractRecognizer;

impl TesseractRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image_path: &Path, lang_mode: &str) -> AppResult<String> {
        debug!("tesseract: {} (-l {})", image_path.display(), lang_mode);

        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(lang_mode)
            .output()
            .await
            .map_err(|e| {
                AppError::recognize(
                    image_path.display().to_string(),
                    format!("无法启动 tesseract: {}", e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::recognize(
                image_path.display().to_string(),
                stderr.trim().to_string(),
            ));
        }

        // tesseract 正常退出时 stderr 里也可能有警告，只记日志
        if !output.stderr.is_empty() {
            warn!(
                "tesseract 警告 ({}): {}",
                image_path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

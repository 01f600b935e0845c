//! 原始 OCR 文本写入服务 - 业务能力层
//!
//! 只负责"追加原始 OCR 文本"能力，不关心流程

use crate::error::{AppError, AppResult};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 原始 OCR 文本写入服务
///
/// 职责：
/// - 把整次运行累积的 OCR 文本追加到输出文件
/// - 追加模式：重复运行会累积重复内容，除非外部清空文件
pub struct RawTextWriter {
    output_path: String,
}

impl RawTextWriter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// 追加文本到输出文件
    pub async fn append(&self, text: &str) -> AppResult<()> {
        debug!("追加原始文本: {} 字节 → {}", text.len(), self.output_path);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)
            .map_err(|e| AppError::output_write(&self.output_path, e.to_string()))?;

        file.write_all(text.as_bytes())
            .map_err(|e| AppError::output_write(&self.output_path, e.to_string()))?;

        Ok(())
    }
}

//! 结构化文本写入服务 - 业务能力层
//!
//! 只负责"把标注行序列写成文本文件"能力，不关心流程

use crate::error::{AppError, AppResult};
use tracing::debug;

/// 结构化文本写入服务
///
/// 行序列按换行连接，每次运行覆盖写入。
pub struct StructuredWriter {
    output_path: String,
}

impl StructuredWriter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// 覆盖写入结构化文本文件
    pub async fn write(&self, lines: &[String]) -> AppResult<()> {
        debug!("写入结构化文本: {} 行 → {}", lines.len(), self.output_path);

        tokio::fs::write(&self.output_path, lines.join("\n"))
            .await
            .map_err(|e| AppError::output_write(&self.output_path, e.to_string()))
    }
}

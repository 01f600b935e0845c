use thiserror::Error;

/// 应用程序错误类型
///
/// 错误分级：
/// - `PageCount` - 致命错误，整次运行中止
/// - `Rasterize` / `Recognize` - 单页级错误，记录日志后跳过该页继续
/// - `OutputWrite` - 输出写入错误，记录日志但不中止运行
#[derive(Debug, Error)]
pub enum AppError {
    /// 无法读取 PDF 页数（文档损坏或无法解析）
    #[error("无法读取 PDF 页数 ({path}): {source}")]
    PageCount {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 单页光栅化失败
    #[error("第 {page} 页转换图片失败: {message}")]
    Rasterize { page: usize, message: String },

    /// 单页 OCR 识别失败
    #[error("文字识别失败 ({image}): {message}")]
    Recognize { image: String, message: String },

    /// 输出文件写入失败
    #[error("写入输出文件失败 ({path}): {message}")]
    OutputWrite { path: String, message: String },
}

impl AppError {
    /// 创建页数读取错误
    pub fn page_count(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::PageCount {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 创建光栅化错误
    pub fn rasterize(page: usize, message: impl Into<String>) -> Self {
        AppError::Rasterize {
            page,
            message: message.into(),
        }
    }

    /// 创建识别错误
    pub fn recognize(image: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Recognize {
            image: image.into(),
            message: message.into(),
        }
    }

    /// 创建输出写入错误
    pub fn output_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::OutputWrite {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = std::result::Result<T, AppError>;

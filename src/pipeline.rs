//! 页面处理流水线
//!
//! 按页顺序驱动 光栅化 → 识别 → 累积。严格串行：第 N 页的识别文本
//! 追加进缓冲之后才开始第 N+1 页，追加顺序由构造保证，无需同步。
//!
//! 单页失败（光栅化或识别）记录日志后跳过，不重试、不中止；
//! 最终缓冲里跳过的页与空白页无法区分，调用方不得假设
//! "每个请求页恰好贡献一行文本"。

use crate::infrastructure::{PageRasterizer, TextRecognizer};
use std::path::Path;
use tracing::{error, info};

/// 整次运行的有序 OCR 文本缓冲
///
/// 显式传递的值容器（不是模块级的文件型累加器），
/// 解析器因此保持纯函数、可直接测试。
#[derive(Debug, Default)]
pub struct OcrBuffer {
    text: String,
}

impl OcrBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一页的识别文本，后跟一个换行
    pub fn append_page(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// 页处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    pub processed: usize,
    pub failed: usize,
}

/// 按页范围（含两端）驱动流水线
///
/// # 参数
/// - `rasterizer`: 光栅化能力
/// - `recognizer`: 识别能力
/// - `pdf_path`: 源文档
/// - `image_dir`: 页面图片输出目录
/// - `lang_mode`: 混合语言识别模式
/// - `start_page` / `end_page`: 页范围（1 起，含两端）
/// - `buffer`: 有序文本缓冲
///
/// # 返回
/// 返回处理/失败页数统计；单页失败不会向上抛出。
pub async fn run_pages(
    rasterizer: &impl PageRasterizer,
    recognizer: &impl TextRecognizer,
    pdf_path: &Path,
    image_dir: &Path,
    lang_mode: &str,
    start_page: usize,
    end_page: usize,
    buffer: &mut OcrBuffer,
) -> PageStats {
    let mut stats = PageStats::default();
    let total = end_page - start_page + 1;

    for page in start_page..=end_page {
        log_page_start(page, start_page, total);

        match process_page(rasterizer, recognizer, pdf_path, image_dir, lang_mode, page).await {
            Ok(text) => {
                buffer.append_page(&text);
                stats.processed += 1;
                info!("✓ 第 {} 页识别完成，{} 字符", page, text.chars().count());
            }
            Err(e) => {
                // 单页失败：记录并继续，该页对缓冲无贡献
                error!("❌ 第 {} 页处理失败: {}", page, e);
                stats.failed += 1;
            }
        }
    }

    stats
}

/// 处理单页：光栅化后识别
async fn process_page(
    rasterizer: &impl PageRasterizer,
    recognizer: &impl TextRecognizer,
    pdf_path: &Path,
    image_dir: &Path,
    lang_mode: &str,
    page: usize,
) -> crate::error::AppResult<String> {
    let image_path = rasterizer.rasterize(pdf_path, page, image_dir).await?;
    info!("✓ 第 {} 页已转换为图片", page);

    recognizer.recognize(&image_path, lang_mode).await
}

// ========== 日志辅助函数 ==========

fn log_page_start(page: usize, start_page: usize, total: usize) {
    info!("{}", "─".repeat(30));
    info!("📄 处理第 {}/{} 页 (页码 {})", page - start_page + 1, total, page);
}

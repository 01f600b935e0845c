//! 基础设施层（Infrastructure Layer）
//!
//! 封装三个外部协作工具，对上层只暴露能力接口：
//! - `pdf_document` - lopdf 读取页数（失败为致命错误）
//! - `rasterizer` - pdftoppm 单页转图片
//! - `recognizer` - tesseract 混合语言 OCR
//!
//! 光栅化与识别都是按接口调用的黑盒：给定文档和页码返回图片，
//! 给定图片返回文本。其内部正确性与性能不属于本系统的设计范围。

pub mod pdf_document;
pub mod rasterizer;
pub mod recognizer;

pub use pdf_document::{is_ocr_toolchain_available, page_count};
pub use rasterizer::{PageRasterizer, PdftoppmRasterizer};
pub use recognizer::{TesseractRecognizer, TextRecognizer};

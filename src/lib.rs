//! # PDF Question Extract
//!
//! 一个将扫描版试卷 PDF 转换为结构化题目数据的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 封装外部协作工具，只暴露能力
//! - `page_count` - lopdf 读取 PDF 页数
//! - `PageRasterizer` - pdftoppm 单页转图片能力
//! - `TextRecognizer` - tesseract 混合语言 OCR 能力
//!
//! ### ② 核心解析层（Parser）
//! - `parser/` - 整个系统唯一有真正逻辑的部分
//! - `LineClassifier` - 按优先级对 OCR 行分类（题号 → 选项 → 小点 → 续行）
//! - `QuestionStructurer` - 变体 A：以选项 D 填充为完成信号产出题目记录
//! - `QuestionAnnotator` - 变体 B：以下一题开始或输入结束为封口信号产出标注文本
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能写什么"，只处理输出产物
//! - `SqlWriter` - 写 SQL INSERT 脚本能力（每次运行覆盖）
//! - `StructuredWriter` - 写结构化文本能力（每次运行覆盖）
//! - `RawTextWriter` - 追加原始 OCR 文本能力（跨运行累积）
//!
//! ### ④ 编排层（Orchestration）
//! - `pipeline` - 按页顺序驱动 光栅化 → 识别 → 累积，单页失败不中断
//! - `app` - 应用生命周期（初始化、运行、统计）
//!
//! ## 数据流
//!
//! ```text
//! PDF → pipeline (逐页 rasterize + recognize) → OcrBuffer
//!     → parser (逐行状态机) → Vec<QuestionRecord> / 标注行
//!     → services (SQL / 结构化文本 / 原始文本)
//! ```
//!
//! 数据严格单向流动，后级输出不会被前级重读或修改。

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::{Config, OutputMode};
pub use error::{AppError, AppResult};
pub use infrastructure::{PageRasterizer, PdftoppmRasterizer, TesseractRecognizer, TextRecognizer};
pub use models::{OptionLabel, Options, QuestionRecord, SubPoint};
pub use parser::{ParseStats, QuestionAnnotator, QuestionStructurer, RepeatQuestionPolicy};
pub use pipeline::{OcrBuffer, PageStats};

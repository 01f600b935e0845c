//! 应用编排层
//!
//! 管理整次运行的生命周期：初始化 → 页流水线 → 解析 → 产物输出 → 统计。

use crate::config::{Config, OutputMode};
use crate::infrastructure::{self, PdftoppmRasterizer, TesseractRecognizer};
use crate::parser::{ParseStats, QuestionAnnotator, QuestionStructurer};
use crate::pipeline::{self, OcrBuffer, PageStats};
use crate::services::{RawTextWriter, SqlWriter, StructuredWriter};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    rasterizer: PdftoppmRasterizer,
    recognizer: TesseractRecognizer,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        // 确保图片输出目录存在
        tokio::fs::create_dir_all(&config.image_dir)
            .await
            .with_context(|| format!("无法创建图片输出目录: {}", config.image_dir))?;

        // 工具链检查只做提示，不中止
        if !infrastructure::is_ocr_toolchain_available().await {
            warn!("⚠️ OCR 工具链不完整，页面处理可能全部失败");
        }

        let rasterizer = PdftoppmRasterizer::new(config.image_prefix.clone(), config.dpi);
        let recognizer = TesseractRecognizer::new();

        Ok(Self {
            config,
            rasterizer,
            recognizer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let pdf_path = Path::new(&self.config.pdf_path);

        // 页数读取失败是致命错误，整次运行中止
        let total_pages = infrastructure::page_count(pdf_path)
            .await
            .context("无法获取 PDF 页数")?;
        info!("✓ PDF 共 {} 页", total_pages);

        let start_page = self.config.start_page.max(1);
        let end_page = self.config.end_page.unwrap_or(total_pages).min(total_pages);

        if start_page > end_page {
            warn!("⚠️ 页范围为空 ({}-{})，程序结束", start_page, end_page);
            return Ok(());
        }

        // 逐页光栅化 + 识别，累积进有序缓冲
        let mut buffer = OcrBuffer::new();
        let page_stats = pipeline::run_pages(
            &self.rasterizer,
            &self.recognizer,
            pdf_path,
            Path::new(&self.config.image_dir),
            &self.config.lang_mode,
            start_page,
            end_page,
            &mut buffer,
        )
        .await;

        if buffer.is_empty() {
            warn!("⚠️ OCR 缓冲为空，请求的页可能全部失败");
        }

        // 原始文本追加：写入失败记录日志但不中止
        let raw_writer = RawTextWriter::new(self.config.text_output_file.clone());
        if let Err(e) = raw_writer.append(buffer.as_str()).await {
            error!("❌ 原始文本追加失败: {}", e);
        }

        // 解析 + 产物输出
        let parse_stats = self.emit_artifacts(&buffer).await;

        log_final_stats(&self.config, &page_stats, &parse_stats);

        Ok(())
    }

    /// 按输出模式解析缓冲并写产物
    ///
    /// 产物写入失败记录日志但不中止（错误被报告，不再抛出）。
    async fn emit_artifacts(&self, buffer: &OcrBuffer) -> ParseStats {
        match self.config.output_mode {
            OutputMode::Sql => {
                let parser = QuestionStructurer::new(self.config.repeat_question_policy);
                let (records, stats) = parser.parse_records(buffer.as_str());
                info!("✓ 解析完成，产出 {} 条题目记录", records.len());
                if let Some(first) = records.first() {
                    info!(
                        "题干预览: {}",
                        crate::utils::logging::truncate_text(&first.stem, 80)
                    );
                }

                let writer = SqlWriter::new(self.config.sql_output_file.clone());
                match writer.write(&records).await {
                    Ok(()) => info!("✓ SQL 脚本已写入: {}", self.config.sql_output_file),
                    Err(e) => error!("❌ SQL 脚本写入失败: {}", e),
                }
                stats
            }
            OutputMode::Structured => {
                let parser = QuestionAnnotator::new();
                let (lines, stats) = parser.annotate(buffer.as_str());
                info!("✓ 解析完成，产出 {} 行标注文本", lines.len());

                let writer = StructuredWriter::new(self.config.structured_output_file.clone());
                match writer.write(&lines).await {
                    Ok(()) => info!("✓ 结构化文本已写入: {}", self.config.structured_output_file),
                    Err(e) => error!("❌ 结构化文本写入失败: {}", e),
                }
                stats
            }
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷扫描件 OCR 提取模式");
    info!("📄 源文档: {}", config.pdf_path);
    info!("🔤 识别语言: {}", config.lang_mode);
    info!(
        "开始时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

fn log_final_stats(config: &Config, page_stats: &PageStats, parse_stats: &ParseStats) {
    info!("{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功页数: {}", page_stats.processed);
    info!("❌ 失败页数: {}", page_stats.failed);
    info!("📝 产出记录: {}", parse_stats.emitted_records);
    if parse_stats.dropped_lines > 0 {
        warn!(
            "⚠️ 有 {} 行无法归类被丢弃，OCR 质量可能退化",
            parse_stats.dropped_lines
        );
    }
    if parse_stats.discarded_records > 0 {
        warn!("⚠️ 有 {} 条未完成记录被策略丢弃", parse_stats.discarded_records);
    }
    info!("原始文本已累积至: {}", config.text_output_file);
    info!("{}", "=".repeat(60));
}

use crate::parser::RepeatQuestionPolicy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 输出产物模式（每次运行二选一）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// SQL INSERT 脚本
    Sql,
    /// 结构化文本（Question: / i. / Option X) / ---）
    Structured,
}

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 扫描版试卷 PDF 路径
    pub pdf_path: String,
    /// 光栅化页面图片的输出目录（不存在时自动创建）
    pub image_dir: String,
    /// 页面图片文件名前缀
    pub image_prefix: String,
    /// 原始 OCR 文本输出文件（跨运行追加）
    pub text_output_file: String,
    /// SQL 脚本输出文件（每次运行覆盖）
    pub sql_output_file: String,
    /// 结构化文本输出文件（每次运行覆盖）
    pub structured_output_file: String,
    /// 起始页（1 起，含）
    pub start_page: usize,
    /// 结束页（含），不设置时处理到文档最后一页
    pub end_page: Option<usize>,
    /// Tesseract 语言模式（两个语言包同时识别）
    pub lang_mode: String,
    /// 光栅化分辨率
    pub dpi: u32,
    /// 输出模式
    pub output_mode: OutputMode,
    /// 题目已打开时再次遇到题号行的处理策略
    pub repeat_question_policy: RepeatQuestionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pdf_path: "file/test-file.pdf".to_string(),
            image_dir: "output_images".to_string(),
            image_prefix: "output_page".to_string(),
            text_output_file: "extracted_text.txt".to_string(),
            sql_output_file: "questions.sql".to_string(),
            structured_output_file: "questions.txt".to_string(),
            start_page: 1,
            end_page: None,
            lang_mode: "mal+eng".to_string(),
            dpi: 300,
            output_mode: OutputMode::Sql,
            repeat_question_policy: RepeatQuestionPolicy::StartNewRecord,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            pdf_path: std::env::var("PDF_PATH").unwrap_or(default.pdf_path),
            image_dir: std::env::var("IMAGE_DIR").unwrap_or(default.image_dir),
            image_prefix: std::env::var("IMAGE_PREFIX").unwrap_or(default.image_prefix),
            text_output_file: std::env::var("TEXT_OUTPUT_FILE").unwrap_or(default.text_output_file),
            sql_output_file: std::env::var("SQL_OUTPUT_FILE").unwrap_or(default.sql_output_file),
            structured_output_file: std::env::var("STRUCTURED_OUTPUT_FILE").unwrap_or(default.structured_output_file),
            start_page: std::env::var("START_PAGE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.start_page),
            end_page: std::env::var("END_PAGE").ok().and_then(|v| v.parse().ok()),
            lang_mode: std::env::var("LANG_MODE").unwrap_or(default.lang_mode),
            dpi: std::env::var("DPI").ok().and_then(|v| v.parse().ok()).unwrap_or(default.dpi),
            output_mode: match std::env::var("OUTPUT_MODE").as_deref() {
                Ok("structured") => OutputMode::Structured,
                Ok("sql") => OutputMode::Sql,
                _ => default.output_mode,
            },
            repeat_question_policy: match std::env::var("REPEAT_QUESTION_POLICY").as_deref() {
                Ok("append_to_stem") => RepeatQuestionPolicy::AppendToStem,
                Ok("start_new_record") => RepeatQuestionPolicy::StartNewRecord,
                _ => default.repeat_question_policy,
            },
        }
    }

    /// 从 TOML 文件加载配置，未出现的字段使用默认值
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.start_page, 1);
        assert_eq!(config.end_page, None);
        assert_eq!(config.lang_mode, "mal+eng");
        assert_eq!(config.output_mode, OutputMode::Sql);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            pdf_path = "papers/2024.pdf"
            output_mode = "structured"
            start_page = 3
            end_page = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.pdf_path, "papers/2024.pdf");
        assert_eq!(config.output_mode, OutputMode::Structured);
        assert_eq!(config.start_page, 3);
        assert_eq!(config.end_page, Some(7));
        // 未出现的字段回落到默认值
        assert_eq!(config.dpi, 300);
        assert_eq!(config.image_prefix, "output_page");
    }
}

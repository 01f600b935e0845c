//! SQL 脚本写入服务 - 业务能力层
//!
//! 只负责"把记录序列写成 SQL INSERT 脚本"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::{OptionLabel, QuestionRecord};
use tracing::debug;

/// SQL 脚本写入服务
///
/// 职责：
/// - 每条记录一条 INSERT 语句，四个选项列恒定存在（缺失渲染为空串）
/// - 文本字段内的单引号按双写转义
/// - 语句按换行连接，每次运行覆盖写入输出文件
pub struct SqlWriter {
    output_path: String,
}

impl SqlWriter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// 渲染单条 INSERT 语句
    pub fn render_statement(record: &QuestionRecord) -> String {
        format!(
            "INSERT INTO Question (QuestionText, OptionA, OptionB, OptionC, OptionD) VALUES ('{}', '{}', '{}', '{}', '{}');",
            escape_sql(&record.stem),
            escape_sql(record.options.text_or_empty(OptionLabel::A)),
            escape_sql(record.options.text_or_empty(OptionLabel::B)),
            escape_sql(record.options.text_or_empty(OptionLabel::C)),
            escape_sql(record.options.text_or_empty(OptionLabel::D)),
        )
    }

    /// 渲染整个脚本（语句换行连接）
    pub fn render_script(records: &[QuestionRecord]) -> String {
        records
            .iter()
            .map(Self::render_statement)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 覆盖写入 SQL 脚本文件
    pub async fn write(&self, records: &[QuestionRecord]) -> AppResult<()> {
        debug!("写入 SQL 脚本: {} 条语句 → {}", records.len(), self.output_path);

        tokio::fs::write(&self.output_path, Self::render_script(records))
            .await
            .map_err(|e| AppError::output_write(&self.output_path, e.to_string()))
    }
}

/// 单引号双写转义
fn escape_sql(text: &str) -> String {
    text.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Options;

    #[test]
    fn test_france_round_trip_statement() {
        let mut options = Options::default();
        options.set(OptionLabel::A, "Berlin");
        options.set(OptionLabel::B, "Madrid");
        options.set(OptionLabel::C, "Paris");
        options.set(OptionLabel::D, "Rome");

        let record = QuestionRecord {
            stem: "What is the capital of France?".to_string(),
            sub_points: Vec::new(),
            options,
        };

        assert_eq!(
            SqlWriter::render_statement(&record),
            "INSERT INTO Question (QuestionText, OptionA, OptionB, OptionC, OptionD) \
             VALUES ('What is the capital of France?', 'Berlin', 'Madrid', 'Paris', 'Rome');"
        );
    }

    #[test]
    fn test_single_quotes_are_doubled() {
        let mut options = Options::default();
        options.set(OptionLabel::A, "it's");
        let record = QuestionRecord {
            stem: "What's the answer?".to_string(),
            sub_points: Vec::new(),
            options,
        };

        let statement = SqlWriter::render_statement(&record);
        assert!(statement.contains("'What''s the answer?'"));
        assert!(statement.contains("'it''s'"));
    }

    #[test]
    fn test_missing_options_render_as_empty_strings() {
        let record = QuestionRecord::new("Bare question");
        let statement = SqlWriter::render_statement(&record);
        assert!(statement.ends_with("VALUES ('Bare question', '', '', '', '');"));
    }

    #[test]
    fn test_statements_are_newline_joined() {
        let records = vec![
            QuestionRecord::new("First"),
            QuestionRecord::new("Second"),
        ];
        let script = SqlWriter::render_script(&records);
        assert_eq!(script.lines().count(), 2);
        assert!(!script.ends_with('\n'));
    }
}

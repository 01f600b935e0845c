//! 标注文本解析 - 变体 B
//!
//! 产出保留小点的扁平标注行序列（`Question: …` / `i. …` / `Option X) …`），
//! 记录在下一个题号行出现或输入结束时以 `---` 分隔符封口。
//! 与变体 A 不同，没有选项的记录也照常产出。

use crate::parser::lexicon;
use crate::parser::line::{LineClass, LineClassifier};
use crate::parser::{ParseStats, ParserState};

/// 记录之间的分隔符
const RECORD_SEPARATOR: &str = "---";

/// 变体 B 解析器
pub struct QuestionAnnotator {
    classifier: LineClassifier,
}

impl QuestionAnnotator {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// 解析整段 OCR 文本为标注行序列
    ///
    /// 输入结束时若仍有打开的记录，补一个封口分隔符；
    /// 最后一行已触发封口时不会重复追加。
    pub fn annotate(&self, text: &str) -> (Vec<String>, ParseStats) {
        let mut lines: Vec<String> = Vec::new();
        let mut stats = ParseStats::default();
        let mut state = ParserState::AwaitingQuestion;

        for raw_line in text.lines() {
            let trimmed = raw_line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match self.classifier.classify(trimmed) {
                LineClass::QuestionStart { text } => {
                    // 新题开始先封口上一条记录
                    if state != ParserState::AwaitingQuestion {
                        lines.push(RECORD_SEPARATOR.to_string());
                        stats.emitted_records += 1;
                    }
                    lines.push(format!("Question: {}", text));
                    state = ParserState::CollectingStem;
                }

                LineClass::Options(options) => {
                    if state == ParserState::AwaitingQuestion {
                        stats.dropped_lines += 1;
                        continue;
                    }
                    for option in options {
                        lines.push(format!("Option {}) {}", option.label, option.text));
                    }
                    state = ParserState::CollectingOptions;
                }

                LineClass::SubPoint { label, text }
                    if state == ParserState::CollectingStem
                        || state == ParserState::CollectingSubPoints =>
                {
                    lines.push(format!("{}. {}", label, text));
                    state = ParserState::CollectingSubPoints;
                }

                // 续行追加到最近产出的片段；没有打开记录时丢弃并计数
                LineClass::SubPoint { .. } | LineClass::Other => {
                    if state == ParserState::AwaitingQuestion {
                        stats.dropped_lines += 1;
                        continue;
                    }
                    let chunk = if state == ParserState::CollectingOptions {
                        lexicon::fix_option_text(trimmed)
                    } else {
                        trimmed.to_string()
                    };
                    if let Some(last) = lines.last_mut() {
                        last.push(' ');
                        last.push_str(&chunk);
                    }
                }
            }
        }

        // 输入结束时封口仍打开的记录
        if state != ParserState::AwaitingQuestion {
            lines.push(RECORD_SEPARATOR.to_string());
            stats.emitted_records += 1;
        }

        (lines, stats)
    }
}

impl Default for QuestionAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

//! 行分类器
//!
//! 对单行 OCR 文本做优先级分类，先匹配者胜：
//! 题号行 → 选项行 → 小点行 → 其他（续行/噪声由状态机决定去向）。
//!
//! 分类器本身无状态；小点行是否生效（只在选项出现前）由状态机把关，
//! 不生效时该行回落为续行处理。

use crate::models::OptionLabel;
use crate::parser::lexicon;
use regex::Regex;

/// 从选项行里提取出的单个选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    pub label: OptionLabel,
    /// 已应用字形替换的选项文本
    pub text: String,
}

/// 单行的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// 题号行："数字. 文本"，捕获文本已剥掉题号前缀和游离的 "数字) " 前缀
    QuestionStart { text: String },
    /// 选项行，同一行里挤在一起的多个选项各自独立提取
    Options(Vec<ParsedOption>),
    /// 小点行：罗马数字 "i." 式，或已映射的 "1)" 数字式
    SubPoint { label: String, text: String },
    /// 其余所有行
    Other,
}

/// 行分类器（正则在构造时编译一次）
pub struct LineClassifier {
    question_re: Regex,
    stray_prefix_re: Regex,
    option_line_re: Regex,
    option_head_re: Regex,
    roman_re: Regex,
    numbered_re: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            question_re: Regex::new(r"^(\d+)\.\s+(.*)$").expect("题号行正则无效"),
            stray_prefix_re: Regex::new(r"^\d+\)\s*").expect("游离前缀正则无效"),
            option_line_re: Regex::new(r"^[A-D©8]\)\s+\S").expect("选项行正则无效"),
            option_head_re: Regex::new(r"([A-D©8])\)\s+").expect("选项头正则无效"),
            roman_re: Regex::new(r"(?i)^(i{1,3}|iv|v)\.\s*(.*)$").expect("罗马小点正则无效"),
            numbered_re: Regex::new(r"^(\d+)\)\s*(.*)$").expect("数字小点正则无效"),
        }
    }

    /// 按优先级分类一行
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();

        // a. 题号行
        if let Some(caps) = self.question_re.captures(trimmed) {
            let captured = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let text = self
                .stray_prefix_re
                .replace(captured, "")
                .trim()
                .to_string();
            return LineClass::QuestionStart { text };
        }

        // b. 选项行（行首就是选项标签时才按选项行处理）
        if self.option_line_re.is_match(trimmed) {
            let options = self.extract_options(trimmed);
            if !options.is_empty() {
                return LineClass::Options(options);
            }
        }

        // c. 小点行：罗马数字式
        if let Some(caps) = self.roman_re.captures(trimmed) {
            return LineClass::SubPoint {
                label: caps[1].to_lowercase(),
                text: caps[2].trim().to_string(),
            };
        }

        // c. 小点行：数字式，按位置映射到罗马数字
        if let Some(caps) = self.numbered_re.captures(trimmed) {
            return LineClass::SubPoint {
                label: lexicon::roman_for_digit(&caps[1]),
                text: caps[2].trim().to_string(),
            };
        }

        LineClass::Other
    }

    /// 对整行做全局匹配，独立提取每个选项
    ///
    /// OCR 有时把多个选项挤进同一行。每个匹配的前两个字符先查伪影表
    /// 修正标签，再提取；选项文本取到下一个选项头（或行尾）为止。
    fn extract_options(&self, line: &str) -> Vec<ParsedOption> {
        // 先收集所有选项头的位置与修正后的标签
        let mut heads: Vec<(usize, usize, OptionLabel)> = Vec::new();
        for caps in self.option_head_re.captures_iter(line) {
            let (Some(whole), Some(raw_label)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let prefix = format!("{})", raw_label.as_str());
            let label = lexicon::correct_option_label(&prefix)
                .and_then(OptionLabel::from_char);

            if let Some(label) = label {
                heads.push((whole.start(), whole.end(), label));
            }
        }

        // 再按选项头切出各自的文本
        let mut options = Vec::with_capacity(heads.len());
        for (i, &(_, text_start, label)) in heads.iter().enumerate() {
            let text_end = heads.get(i + 1).map(|h| h.0).unwrap_or(line.len());
            let text = line[text_start..text_end].trim();
            options.push(ParsedOption {
                label,
                text: lexicon::fix_option_text(text),
            });
        }
        options
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

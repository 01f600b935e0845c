//! 结构化解析 - 变体 A
//!
//! 以"选项 D 被填充"作为记录完成的唯一信号：D 填充的瞬间产出
//! (题干, 选项) 并把状态完全复位，即使后面还有逻辑上属于本题的行，
//! 也不会再挂到这条记录上。缺 D 的记录永远不会产出。

use crate::models::{OptionLabel, QuestionRecord, SubPoint};
use crate::parser::lexicon;
use crate::parser::line::{LineClass, LineClassifier};
use crate::parser::{ParseStats, ParserState, RepeatQuestionPolicy};

/// 变体 A 解析器
///
/// 职责：
/// - 消费整段 OCR 文本，按行驱动状态机
/// - 产出完成的 QuestionRecord 序列（输入顺序）
/// - 统计丢弃行数与被策略丢弃的未完成记录
pub struct QuestionStructurer {
    classifier: LineClassifier,
    policy: RepeatQuestionPolicy,
}

impl QuestionStructurer {
    pub fn new(policy: RepeatQuestionPolicy) -> Self {
        Self {
            classifier: LineClassifier::new(),
            policy,
        }
    }

    /// 解析整段 OCR 文本为题目记录序列
    ///
    /// 每条产出记录对应输入行的一个连续区间，区间互不重叠、按输入顺序。
    pub fn parse_records(&self, text: &str) -> (Vec<QuestionRecord>, ParseStats) {
        let mut records = Vec::new();
        let mut stats = ParseStats::default();

        let mut state = ParserState::AwaitingQuestion;
        let mut current: Option<QuestionRecord> = None;
        let mut last_option: Option<OptionLabel> = None;

        for raw_line in text.lines() {
            let trimmed = raw_line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match self.classifier.classify(trimmed) {
                LineClass::QuestionStart { text } => {
                    // 旧行为：已打开记录时题号行按题干续行处理
                    if self.policy == RepeatQuestionPolicy::AppendToStem {
                        if let Some(record) = current.as_mut() {
                            record.append_stem(&text);
                            continue;
                        }
                    }
                    // 重设计行为：丢弃未完成记录，开启新记录
                    if current.is_some() {
                        stats.discarded_records += 1;
                    }
                    current = Some(QuestionRecord::new(text));
                    last_option = None;
                    state = ParserState::CollectingStem;
                }

                LineClass::Options(options) => {
                    let Some(record) = current.as_mut() else {
                        stats.dropped_lines += 1;
                        continue;
                    };

                    // 首个选项出现后记录对小点封闭，题干收集结束
                    state = ParserState::CollectingOptions;

                    let mut completed = false;
                    for option in options {
                        record.options.set(option.label, option.text);
                        last_option = Some(option.label);
                        if record.is_complete() {
                            completed = true;
                            break;
                        }
                    }

                    // D 填充的瞬间产出并复位，后续行不再挂到本记录
                    if completed {
                        if let Some(record) = current.take() {
                            records.push(record);
                            stats.emitted_records += 1;
                        }
                        state = ParserState::AwaitingQuestion;
                        last_option = None;
                    }
                }

                // 小点只在记录打开且任何选项出现之前生效
                LineClass::SubPoint { label, text }
                    if state != ParserState::CollectingOptions =>
                {
                    let Some(record) = current.as_mut() else {
                        stats.dropped_lines += 1;
                        continue;
                    };
                    record.sub_points.push(SubPoint { label, text });
                    state = ParserState::CollectingSubPoints;
                }

                // 其余行按续行处理；没有打开记录时丢弃并计数
                LineClass::SubPoint { .. } | LineClass::Other => {
                    match (current.as_mut(), state) {
                        (Some(record), ParserState::CollectingStem) => {
                            record.append_stem(trimmed);
                        }
                        (Some(record), ParserState::CollectingSubPoints) => {
                            if let Some(sub_point) = record.sub_points.last_mut() {
                                if !sub_point.text.is_empty() {
                                    sub_point.text.push(' ');
                                }
                                sub_point.text.push_str(trimmed);
                            }
                        }
                        (Some(record), ParserState::CollectingOptions) => {
                            // 续行挂到最近写入的选项上，同样应用字形替换
                            if let Some(label) = last_option {
                                record
                                    .options
                                    .append(label, &lexicon::fix_option_text(trimmed));
                            }
                        }
                        _ => {
                            stats.dropped_lines += 1;
                        }
                    }
                }
            }
        }

        (records, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (Vec<QuestionRecord>, ParseStats) {
        QuestionStructurer::new(RepeatQuestionPolicy::StartNewRecord).parse_records(text)
    }

    #[test]
    fn test_single_question_four_options() {
        let (records, stats) = parse(
            "1. What is the capital of France?\n\
             A) Berlin\n\
             B) Madrid\n\
             C) Paris\n\
             D) Rome\n",
        );

        assert_eq!(records.len(), 1);
        assert_eq!(stats.emitted_records, 1);

        let record = &records[0];
        assert_eq!(record.stem, "What is the capital of France?");
        assert_eq!(record.options.get(OptionLabel::A), Some("Berlin"));
        assert_eq!(record.options.get(OptionLabel::B), Some("Madrid"));
        assert_eq!(record.options.get(OptionLabel::C), Some("Paris"));
        assert_eq!(record.options.get(OptionLabel::D), Some("Rome"));
    }

    #[test]
    fn test_multiple_questions_in_input_order() {
        let (records, _) = parse(
            "1. First question?\n\
             A) a1\nB) b1\nC) c1\nD) d1\n\
             2. Second question?\n\
             A) a2\nB) b2\nC) c2\nD) d2\n\
             3. Third question?\n\
             A) a3\nB) b3\nC) c3\nD) d3\n",
        );

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].stem, "First question?");
        assert_eq!(records[1].stem, "Second question?");
        assert_eq!(records[2].stem, "Third question?");
    }

    #[test]
    fn test_record_missing_d_is_never_emitted() {
        let (records, _) = parse(
            "1. Incomplete question?\n\
             A) only\nB) three\nC) options\n",
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_reordered_options_complete_on_d() {
        let (records, _) = parse(
            "1. Reordered?\n\
             B) second\nA) first\nC) third\nD) fourth\n",
        );
        assert_eq!(records.len(), 1);
        assert!(records[0].is_complete());
        assert_eq!(records[0].options.get(OptionLabel::A), Some("first"));
    }

    #[test]
    fn test_lines_after_completion_are_dropped() {
        let (records, stats) = parse(
            "1. Done early?\n\
             A) a\nB) b\nC) c\nD) d\n\
             trailing noise that belongs to nothing\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].options.get(OptionLabel::D), Some("d"));
        assert_eq!(stats.dropped_lines, 1);
    }

    #[test]
    fn test_stem_continuation_is_space_joined() {
        let (records, _) = parse(
            "1. A question that wraps\n\
             across two OCR lines?\n\
             A) a\nB) b\nC) c\nD) d\n",
        );
        assert_eq!(
            records[0].stem,
            "A question that wraps across two OCR lines?"
        );
    }

    #[test]
    fn test_sub_points_collected_before_options() {
        let (records, _) = parse(
            "1. Which statements hold?\n\
             i. First statement\n\
             ii. Second statement\n\
             A) i only\nB) ii only\nC) both\nD) neither\n",
        );
        let record = &records[0];
        assert_eq!(record.sub_points.len(), 2);
        assert_eq!(record.sub_points[0].label, "i");
        assert_eq!(record.sub_points[1].label, "ii");
    }

    #[test]
    fn test_numbered_sub_points_map_to_roman() {
        let (records, _) = parse(
            "1. Which statements hold?\n\
             1) First statement\n\
             2) Second statement\n\
             A) a\nB) b\nC) c\nD) d\n",
        );
        let record = &records[0];
        assert_eq!(record.sub_points[0].label, "i");
        assert_eq!(record.sub_points[1].label, "ii");
    }

    #[test]
    fn test_sub_point_after_option_falls_through_to_continuation() {
        // 选项出现后小点行不再生效，回落为最近选项的续行
        let (records, _) = parse(
            "1. Question?\n\
             A) first part\n\
             ii. not a sub point\n\
             B) b\nC) c\nD) d\n",
        );
        let record = &records[0];
        assert!(record.sub_points.is_empty());
        assert_eq!(
            record.options.get(OptionLabel::A),
            Some("first part ii. not a sub point")
        );
    }

    #[test]
    fn test_option_artifacts_parse_like_clean_labels() {
        let (records, _) = parse(
            "1. Artifact question?\n\
             A) Athens\n\
             8) London\n\
             ©) Paris\n\
             D) Rome\n",
        );
        let record = &records[0];
        assert_eq!(record.options.get(OptionLabel::B), Some("London"));
        assert_eq!(record.options.get(OptionLabel::C), Some("Paris"));
    }

    #[test]
    fn test_run_together_options_on_one_line() {
        let (records, _) = parse("1. Compact?\nA) Berlin B) Madrid C) Paris D) Rome\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].options.get(OptionLabel::B), Some("Madrid"));
        assert_eq!(records[0].options.get(OptionLabel::D), Some("Rome"));
    }

    #[test]
    fn test_noise_before_first_question_is_counted_dropped() {
        let (records, stats) = parse(
            "scanner header noise\n\
             A) stray option with no record\n\
             1. Real question?\n\
             A) a\nB) b\nC) c\nD) d\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(stats.dropped_lines, 2);
    }

    #[test]
    fn test_policy_start_new_record_discards_open_record() {
        let (records, stats) = parse(
            "1. Abandoned question\n\
             A) a\nB) b\n\
             2. Complete question?\n\
             A) a\nB) b\nC) c\nD) d\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stem, "Complete question?");
        assert_eq!(stats.discarded_records, 1);
    }

    #[test]
    fn test_policy_append_to_stem_keeps_legacy_quirk() {
        let parser = QuestionStructurer::new(RepeatQuestionPolicy::AppendToStem);
        let (records, stats) = parser.parse_records(
            "1. A question split\n\
             2. by a false question start\n\
             A) a\nB) b\nC) c\nD) d\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(stats.discarded_records, 0);
        assert_eq!(
            records[0].stem,
            "A question split by a false question start"
        );
    }

    #[test]
    fn test_glyph_fix_scoped_to_option_text() {
        let (records, _) = parse(
            "1. The word go stays in the stem\n\
             A) ago go\nB) b\nC) c\nD) d\n",
        );
        let record = &records[0];
        // 题干不做字形替换
        assert_eq!(record.stem, "The word go stays in the stem");
        // 选项文本按字面子串替换，包括词内出现
        assert_eq!(record.options.get(OptionLabel::A), Some("aഉം ഉം"));
    }
}

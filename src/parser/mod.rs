//! 核心解析层（Parser Layer）
//!
//! 把整段 OCR 文本按行消费，产出规整的题目序列。OCR 输入是"对抗性"的：
//! 噪声、断行、空白不一致、字符误识（圈选 C 被识别成 ©、B 被识别成 8），
//! 本层的全部职责就是把这些启发式恢复规则编码正确、保持一致。
//!
//! ## 模块划分
//!
//! ### `lexicon` - 误识修正查找表
//! - 选项标签伪影表（© → C、8 → B）
//! - 数字小点 → 罗马数字映射表
//! - 选项文本定向字形替换（"go" → "ഉം"）
//!
//! ### `line` - 行分类器
//! - 按优先级分类：题号行 → 选项行 → 小点行 → 续行
//! - 先匹配者胜，分类顺序即状态机的转移优先级
//!
//! ### `structurer` - 变体 A
//! - 选项 D 填充的瞬间产出记录并完全复位
//! - 缺 D 的记录永远不会产出
//!
//! ### `annotator` - 变体 B
//! - 下一题开始或输入结束时以分隔符封口
//! - 无选项的记录照常产出（只带题干与小点）

pub mod annotator;
pub mod lexicon;
pub mod line;
pub mod structurer;

pub use annotator::QuestionAnnotator;
pub use line::{LineClass, LineClassifier, ParsedOption};
pub use structurer::QuestionStructurer;

use serde::Deserialize;

/// 逐行状态机的显式状态
///
/// 行分类的优先级顺序就是这里的转移优先级列表。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// 没有打开的记录，等待题号行
    AwaitingQuestion,
    /// 正在收集题干续行
    CollectingStem,
    /// 正在收集小点（任何选项出现前）
    CollectingSubPoints,
    /// 已见到选项，记录对小点封闭
    CollectingOptions,
}

/// 题目已打开时再次遇到题号行的处理策略
///
/// 旧实现把这种行当作当前题干的续行（对 OCR 断行误报的容忍，
/// 也可能只是缺陷）。这里不把该行为写死，由配置显式选择。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatQuestionPolicy {
    /// 关闭（或丢弃未完成的）当前记录，开启新记录
    StartNewRecord,
    /// 旧行为：把整行捕获文本追加到当前题干
    AppendToStem,
}

/// 解析统计
///
/// 无法归类且没有打开记录的行会被静默丢弃，但必须可观测：
/// 丢弃计数过高说明 OCR 质量退化。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// 产出的记录数
    pub emitted_records: usize,
    /// 丢弃的行数（无模式匹配且无打开记录）
    pub dropped_lines: usize,
    /// 被策略丢弃的未完成记录数（变体 A、StartNewRecord 策略下）
    pub discarded_records: usize,
}

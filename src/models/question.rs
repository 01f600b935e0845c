use serde::Serialize;

/// 选项标签（封闭集合，固定四个）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// 从字符解析标签，A-D 之外的字符无效
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(OptionLabel::A),
            'B' => Some(OptionLabel::B),
            'C' => Some(OptionLabel::C),
            'D' => Some(OptionLabel::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLabel::A => 'A',
            OptionLabel::B => 'B',
            OptionLabel::C => 'C',
            OptionLabel::D => 'D',
        }
    }
}

impl std::fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 四个选项的定长映射
///
/// 记录只有在选项 D 非空后才算完成（上游 OCR 的题目若有完整选项组，
/// D 总是最后出现，完成判定刻意只看 D）。
#[derive(Debug, Clone, Default, Serialize)]
pub struct Options {
    a: Option<String>,
    b: Option<String>,
    c: Option<String>,
    d: Option<String>,
}

impl Options {
    fn slot(&self, label: OptionLabel) -> &Option<String> {
        match label {
            OptionLabel::A => &self.a,
            OptionLabel::B => &self.b,
            OptionLabel::C => &self.c,
            OptionLabel::D => &self.d,
        }
    }

    fn slot_mut(&mut self, label: OptionLabel) -> &mut Option<String> {
        match label {
            OptionLabel::A => &mut self.a,
            OptionLabel::B => &mut self.b,
            OptionLabel::C => &mut self.c,
            OptionLabel::D => &mut self.d,
        }
    }

    /// 写入一个选项
    pub fn set(&mut self, label: OptionLabel, text: impl Into<String>) {
        *self.slot_mut(label) = Some(text.into());
    }

    pub fn get(&self, label: OptionLabel) -> Option<&str> {
        self.slot(label).as_deref()
    }

    /// 选项缺失时按空字符串渲染（SQL 列恒定四个）
    pub fn text_or_empty(&self, label: OptionLabel) -> &str {
        self.get(label).unwrap_or("")
    }

    /// 向已有选项追加续行文本（空格连接）
    pub fn append(&mut self, label: OptionLabel, chunk: &str) {
        if let Some(text) = self.slot_mut(label) {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(chunk);
        } else {
            *self.slot_mut(label) = Some(chunk.to_string());
        }
    }

    /// 完成判定：只看选项 D 是否非空
    pub fn is_complete(&self) -> bool {
        matches!(&self.d, Some(text) if !text.is_empty())
    }
}

/// 小点（题干内的罗马数字子陈述）
#[derive(Debug, Clone, Serialize)]
pub struct SubPoint {
    /// 标签：i..v，或映射表外直接保留的数字字面量
    pub label: String,
    pub text: String,
}

/// 解析器产出的结构化题目记录
///
/// 生命周期：检测到题号行时创建，随后续行逐行填充，
/// 选项 D 填充（变体 A）或下一题开始 / 输入结束（变体 B）时封口。
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionRecord {
    /// 题干（规整、去首尾空白的自由文本）
    pub stem: String,
    /// 小点序列，只在任何选项出现之前收集
    pub sub_points: Vec<SubPoint>,
    /// 选项映射
    pub options: Options,
}

impl QuestionRecord {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            ..Default::default()
        }
    }

    /// 追加题干续行（空格连接，不是换行连接）
    pub fn append_stem(&mut self, chunk: &str) {
        if !self.stem.is_empty() {
            self.stem.push(' ');
        }
        self.stem.push_str(chunk);
    }

    pub fn is_complete(&self) -> bool {
        self.options.is_complete()
    }
}

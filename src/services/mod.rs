//! 业务能力层（Services Layer）
//!
//! 只描述"我能写什么"，不关心流程顺序：
//! - `SqlWriter` - 写 SQL INSERT 脚本能力
//! - `StructuredWriter` - 写结构化文本能力
//! - `RawTextWriter` - 追加原始 OCR 文本能力

pub mod raw_text_writer;
pub mod sql_writer;
pub mod structured_writer;

pub use raw_text_writer::RawTextWriter;
pub use sql_writer::SqlWriter;
pub use structured_writer::StructuredWriter;

pub mod question;

pub use question::{OptionLabel, Options, QuestionRecord, SubPoint};

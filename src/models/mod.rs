pub mod notification;
pub mod question;

pub use notification::{Notification, Severity};
pub use question::{DraftField, Question, QuestionDraft, QuestionId, QuestionType};

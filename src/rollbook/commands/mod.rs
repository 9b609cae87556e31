//! # Command Layer
//!
//! Each operation lives in its own submodule as a plain function over a
//! [`RecordStore`](crate::store::RecordStore) (and, for `add`, the
//! [`IdAllocator`](crate::ids::IdAllocator)).
//!
//! Commands never print, prompt, or exit. They return a [`CmdResult`]:
//! - `affected_students`: records created by the operation
//! - `listed_students`: records to display
//! - `missing_ids`: lookups that found nothing (a normal outcome, not an error)
//! - `messages`: structured messages with levels (info, success, warning, error)
//!
//! The UI layer decides how any of it is rendered.
//!
//! ## Command Modules
//!
//! - [`add`]: Allocate an ID and insert a new record
//! - [`find`]: Exact-match lookup of one or more IDs
//! - [`list`]: Every record, ordered by ID suffix

use crate::model::Student;
use serde::Serialize;

pub mod add;
pub mod find;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub missing_ids: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.missing_ids.is_empty()
    }
}

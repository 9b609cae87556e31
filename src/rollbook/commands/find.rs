use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Looks up each ID exactly as given. Misses land in `missing_ids` and are summed
/// up in a single error message; they don't make the command fail.
pub fn run<S: RecordStore, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        match store.lookup(id) {
            Some(student) => result.listed_students.push(student.clone()),
            None => {
                tracing::debug!(id = %id, "lookup miss");
                result.missing_ids.push(id.to_string());
            }
        }
    }

    if !result.missing_ids.is_empty() {
        let missing = result.missing_ids.join(", ");
        result.add_message(CmdMessage::error(format!(
            "Student ID not found: {}",
            missing
        )));
    }

    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::IdAllocator;
use crate::model::NewStudent;
use crate::store::RecordStore;

/// Allocates a fresh ID, binds `fields` to it and inserts the record.
///
/// Allocation and insertion happen under one `&mut` borrow of each, so no other
/// caller can slip an allocation in between.
pub fn run<S: RecordStore>(
    store: &mut S,
    ids: &mut IdAllocator,
    fields: NewStudent,
) -> Result<CmdResult> {
    let id = ids.next()?;
    let student = fields.into_student(id.clone());

    if store.insert(&id, student.clone()).is_some() {
        // Unreachable while allocated suffixes stay above the seed max
        tracing::warn!("Replaced existing record at {}", id);
    }
    tracing::debug!(id = %id, "student added");

    let mut result = CmdResult::default().with_affected_students(vec![student]);
    result.add_message(CmdMessage::success(format!(
        "New student record saved: {}",
        id
    )));
    Ok(result)
}

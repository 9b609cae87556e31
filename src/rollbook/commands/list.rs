use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::suffix_of;
use crate::model::Student;
use crate::store::RecordStore;

/// Every record, ordered by numeric suffix under `prefix`.
///
/// IDs without a well-formed suffix sort first, by plain string order.
pub fn run<S: RecordStore>(store: &S, prefix: &str) -> Result<CmdResult> {
    let mut students: Vec<Student> = store.list().into_iter().cloned().collect();
    students.sort_by(|a, b| {
        let ka = (suffix_of(prefix, &a.id), &a.id);
        let kb = (suffix_of(prefix, &b.id), &b.id);
        ka.cmp(&kb)
    });

    let mut result = CmdResult::default().with_listed_students(students);
    result.add_message(CmdMessage::info(format!(
        "The roster currently contains {} student records.",
        store.count()
    )));
    Ok(result)
}

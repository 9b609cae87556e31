use super::RecordStore;
use crate::error::{Result, RollbookError};
use crate::model::Student;
use std::collections::HashMap;

/// `HashMap`-backed store. Lives as long as the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    records: HashMap<String, Student>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn seed(records: Vec<Student>) -> Result<Self> {
        let mut store = Self::new();
        for student in records {
            if store.records.contains_key(&student.id) {
                return Err(RollbookError::DuplicateId(student.id));
            }
            store.records.insert(student.id.clone(), student);
        }
        tracing::debug!(count = store.records.len(), "store seeded");
        Ok(store)
    }

    fn insert(&mut self, id: &str, student: Student) -> Option<Student> {
        self.records.insert(id.to_string(), student)
    }

    fn lookup(&self, id: &str) -> Option<&Student> {
        self.records.get(id)
    }

    fn count(&self) -> usize {
        self.records.len()
    }

    fn keys(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    fn list(&self) -> Vec<&Student> {
        self.records.values().collect()
    }
}

// --- Test Fixtures ---

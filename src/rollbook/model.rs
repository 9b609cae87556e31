//! # Domain Model
//!
//! A [`Student`] is created once, at insertion time, and never mutated afterwards.
//! The store only hands out shared references or clones.
//!
//! Textual fields are opaque at this layer:
//! - `date_of_birth` is expected as `DD/MM/YYYY` but is not validated here.
//! - `phone_number` has no format rules.
//! - `subjects` keeps the order it was entered in, duplicates included.
//!
//! Splitting a comma-separated subject line or coercing the class to an integer is
//! the caller's job; [`NewStudent`] already carries typed values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub address: String,
    pub class_level: i32,
    pub subjects: Vec<String>,
    pub date_of_birth: String,
    pub phone_number: String,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        class_level: i32,
        subjects: Vec<String>,
        date_of_birth: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            class_level,
            subjects,
            date_of_birth: date_of_birth.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Field set for a student that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub address: String,
    pub class_level: i32,
    pub subjects: Vec<String>,
    pub date_of_birth: String,
    pub phone_number: String,
}

impl NewStudent {
    /// Binds the field set to an identifier, producing the stored record.
    pub fn into_student(self, id: impl Into<String>) -> Student {
        Student {
            id: id.into(),
            name: self.name,
            address: self.address,
            class_level: self.class_level,
            subjects: self.subjects,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
        }
    }
}

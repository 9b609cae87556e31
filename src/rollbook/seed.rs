//! # Seed Data
//!
//! The roster is populated once at startup, before the allocator looks at any key.
//! Two sources feed it:
//!
//! - [`builtin_roster`]: the fifteen students `24-25STU5567` through `24-25STU5581`.
//! - [`load_seed_file`]: a JSON array of [`Student`] objects, for rosters supplied
//!   through configuration.
//!
//! Both produce plain `Vec<Student>`; duplicate detection happens when the store is
//! seeded.

use crate::error::Result;
use crate::model::Student;
use std::path::Path;

fn subjects(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_roster() -> Vec<Student> {
    vec![
        Student::new(
            "24-25STU5567",
            "Sumit",
            "701 Green St, Mumbai",
            10,
            subjects(&["Advanced Mathematics", "Physics", "English"]),
            "15/05/2009",
            "9876543210",
        ),
        Student::new(
            "24-25STU5568",
            "Ajay",
            "25 Residency Rd, Delhi",
            12,
            subjects(&["Chemistry", "Biology", "Computer Science"]),
            "03/11/2007",
            "9000011111",
        ),
        Student::new(
            "24-25STU5569",
            "Anuj",
            "14 Lake View, Bangalore",
            9,
            subjects(&["History", "Geography", "Art", "Science"]),
            "20/08/2010",
            "8585858585",
        ),
        Student::new(
            "24-25STU5570",
            "Gorkhe",
            "88 Industrial Area, Pune",
            11,
            subjects(&["Economics", "Business Studies", "Literature"]),
            "10/01/2008",
            "7776665554",
        ),
        Student::new(
            "24-25STU5571",
            "Deepak",
            "100 MG Road, Chennai",
            10,
            subjects(&["Physical Education", "Math", "Hindi"]),
            "29/04/2009",
            "9998887776",
        ),
        Student::new(
            "24-25STU5572",
            "Priya Sharma",
            "404 North Avenue, Hyderabad",
            12,
            subjects(&["Physics", "Chemistry", "Math"]),
            "12/12/2007",
            "9123456789",
        ),
        Student::new(
            "24-25STU5573",
            "Rohan Verma",
            "B-12 Sector 10, Noida",
            9,
            subjects(&["Science", "Sanskrit", "Computer Apps"]),
            "01/03/2010",
            "8765432109",
        ),
        Student::new(
            "24-25STU5574",
            "Kavita Singh",
            "55 Defence Colony, Kolkata",
            11,
            subjects(&["Psychology", "Sociology", "English"]),
            "25/06/2008",
            "7654321098",
        ),
        Student::new(
            "24-25STU5575",
            "Vikram Das",
            "Plot 30, New Town, Ranchi",
            10,
            subjects(&["Commerce", "Accounts", "Economics"]),
            "14/09/2009",
            "9012345678",
        ),
        Student::new(
            "24-25STU5576",
            "Nisha Patel",
            "House 1, Old City, Ahmedabad",
            12,
            subjects(&["Fine Arts", "History", "Literature"]),
            "05/02/2007",
            "9900990099",
        ),
        Student::new(
            "24-25STU5577",
            "Sanjay Rai",
            "18/A Hill Road, Guwahati",
            9,
            subjects(&["General Science", "Math", "Assamese"]),
            "17/07/2010",
            "8080808080",
        ),
        Student::new(
            "24-25STU5578",
            "Meena Joshi",
            "Flat 302, Cyber Hub, Gurgaon",
            11,
            subjects(&["IT Systems", "Networking", "Database Mgmt"]),
            "08/10/2008",
            "7070707070",
        ),
        Student::new(
            "24-25STU5579",
            "Rahul Goyal",
            "45 Park Street, Lucknow",
            10,
            subjects(&["Chemistry", "Biology", "Environmental Science"]),
            "21/01/2009",
            "9555544444",
        ),
        Student::new(
            "24-25STU5580",
            "Shruti Bedi",
            "2A Garden View, Jaipur",
            12,
            subjects(&["Political Science", "Law Studies", "Public Admin"]),
            "04/03/2007",
            "8123459876",
        ),
        Student::new(
            "24-25STU5581",
            "Arjun Nair",
            "1st Floor, Main Bazaar, Kochi",
            11,
            subjects(&["Physics", "Electronics", "Math"]),
            "30/11/2008",
            "9999900000",
        ),
    ]
}

/// Reads a JSON array of students from `path`.
pub fn load_seed_file(path: &Path) -> Result<Vec<Student>> {
    let data = std::fs::read_to_string(path)?;
    let records: Vec<Student> = serde_json::from_str(&data)?;
    tracing::debug!(path = %path.display(), count = records.len(), "seed file loaded");
    Ok(records)
}

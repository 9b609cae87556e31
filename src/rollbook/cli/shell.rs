//! The interactive menu.
//!
//! ```text
//! 1. Search Student by ID
//! 2. Add New Student Record
//! 3. Exit Program
//! ```
//!
//! Every line read is trimmed before use. End of input behaves like `3`, and an add
//! that hits end of input part way through is abandoned without allocating an ID.

use super::input::{parse_class_level, parse_subjects, CLASS_LEVEL_HINT};
use super::render::{render_lookup, render_messages, render_student_details};
use colored::Colorize;
use rollbook::api::{MessageLevel, RollbookApi};
use rollbook::error::Result;
use rollbook::model::NewStudent;
use rollbook::store::RecordStore;
use std::io::{BufRead, Write};

const DIVIDER: &str = "--------------------------------------------------";

pub(super) struct Shell<'a, S: RecordStore, R, W> {
    api: &'a mut RollbookApi<S>,
    input: R,
    output: W,
}

impl<'a, S: RecordStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(api: &'a mut RollbookApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        // Warnings already went to the log during startup
        let startup: Vec<_> = self
            .api
            .startup_messages()
            .iter()
            .filter(|m| m.level == MessageLevel::Info)
            .cloned()
            .collect();
        write!(self.output, "{}", render_messages(&startup))?;

        writeln!(self.output, "\n{}", "*** Welcome to the Student Database System ***".bold())?;
        writeln!(
            self.output,
            "The database currently contains {} student records.",
            self.api.count()
        )?;

        loop {
            writeln!(self.output, "\n{}", DIVIDER)?;
            writeln!(self.output, "What would you like to do?")?;
            writeln!(
                self.output,
                "1. Search Student by ID (e.g., {})",
                example_id(self.api)
            )?;
            writeln!(self.output, "2. Add New Student Record")?;
            writeln!(self.output, "3. Exit Program")?;

            let Some(choice) = self.prompt("Enter your choice (1, 2, or 3): ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.search()?,
                "2" => self.add()?,
                "3" => break,
                c if c.eq_ignore_ascii_case("exit") => break,
                _ => writeln!(self.output, "\nInvalid choice. Please enter 1, 2, or 3.")?,
            }
        }

        writeln!(self.output, "Thank you for using the system. Goodbye!")?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let Some(id) = self.prompt("\nPlease type the FULL Student ID to search: ")? else {
            return Ok(());
        };
        let result = self.api.find_students(&[id])?;
        write!(self.output, "{}", render_lookup(&result))?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- ADD NEW STUDENT RECORD ---")?;
        let Some(next_id) = self.api.next_id() else {
            writeln!(self.output, "{}", "No student IDs are left to assign.".red())?;
            return Ok(());
        };
        writeln!(self.output, "New unique Student ID will be: {}", next_id)?;

        let Some(fields) = self.read_new_student()? else {
            writeln!(self.output, "\nInput ended, no record was saved.")?;
            return Ok(());
        };

        let result = self.api.add_student(fields)?;
        writeln!(self.output)?;
        write!(self.output, "{}", render_messages(&result.messages))?;
        for student in &result.affected_students {
            write!(self.output, "{}", render_student_details(student))?;
        }
        Ok(())
    }

    fn read_new_student(&mut self) -> Result<Option<NewStudent>> {
        let Some(name) = self.prompt("Enter Student Name: ")? else {
            return Ok(None);
        };

        let class_level = loop {
            let Some(raw) = self.prompt("Enter Student Class (e.g., 10): ")? else {
                return Ok(None);
            };
            match parse_class_level(&raw) {
                Ok(level) => break level,
                Err(_) => writeln!(self.output, "{}", CLASS_LEVEL_HINT.red())?,
            }
        };

        let Some(address) = self.prompt("Enter Student Address: ")? else {
            return Ok(None);
        };
        let Some(date_of_birth) = self.prompt("Enter Date of Birth (DD/MM/YYYY): ")? else {
            return Ok(None);
        };
        let Some(phone_number) = self.prompt("Enter Phone Number: ")? else {
            return Ok(None);
        };
        let Some(subjects) =
            self.prompt("Enter Subjects (comma-separated, e.g., Math, Science, English): ")?
        else {
            return Ok(None);
        };

        Ok(Some(NewStudent {
            name,
            address,
            class_level,
            subjects: parse_subjects(&subjects),
            date_of_birth,
            phone_number,
        }))
    }

    /// Writes `text`, reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Lowest-numbered ID in the roster, falling back to the next one to be issued.
fn example_id<S: RecordStore>(api: &RollbookApi<S>) -> String {
    api.list_students()
        .ok()
        .and_then(|r| r.listed_students.first().map(|s| s.id.clone()))
        .or_else(|| api.next_id())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook::ids::DEFAULT_PREFIX;
    use rollbook::seed::builtin_roster;
    use rollbook::store::memory::InMemoryStore;

    fn api() -> RollbookApi<InMemoryStore> {
        RollbookApi::from_seed(builtin_roster(), DEFAULT_PREFIX).unwrap()
    }

    fn run_session(api: &mut RollbookApi<InMemoryStore>, input: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        Shell::new(api, input.as_bytes(), &mut output).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let mut api = api();
        let out = run_session(&mut api, "3\n");
        assert!(out.contains("ID counter initialized. Next new ID suffix will be: 5582"));
        assert!(out.contains("The database currently contains 15 student records."));
        assert!(out.contains("1. Search Student by ID (e.g., 24-25STU5567)"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_exit_word_any_case() {
        let mut api = api();
        let out = run_session(&mut api, "EXIT\n");
        assert!(out.contains("Goodbye!"));
        assert!(!out.contains("Invalid choice"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut api = api();
        let out = run_session(&mut api, "");
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_search_hit_and_miss() {
        let mut api = api();
        let out = run_session(&mut api, "1\n 24-25STU5568 \n1\n24-25STU9999\n3\n");
        assert!(out.contains("STUDENT DETAILS - ID: 24-25STU5568"));
        assert!(out.contains("Ajay"));
        assert!(out.contains("The Student ID '24-25STU9999' was not found in the database."));
    }

    #[test]
    fn test_invalid_choice() {
        let mut api = api();
        let out = run_session(&mut api, "7\n3\n");
        assert!(out.contains("Invalid choice. Please enter 1, 2, or 3."));
    }

    #[test]
    fn test_add_then_search() {
        let mut api = api();
        let input = "2\nTest User\nten\n10\n1 Test Road\n01/01/2010\n9000000001\nMath, Science\n\
                     1\n24-25STU5582\n3\n";
        let out = run_session(&mut api, input);

        assert!(out.contains("New unique Student ID will be: 24-25STU5582"));
        assert!(out.contains(CLASS_LEVEL_HINT));
        assert!(out.contains("New student record saved: 24-25STU5582"));
        assert!(out.contains("Subjects:       [Math, Science]"));

        let stored = api.lookup("24-25STU5582").unwrap();
        assert_eq!(stored.name, "Test User");
        assert_eq!(stored.class_level, 10);
        assert_eq!(stored.subjects, vec!["Math", "Science"]);
        assert_eq!(api.count(), 16);
    }

    #[test]
    fn test_add_abandoned_on_end_of_input() {
        let mut api = api();
        let out = run_session(&mut api, "2\nHalf Done\n");
        assert!(out.contains("no record was saved"));
        assert_eq!(api.count(), 15);
        assert_eq!(api.next_id().as_deref(), Some("24-25STU5582"));
    }

    #[test]
    fn test_add_refused_once_ids_run_out() {
        let mut near_end = builtin_roster()[0].clone();
        near_end.id = format!("P{}", u64::MAX - 1);
        let mut api = RollbookApi::from_seed(vec![near_end.clone()], "P").unwrap();
        api.add_student(NewStudent {
            name: "Last".to_string(),
            address: near_end.address,
            class_level: near_end.class_level,
            subjects: near_end.subjects,
            date_of_birth: near_end.date_of_birth,
            phone_number: near_end.phone_number,
        })
        .unwrap();

        let out = run_session(&mut api, "2\n3\n");
        assert!(out.contains("No student IDs are left to assign."));
        assert!(!out.contains("New unique Student ID will be"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(api.count(), 2);
    }
}

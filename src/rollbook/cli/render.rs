use colored::Colorize;
use rollbook::api::{CmdMessage, CmdResult, MessageLevel};
use rollbook::error::Result;
use rollbook::model::Student;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const RULE: &str = "==================================================";
const LABEL_WIDTH: usize = 15;
const ID_WIDTH: usize = 16;
const NAME_WIDTH: usize = 24;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<width$} {}\n", label, value, width = LABEL_WIDTH)
}

pub(super) fn render_student_details(student: &Student) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    let heading = format!("           STUDENT DETAILS - ID: {}", student.id);
    out.push_str(&format!("{}\n", heading.bold()));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&field("Name:", &student.name));
    out.push_str(&field("Class:", student.class_level));
    out.push_str(&field("Date of Birth:", &student.date_of_birth));
    out.push_str(&field("Phone Number:", &student.phone_number));
    out.push_str(&field("Address:", &student.address));
    out.push_str(&field(
        "Subjects:",
        format!("[{}]", student.subjects.join(", ")),
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

pub(super) fn render_not_found(id: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{}\n", "--- ID NOT FOUND ---".red()));
    out.push_str(&format!(
        "The Student ID '{}' was not found in the database.\n",
        id
    ));
    out.push_str("Please ensure the ID is typed correctly.\n");
    out.push_str("--------------------\n");
    out
}

/// Full details for every listed or affected student, then a not-found block per miss.
pub(super) fn render_lookup(result: &CmdResult) -> String {
    let mut out = String::new();
    for student in result.affected_students.iter().chain(&result.listed_students) {
        out.push_str(&render_student_details(student));
    }
    for id in &result.missing_ids {
        out.push_str(&render_not_found(id));
    }
    out
}

pub(super) fn render_student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found.\n".to_string();
    }

    let mut out = String::new();
    for student in students {
        let id = pad_to_width(&student.id, ID_WIDTH);
        let name = pad_to_width(&truncate_to_width(&student.name, NAME_WIDTH), NAME_WIDTH);
        let class = format!("Class {:>2}", student.class_level);
        out.push_str(&format!("{} {} {}\n", id.yellow(), name, class.dimmed()));
    }
    out
}

pub(super) fn render_json(result: &CmdResult) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(result)?))
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

//! Coercion of raw console input into the typed values the library expects.

pub const CLASS_LEVEL_HINT: &str =
    "Invalid input. Please enter a valid number for the class (e.g., 9, 10, 11).";

/// Parses a class level, rejecting anything that isn't an integer.
///
/// Also used as clap's value parser for `add --class`.
pub fn parse_class_level(input: &str) -> Result<i32, String> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| CLASS_LEVEL_HINT.to_string())
}

/// Splits a comma-separated subject line.
///
/// Entries are trimmed and keep their order; duplicates and empty entries in the
/// middle survive, trailing empty entries are dropped. A blank line gives no subjects.
pub fn parse_subjects(input: &str) -> Vec<String> {
    let mut subjects: Vec<String> = input
        .trim()
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();
    while subjects.last().is_some_and(|s| s.is_empty()) {
        subjects.pop();
    }
    subjects
}

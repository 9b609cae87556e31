//! # Identifier Allocation
//!
//! Student IDs have the form `<prefix><suffix>`, e.g. `24-25STU5567`. The suffix is a
//! plain decimal number with no padding and no fixed width.
//!
//! ## Initialization
//!
//! [`IdAllocator::initialize`] runs once over the keys already in the store:
//!
//! 1. Keys that don't start with the prefix, or are exactly the prefix, are ignored.
//! 2. For the rest, the remainder must be all ASCII digits and fit in a `u64`.
//!    Anything else (`24-25STUabc`, `24-25STU-3`) is skipped with a warning.
//!    A sign is never accepted, so `24-25STU+9000` is malformed too rather than
//!    being read as 9000.
//! 3. The cursor becomes `max + 1`, or `1` when no key matched.
//!
//! ## Allocation
//!
//! [`IdAllocator::next`] returns `prefix + cursor` and advances the cursor by one.
//! Once `u64::MAX` has been handed out the allocator is exhausted and further calls
//! fail with [`RollbookError::IdSpaceExhausted`] instead of wrapping.
//! Every ID it hands out is strictly above every seeded suffix and every earlier
//! allocation, which is what keeps store keys unique.
//!
//! The allocator is plain owned state. Callers that share it across threads must
//! guard allocation and the following insert as one critical section.

use crate::error::{Result, RollbookError};

pub const DEFAULT_PREFIX: &str = "24-25STU";

/// How a single key relates to the allocator's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyClass {
    Foreign,
    Malformed,
    Suffix(u64),
}

fn classify(prefix: &str, key: &str) -> KeyClass {
    let Some(rest) = key.strip_prefix(prefix) else {
        return KeyClass::Foreign;
    };
    if rest.is_empty() {
        return KeyClass::Foreign;
    }
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return KeyClass::Malformed;
    }
    // All digits, so the only failure left is overflow
    match rest.parse::<u64>() {
        Ok(n) => KeyClass::Suffix(n),
        Err(_) => KeyClass::Malformed,
    }
}

/// Numeric suffix of `id` under `prefix`, if it has a well-formed one.
pub fn suffix_of(prefix: &str, id: &str) -> Option<u64> {
    match classify(prefix, id) {
        KeyClass::Suffix(n) => Some(n),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    prefix: String,
    // None once u64::MAX has been issued
    next_suffix: Option<u64>,
}

impl IdAllocator {
    /// Builds an allocator positioned after the highest suffix found in `keys`.
    ///
    /// Returns the allocator together with the keys that matched the prefix but had a
    /// malformed suffix. Those are reported, not fatal.
    pub fn initialize<I, K>(prefix: impl Into<String>, keys: I) -> Result<(Self, Vec<String>)>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let prefix = prefix.into();
        let mut max_suffix: Option<u64> = None;
        let mut malformed = Vec::new();

        for key in keys {
            let key = key.as_ref();
            match classify(&prefix, key) {
                KeyClass::Foreign => {}
                KeyClass::Malformed => {
                    tracing::warn!("Found invalid student ID format: {}", key);
                    malformed.push(key.to_string());
                }
                KeyClass::Suffix(n) => {
                    max_suffix = Some(max_suffix.map_or(n, |m| m.max(n)));
                }
            }
        }

        let next_suffix = match max_suffix {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .ok_or(RollbookError::IdSpaceExhausted(max))?,
        };
        tracing::debug!(prefix = %prefix, next_suffix, "id allocator initialized");

        Ok((
            Self {
                prefix,
                next_suffix: Some(next_suffix),
            },
            malformed,
        ))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The suffix the next call to [`next`](Self::next) will use, `None` when exhausted.
    pub fn next_suffix(&self) -> Option<u64> {
        self.next_suffix
    }

    /// The identifier the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> Option<String> {
        self.next_suffix
            .map(|suffix| format!("{}{}", self.prefix, suffix))
    }

    /// Hands out a fresh identifier and advances the cursor.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<String> {
        let suffix = self
            .next_suffix
            .ok_or(RollbookError::IdSpaceExhausted(u64::MAX))?;
        self.next_suffix = suffix.checked_add(1);
        Ok(format!("{}{}", self.prefix, suffix))
    }
}

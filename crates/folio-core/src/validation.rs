//! Field-keyed validation errors.
//!
//! Validators collect every failing constraint into a tree keyed by
//! field path (e.g. `data.testimonial.content`) so the form layer can
//! render each message beneath the offending control.

use std::collections::BTreeMap;
use std::fmt;

/// Error tree keyed by field path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field path.
    pub fn add(&mut self, path: &str, message: &str) {
        self.errors
            .entry(path.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded for a field path, empty if the field passed.
    pub fn for_field(&self, path: &str) -> &[String] {
        self.errors.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message recorded for a field path.
    pub fn first_for_field(&self, path: &str) -> Option<&str> {
        self.for_field(path).first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", path, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

//! Bounded, insertion-ordered set of collected templates.

use crate::analysis::TemplateAnalysis;
use std::collections::HashSet;

/// Result of offering a record to a [`TemplateAccumulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The record was added.
    Inserted,
    /// An identical record was already collected.
    Duplicate,
    /// The accumulator is at capacity; the record was dropped.
    Full,
}

/// Collects templates, treating two records as the same only when their
/// serialized JSON text is identical.
///
/// A repository seen twice with a different star count is kept twice.
#[derive(Debug, Clone)]
pub struct TemplateAccumulator {
    capacity: usize,
    seen: HashSet<String>,
    entries: Vec<String>,
}

impl TemplateAccumulator {
    /// Creates an empty accumulator holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            seen: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Number of distinct records collected.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true once `capacity` records have been collected.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Offers a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized.
    pub fn insert(&mut self, template: &TemplateAnalysis) -> Result<Insertion, serde_json::Error> {
        let key = serde_json::to_string(template)?;

        if self.seen.contains(&key) {
            return Ok(Insertion::Duplicate);
        }
        if self.is_full() {
            return Ok(Insertion::Full);
        }

        self.seen.insert(key.clone());
        self.entries.push(key);
        Ok(Insertion::Inserted)
    }

    /// Returns the collected records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored record cannot be parsed back.
    pub fn into_templates(self) -> Result<Vec<TemplateAnalysis>, serde_json::Error> {
        self.entries
            .iter()
            .map(|entry| serde_json::from_str(entry))
            .collect()
    }
}

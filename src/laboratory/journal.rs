//! Append-only session journal of tested samples

use crate::laboratory::protocol::{ProtocolReport, ProtocolSummary};
use crate::laboratory::sample::Sample;

/// Question asked before the journal is wiped
pub const CLEAR_PROMPT: &str = "Очистить журнал испытаний? Все данные будут удалены.";

/// Observable state of the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalState {
    Empty,
    HasSamples,
}

/// Asks the operator to confirm a destructive action
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Ordered collection of samples for the current session
///
/// Samples only enter through [`Journal::add`] and only leave all at once
/// through a confirmed [`Journal::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    samples: Vec<Sample>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn state(&self) -> JournalState {
        if self.samples.is_empty() {
            JournalState::Empty
        } else {
            JournalState::HasSamples
        }
    }

    /// Append a submitted sample
    pub fn add(&mut self, sample: Sample) {
        tracing::info!(
            id = %sample.id,
            number = %sample.sample_number,
            strength = sample.compressive_strength,
            "Sample added to journal"
        );
        self.samples.push(sample);
    }

    /// Remove every sample if the operator confirms
    ///
    /// An empty journal is left alone without asking. Returns whether
    /// anything was removed.
    pub fn clear(&mut self, confirmation: &impl Confirmation) -> bool {
        if self.samples.is_empty() {
            return false;
        }
        if !confirmation.confirm(CLEAR_PROMPT) {
            tracing::debug!(samples = self.samples.len(), "Journal clear declined");
            return false;
        }

        tracing::info!(samples = self.samples.len(), "Journal cleared");
        self.samples.clear();
        true
    }

    pub fn summary(&self) -> Option<ProtocolSummary> {
        ProtocolSummary::from_samples(&self.samples)
    }

    /// Protocol over the whole journal; unavailable while it is empty
    pub fn protocol(&self) -> Option<ProtocolReport<'_>> {
        ProtocolReport::new(&self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laboratory::sample::{Dimensions, MaterialType, SampleShape};
    use chrono::NaiveDate;
    use std::cell::Cell;
    use uuid::Uuid;

    fn sample(number: &str) -> Sample {
        let date = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
        Sample {
            id: Uuid::now_v7(),
            sample_number: number.to_string(),
            date_received: date,
            date_tested: date,
            material_type: MaterialType::Heavy,
            concrete_class: None,
            age_days: 28,
            shape: SampleShape::Cube,
            dimensions: Dimensions::uniform(100.0),
            actual_area: 10_000.0,
            destructive_load: 220.0,
            compressive_strength: 22.0,
            test_conditions: String::new(),
            performer: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_state_transitions() {
        let mut journal = Journal::new();
        assert_eq!(journal.state(), JournalState::Empty);
        assert!(journal.protocol().is_none());

        journal.add(sample("1"));
        assert_eq!(journal.state(), JournalState::HasSamples);
        assert!(journal.protocol().is_some());

        assert!(journal.clear(&|_: &str| true));
        assert_eq!(journal.state(), JournalState::Empty);

        journal.add(sample("2"));
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.last().unwrap().sample_number, "2");
    }

    #[test]
    fn test_declined_clear_keeps_samples() {
        let mut journal = Journal::new();
        journal.add(sample("1"));
        journal.add(sample("2"));

        let asked = Cell::new(None);
        let decline = |prompt: &str| {
            asked.set(Some(prompt.to_string()));
            false
        };

        assert!(!journal.clear(&decline));
        assert_eq!(journal.len(), 2);
        assert_eq!(asked.take().as_deref(), Some(CLEAR_PROMPT));
    }

    #[test]
    fn test_clearing_empty_journal_does_not_ask() {
        let mut journal = Journal::new();
        let asked = Cell::new(false);
        let confirm = |_: &str| {
            asked.set(true);
            true
        };

        assert!(!journal.clear(&confirm));
        assert!(!asked.get());
    }

    #[test]
    fn test_samples_keep_insertion_order() {
        let mut journal = Journal::new();
        for number in ["3", "1", "2"] {
            journal.add(sample(number));
        }
        let numbers: Vec<_> = journal
            .samples()
            .iter()
            .map(|s| s.sample_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["3", "1", "2"]);
        assert_eq!(journal.summary().unwrap().count_label(), "3 образцов");
    }
}

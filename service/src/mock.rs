use std::sync::{Arc, Mutex};

use crate::reporter::{RunRecord, RunReporter};

/// Mock implementation of RunReporter for testing
///
/// Keeps every reported record in order so tests can assert on them.
#[derive(Clone, Default)]
pub struct MockReporter {
    records: Arc<Mutex<Vec<RunRecord>>>,
}

impl MockReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<RunRecord> {
        let records = self.records.lock().unwrap();
        records.clone()
    }

    pub fn record_count(&self) -> usize {
        let records = self.records.lock().unwrap();
        records.len()
    }

    pub fn last_record(&self) -> Option<RunRecord> {
        let records = self.records.lock().unwrap();
        records.last().cloned()
    }
}

impl RunReporter for MockReporter {
    fn report(&self, record: &RunRecord) {
        let mut records = self.records.lock().unwrap();
        records.push(record.clone());
    }
}

use pip_inventory::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter capturing warnings and completions for
/// assertions.
#[derive(Clone)]
pub struct MockProgressReporter {
    warnings: Arc<Mutex<Vec<String>>>,
    completions: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            warnings: Arc::new(Mutex::new(Vec::new())),
            completions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }
}

impl Default for MockProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.completions.lock().unwrap().push(message.to_string());
    }
}

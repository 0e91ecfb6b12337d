//! Test helpers
//!
//! Mock collaborators and factory methods shared by unit tests.

use std::cell::RefCell;

use crate::error::UiResult;
use crate::traits::UrlGenerator;

// ===== RecordingUrlGenerator =====

/// [`UrlGenerator`] that records every call and returns predictable URLs
pub struct RecordingUrlGenerator {
    calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl RecordingUrlGenerator {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Calls seen so far, in order
    pub fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.calls.borrow().clone()
    }
}

impl UrlGenerator for RecordingUrlGenerator {
    fn generate(&self, route: &str, params: &[(&str, &str)]) -> UiResult<String> {
        self.calls.borrow_mut().push((
            route.to_string(),
            params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        ));
        Ok(format!("https://app.test/{route}"))
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::FetchError;
use crate::ops::{HttpOps, HttpResponse};

#[derive(Clone)]
enum MockReply {
    Respond { status: u16, body: Vec<u8> },
    FailRequest(FetchError),
    FailBodyRead(FetchError),
}

/// Internal state for MockHttp.
///
/// Groups all mutable state into a single struct for simplified locking.
#[derive(Default)]
struct MockState {
    /// Replies by URL
    replies: HashMap<String, MockReply>,
    /// URLs in the order they were requested
    requested_urls: Vec<String>,
    /// Number of times a response body was read
    body_reads: usize,
    /// Number of responses dropped
    released: usize,
}

/// Mock implementation of HttpOps for testing
///
/// This mock allows you to:
/// - Serve canned responses per URL
/// - Simulate request and body read failures
/// - Verify how many bodies were read and released
#[derive(Clone, Default)]
pub struct MockHttp {
    state: Arc<Mutex<MockState>>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with `status` for GET requests to `url`
    pub fn respond_with(&self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) {
        let mut state = self.state.lock().unwrap();
        state.replies.insert(
            url.into(),
            MockReply::Respond {
                status,
                body: body.into(),
            },
        );
    }

    /// Make the request itself fail, no response is produced
    pub fn fail_request_for(&self, url: impl Into<String>, error: FetchError) {
        let mut state = self.state.lock().unwrap();
        state.replies.insert(url.into(), MockReply::FailRequest(error));
    }

    /// Answer with 200 but fail when the body is read
    pub fn fail_body_read_for(&self, url: impl Into<String>, error: FetchError) {
        let mut state = self.state.lock().unwrap();
        state.replies.insert(url.into(), MockReply::FailBodyRead(error));
    }

    pub fn requested_urls(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.requested_urls.clone()
    }

    pub fn request_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.requested_urls.len()
    }

    pub fn body_read_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.body_reads
    }

    /// Number of responses that have been dropped
    pub fn released_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.released
    }
}

impl HttpOps for MockHttp {
    fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>, FetchError> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.requested_urls.push(url.to_string());
            state.replies.get(url).cloned()
        };

        let (status, body) = match reply {
            Some(MockReply::Respond { status, body }) => (status, Ok(body)),
            Some(MockReply::FailBodyRead(error)) => (200, Err(error)),
            Some(MockReply::FailRequest(error)) => return Err(error),
            None => {
                return Err(FetchError::Network(format!(
                    "No mock reply registered for {}",
                    url
                )));
            }
        };

        Ok(Box::new(MockResponse {
            status,
            body,
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockResponse {
    status: u16,
    body: Result<Vec<u8>, FetchError>,
    state: Arc<Mutex<MockState>>,
}

impl HttpResponse for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn read_body(&mut self) -> Result<Vec<u8>, FetchError> {
        self.state.lock().unwrap().body_reads += 1;
        self.body.clone()
    }
}

impl Drop for MockResponse {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.released += 1;
        }
    }
}

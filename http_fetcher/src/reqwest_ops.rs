use std::io::Read;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client, Response};

use crate::FetchError;
use crate::ops::{HttpOps, HttpResponse};

/// Blocking HttpOps implementation backed by reqwest.
pub struct ReqwestHttp {
    client: Client,
}

impl ReqwestHttp {
    /// Create a client whose requests fail with `FetchError::Timeout` once
    /// `timeout` has elapsed, body read included.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpOps for ReqwestHttp {
    fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>, FetchError> {
        let parsed = Url::parse(url)
            .map_err(|e| FetchError::InvalidRequest(format!("Invalid URL {}: {}", url, e)))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(request_error)?;

        Ok(Box::new(ReqwestResponse { inner: response }))
    }
}

fn request_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else if err.is_builder() {
        FetchError::InvalidRequest(err.to_string())
    } else {
        FetchError::Network(format!("Failed to send request: {}", err))
    }
}

struct ReqwestResponse {
    inner: Response,
}

impl HttpResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn read_body(&mut self) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        self.inner
            .read_to_end(&mut body)
            .map_err(body_read_error)?;
        Ok(body)
    }
}

fn body_read_error(err: std::io::Error) -> FetchError {
    let timed_out = err.kind() == std::io::ErrorKind::TimedOut
        || err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<reqwest::Error>())
            .is_some_and(reqwest::Error::is_timeout);

    if timed_out {
        FetchError::Timeout(err.to_string())
    } else {
        FetchError::BodyRead(err.to_string())
    }
}

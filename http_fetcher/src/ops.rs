use crate::FetchError;

/// Trait for outbound HTTP operations to enable testing
pub trait HttpOps {
    /// Send a GET request and return the response once its status line and
    /// headers have arrived. The body is not read yet.
    fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>, FetchError>;
}

/// A response whose body stream is still open.
///
/// Dropping the value releases the body stream.
pub trait HttpResponse {
    fn status(&self) -> u16;

    /// Read the remaining body to the end.
    fn read_body(&mut self) -> Result<Vec<u8>, FetchError>;
}

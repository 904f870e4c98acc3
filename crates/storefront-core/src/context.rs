//! Per-page-view request context.

use std::fmt;
use std::time::Instant;

/// Unique identifier for one page view, used for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

        Self(format!("{:x}-{:x}", nanos, counter))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context for one page view: correlation ID, route path, and timing.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Correlation ID for this page view.
    pub request_id: RequestId,
    /// The route path being rendered.
    pub path: String,
    start: Instant,
}

impl PageContext {
    /// Create a new context for the given route path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::generate(),
            path: path.into(),
            start: Instant::now(),
        }
    }

    /// Microseconds elapsed since the page view started.
    pub fn elapsed_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

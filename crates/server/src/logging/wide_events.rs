//! WideEvent - one span per handled callback, carrying everything learned along the way.
//!
//! Attributes are recorded directly on the underlying `tracing::Span`, so a subscriber
//! sees them as span fields instead of a blob in the message. `tracing` only records
//! fields declared when the span is created, so the set of keys is fixed here:
//!
//! - `code_present` - whether the provider sent a `code`
//! - `backend_status` - HTTP status the auth backend answered with
//! - `outcome` - `forwarded` or `failed`
//! - `error` - display form of the forwarding error
//!
//! ```rust,ignore
//! let evt = WideEvent::new("google_callback");
//! evt.add("code_present", true);
//! evt.info("callback handled");
//! ```

use std::fmt::Display;
use tracing::{Level, Span, field};

#[derive(Clone)]
pub struct WideEvent {
    span: Span,
}

impl WideEvent {
    /// The span name is a literal to satisfy the macro; the logical name is an attribute.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::span!(
            Level::INFO,
            "wide_event",
            event.name = %name,
            code_present = field::Empty,
            backend_status = field::Empty,
            outcome = field::Empty,
            error = field::Empty,
        );
        WideEvent { span }
    }

    /// Record a field on the span. Keys not declared in [`WideEvent::new`] are dropped.
    pub fn add<V: Display>(&self, key: &'static str, value: V) {
        self.span.record(key, field::display(value));
    }

    /// Add an optional field only if `Some`.
    pub fn add_opt<V: Display>(&self, key: &'static str, value: Option<V>) {
        if let Some(v) = value {
            self.add(key, v);
        }
    }

    pub fn emit(&self, message: &str, level: Level) {
        self.span.in_scope(|| match level {
            Level::ERROR => tracing::event!(Level::ERROR, message = %message),
            Level::WARN => tracing::event!(Level::WARN, message = %message),
            Level::INFO => tracing::event!(Level::INFO, message = %message),
            Level::DEBUG => tracing::event!(Level::DEBUG, message = %message),
            Level::TRACE => tracing::event!(Level::TRACE, message = %message),
        });
    }

    pub fn info(&self, message: &str) {
        self.emit(message, Level::INFO)
    }
    pub fn error(&self, message: &str) {
        self.emit(message, Level::ERROR)
    }
    pub fn debug(&self, message: &str) {
        self.emit(message, Level::DEBUG)
    }
}

//! Outbound HTTP clients.

pub mod code_exchange;

pub use code_exchange::{CodeExchange, CodeForwarder};

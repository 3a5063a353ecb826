//! Google OAuth callback forwarder and Tailwind style manifest.
//!
//! The server half receives the identity provider's redirect, posts the authorization
//! code to the auth backend and redirects the browser onward. The `style` half describes
//! the utility-first CSS build (content globs, font tokens, plugins) and renders it as
//! the config file the CSS generator reads.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod style;

//! Leakgate — sensitive-data detection for outbound chat traffic.
//!
//! Scans free-form text (chat messages, tool-call arguments) for
//! credentials, keys, PII, and connection strings before that text is
//! transmitted to an external service. Reports *which categories* of
//! sensitive data appear — never the matched substrings themselves.
//!
//! Privacy boundary: match results carry pattern identity only, no text,
//! offsets, or counts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod extract;
pub mod logging;
pub mod patterns;
pub mod scanner;
pub mod service;
pub mod types;

//! Structured logging
//!
//! Every log record the application emits goes through the helpers in
//! [`logging`].

pub mod logging;

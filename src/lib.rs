#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classify;
pub mod envelope;
pub mod error;
pub mod status;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classify::{Classification, DecodeError, JsonBodyError, classify_json_error};
pub use envelope::{Envelope, EnvelopeError};
pub use error::Error;
pub use status::StatusClass;

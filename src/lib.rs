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

pub mod codec;
pub mod error;
pub mod normalize;
pub mod system_error;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use codec::{decode, encode, encode_optional};
pub use error::Error;
pub use normalize::{normalize, normalize_boxed, to_system_error};
pub use system_error::wire::SystemErrorRecord;
pub use system_error::{SystemError, SystemErrorKind};
pub use types::{InvalidRequest, NoSuchContract, Unknown, UnsupportedRequest};

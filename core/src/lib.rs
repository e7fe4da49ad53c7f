//! Launch Android activities with typed extras and expand `FUZZ` placeholders
//! into one launch per payload.

pub mod adb;
pub mod errors;
pub mod expander;
pub mod extras;
pub mod payloads;

pub use adb::*;
pub use errors::*;
pub use expander::*;
pub use extras::*;
pub use payloads::*;

/// Marker replaced by every payload during expansion
pub const PLACEHOLDER: &str = "FUZZ";

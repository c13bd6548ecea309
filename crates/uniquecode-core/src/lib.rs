//! Core types and traits for the unique code service.
//!
//! This crate provides the request and record shapes, the length
//! normalization rules, and the seams (clock, repository, issuer) shared by
//! the generator, storage, service and gateway crates.

pub mod clock;
pub mod code;
pub mod error;
pub mod issuer;
pub mod record;
pub mod repository;
pub mod request;

pub use clock::{Clock, FixedClock, SystemClock};
pub use code::{UniqueCode, ALPHABET, MAX_LENGTH, MIN_LENGTH};
pub use error::{CoreError, StorageError, UniqueCodeError};
pub use issuer::CodeIssuer;
pub use record::{CodeRecord, UniqueCodeResponse};
pub use repository::{Repository, COLLECTION};
pub use request::{CreateUniqueCodeRequest, NormalizedRequest, DEFAULT_LENGTH};

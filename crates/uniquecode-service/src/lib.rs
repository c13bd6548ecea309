//! Unique code service implementation.
//!
//! This crate wires a [`Generator`](uniquecode_generator::Generator), a
//! [`Repository`](uniquecode_core::Repository) and a
//! [`Clock`](uniquecode_core::Clock) into a
//! [`CodeIssuer`](uniquecode_core::CodeIssuer).

pub mod service;

pub use service::UniqueCodeService;

//! Core types shared across xpect facilities
//!
//! This crate provides foundational types used by the matcher engine,
//! the error facility and the logging facility:
//!
//! - **Value kinds**: `ValueKind`, the tag used to filter checks by value type
//! - **Schema constants**: Canonical field keys and event names

pub mod kind;
pub mod schema;

pub use kind::ValueKind;

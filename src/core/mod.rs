//! Core data types and structures
//!
//! This module contains the fundamental data types shared by the provider
//! and its consumers, separated from their implementation logic.

pub mod types;

pub use types::*;

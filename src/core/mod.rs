//! Core constants and foundational values
//!
//! This module contains the fundamental constants used throughout
//! the extraction strategies.

pub mod constants;

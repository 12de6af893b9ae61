//! Common utilities for the Parchment layout engine.
//!
//! This crate provides shared infrastructure used by all pipeline stages:
//! - **Warning System** - deduplicated reports of recoverable problems

pub mod warning;

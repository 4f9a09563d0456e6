//! Test fixtures providing reusable JSON definitions without database insertion.
//!
//! Segment, journey and user property definitions are stored as JSON columns. These
//! fixtures return well-formed (and deliberately malformed) definitions so tests do not
//! need to spell out the nested node structure each time.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let definition = fixture::segment::trait_definition("plan", "premium");
//! let broken = fixture::journey::invalid_definition();
//! ```

pub mod journey;
pub mod segment;
pub mod user_property;

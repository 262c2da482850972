//! # skillnow-core
//!
//! Core types shared across all SkillNow crates:
//! - Record structs for the three tables (users, projects, assignments)
//! - Joined views returned by the assignment endpoints
//! - Cross-cutting error types
//! - HTTP response envelopes

pub mod entities;
pub mod errors;
pub mod responses;

//! Domain types for narrative orchestration.

pub mod outcome;

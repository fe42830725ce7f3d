//! Route modules.

pub mod fragments;
pub mod health;
pub mod hunt;

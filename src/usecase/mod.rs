//! Usecase layer: application workflows + events.

pub mod components;
pub mod event;
pub mod stats;
pub mod traversal;

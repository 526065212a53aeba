//! Summarization pipeline
//!
//! Stage orchestration, observer hooks, the scorer seam, and the
//! configuration layer with its validation rules.

pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

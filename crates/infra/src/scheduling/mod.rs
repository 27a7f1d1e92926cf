//! Timing infrastructure for the validation poll loop

pub mod timer;

pub use timer::TokioPollTimer;

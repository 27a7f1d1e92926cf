//! Package validation workflow

pub mod state;

pub use state::ValidationState;

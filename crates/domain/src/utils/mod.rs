//! Pure helper functions

pub mod package_name;

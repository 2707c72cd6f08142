pub mod clone;
pub mod diff;

//! stencil: bootstrap new projects from a template directory and keep shared
//! files in sync across sibling projects.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CloneOptions, CloneOutcome, DiffEntry, DiffOptions, DiffOutcome, DiffReport, clone_project,
    diff_file, load_config,
};
pub use domain::{AppError, SiblingGroup, StencilConfig, Visibility};

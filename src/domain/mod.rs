pub mod binary_filter;
pub mod configuration;
pub mod error;
pub mod project_name;
pub mod sibling;

pub use binary_filter::BinaryFilter;
pub use configuration::{CONFIG_FILE, StencilConfig, Visibility, parse_config_content};
pub use error::AppError;
pub use project_name::ProjectName;
pub use sibling::{SiblingGroup, SiblingProjects};

//! Tool configuration, read from `stencil.toml`.

use serde::Deserialize;

use crate::domain::binary_filter::DEFAULT_BINARY_EXTENSIONS;
use crate::domain::{AppError, BinaryFilter, SiblingProjects};

/// File name looked up in the template directory when `--config` is absent.
pub const CONFIG_FILE: &str = "stencil.toml";

/// Follow-up checklist shown after a successful clone.
pub const DEFAULT_NEXT_STEPS_URL: &str = "https://www.bbkane.com/blog/go-project-notes/#steps";

/// Visibility of the remote repository created on publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn from_name(name: &str) -> Option<Visibility> {
        match name.to_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// Flag understood by `gh repo create`.
    pub fn gh_flag(&self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StencilConfig {
    /// Literal text replaced with the new project name. Defaults to the
    /// template directory's name.
    pub token: Option<String>,
    pub prompt_if_name_missing: bool,
    pub strict_on_command_failure: bool,
    pub visibility: Visibility,
    pub log_to_file: bool,
    pub topic: String,
    pub next_steps_url: String,
    /// Files deleted from the fresh copy, relative to its root.
    pub bootstrap_scripts: Vec<String>,
    pub binary_extensions: Vec<String>,
    /// Diff viewer program followed by any fixed leading arguments.
    pub diff_tool: Vec<String>,
    pub siblings: SiblingProjects,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            token: None,
            prompt_if_name_missing: true,
            strict_on_command_failure: true,
            visibility: Visibility::Private,
            log_to_file: false,
            topic: "go".to_string(),
            next_steps_url: DEFAULT_NEXT_STEPS_URL.to_string(),
            bootstrap_scripts: vec!["rename.py".to_string(), "diff_file.py".to_string()],
            binary_extensions: DEFAULT_BINARY_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            diff_tool: vec!["delta".to_string()],
            siblings: SiblingProjects::default(),
        }
    }
}

impl StencilConfig {
    pub fn binary_filter(&self) -> BinaryFilter {
        BinaryFilter::new(&self.binary_extensions)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(token) = &self.token
            && token.is_empty()
        {
            return Err(AppError::config_error("token must not be empty"));
        }
        if self.diff_tool.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(AppError::config_error("diff_tool must name a program"));
        }
        for script in &self.bootstrap_scripts {
            if script.trim().is_empty() || script.split(['/', '\\']).any(|part| part == "..") {
                return Err(AppError::config_error(format!(
                    "bootstrap script '{}' must be a relative path inside the template",
                    script
                )));
            }
        }
        self.siblings.validate()
    }
}

/// Parse and validate `stencil.toml` content.
pub fn parse_config_content(content: &str) -> Result<StencilConfig, AppError> {
    let config: StencilConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

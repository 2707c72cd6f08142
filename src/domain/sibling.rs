use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use crate::domain::AppError;

/// Which sibling projects the file differ visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiblingGroup {
    /// Union of libraries and command-line tools.
    All,
    /// Library projects.
    Libs,
    /// Command-line tool projects.
    Clis,
}

impl SiblingGroup {
    pub const ALL: [SiblingGroup; 3] = [SiblingGroup::All, SiblingGroup::Libs, SiblingGroup::Clis];

    pub fn name(&self) -> &'static str {
        match self {
            SiblingGroup::All => "all",
            SiblingGroup::Libs => "libs",
            SiblingGroup::Clis => "clis",
        }
    }

    pub fn from_name(name: &str) -> Option<SiblingGroup> {
        match name.to_lowercase().as_str() {
            "all" => Some(SiblingGroup::All),
            "libs" | "lib" => Some(SiblingGroup::Libs),
            "clis" | "cli" => Some(SiblingGroup::Clis),
            _ => None,
        }
    }
}

impl fmt::Display for SiblingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static catalog of sibling projects, split into libraries and tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiblingProjects {
    pub libs: Vec<String>,
    pub clis: Vec<String>,
}

impl Default for SiblingProjects {
    fn default() -> Self {
        Self {
            libs: vec!["gocolor".into(), "logos".into(), "warg".into()],
            clis: vec![
                "enventory".into(),
                "fling".into(),
                "grabbit".into(),
                "toddlerevents".into(),
            ],
        }
    }
}

impl SiblingProjects {
    /// Reject catalogs where a project is both a library and a tool.
    pub fn validate(&self) -> Result<(), AppError> {
        let libs: BTreeSet<&str> = self.libs.iter().map(String::as_str).collect();
        if let Some(shared) = self.clis.iter().find(|name| libs.contains(name.as_str())) {
            return Err(AppError::config_error(format!(
                "Sibling project '{}' is listed under both libs and clis",
                shared
            )));
        }
        Ok(())
    }

    /// Sorted, de-duplicated project names for a group.
    pub fn resolve(&self, group: SiblingGroup) -> Vec<String> {
        let names: BTreeSet<&String> = match group {
            SiblingGroup::All => self.libs.iter().chain(self.clis.iter()).collect(),
            SiblingGroup::Libs => self.libs.iter().collect(),
            SiblingGroup::Clis => self.clis.iter().collect(),
        };
        names.into_iter().cloned().collect()
    }
}

use std::{fmt::Display, path::PathBuf};

use crate::error::{ScaffoldError, ScaffoldErrorTypes};

pub const MANIFEST_FILE: &str = "package.json";
pub const TAILWIND_CONFIG_FILE: &str = "tailwind.config.js";

/// A project name as given on the command line. Only emptiness is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: &str) -> Result<Self, ScaffoldError> {
        if name.is_empty() {
            return Err(ScaffoldError::new(
                ScaffoldErrorTypes::MissingName,
                "No project name supplied",
            ));
        }
        Ok(ProjectName(name.to_owned()))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a project lives. All paths hang off `base`; nothing here
/// touches the process working directory.
#[derive(Debug, Clone)]
pub struct Project {
    name: ProjectName,
    base: PathBuf,
}

impl Project {
    pub fn new(name: ProjectName, base: PathBuf) -> Self {
        Project { name, base }
    }
    pub fn get_name(&self) -> &ProjectName {
        &self.name
    }
    /// The directory this tool creates.
    pub fn root(&self) -> PathBuf {
        self.base.join(self.name.as_str())
    }
    /// The generator writes the app into a directory of the same name.
    pub fn app_dir(&self) -> PathBuf {
        self.root().join(self.name.as_str())
    }
    pub fn manifest_path(&self) -> PathBuf {
        self.app_dir().join(MANIFEST_FILE)
    }
    pub fn tailwind_config_path(&self) -> PathBuf {
        self.app_dir().join(TAILWIND_CONFIG_FILE)
    }
    pub fn stylesheet_path(&self) -> PathBuf {
        self.app_dir().join("src").join("index.css")
    }
    pub fn component_path(&self) -> PathBuf {
        self.app_dir().join("src").join("App.jsx")
    }
}

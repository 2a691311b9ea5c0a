use std::{fmt::Display, io, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldErrorTypes {
    MissingName,
    WorkingDirectory,
    DirectoryWrite,
    FileRead,
    FileWrite,
    ManifestParse,
    ManifestField,
    CommandSpawn,
    CommandFailed,
}

#[derive(Debug)]
pub struct ScaffoldError {
    pub typ: ScaffoldErrorTypes,
    pub msg: String,
    // exit code of the external command, when there was one
    pub code: Option<i32>,
}

impl ScaffoldError {
    pub fn new(typ: ScaffoldErrorTypes, msg: impl Into<String>) -> Self {
        ScaffoldError {
            typ,
            msg: msg.into(),
            code: None,
        }
    }

    pub fn io(typ: ScaffoldErrorTypes, path: &Path, e: io::Error) -> Self {
        Self::new(typ, format!("{:?}: {}", path, e))
    }

    pub fn exit_code(&self) -> i32 {
        match self.code {
            Some(code) if code != 0 => code,
            _ => 1,
        }
    }
}

impl Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for ScaffoldError {}

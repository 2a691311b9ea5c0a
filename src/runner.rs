use std::{path::Path, process::Command};

use crate::error::{ScaffoldError, ScaffoldErrorTypes};

/// Runs one external command to completion in `cwd`.
pub trait Runner {
    fn run(&mut self, cwd: &Path, program: &str, args: &[String]) -> Result<(), ScaffoldError>;
}

/// Spawns real processes. stdio is inherited so the tools talk straight
/// to the terminal, and there is no timeout.
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&mut self, cwd: &Path, program: &str, args: &[String]) -> Result<(), ScaffoldError> {
        let line = command_line(program, args);
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| {
                ScaffoldError::new(
                    ScaffoldErrorTypes::CommandSpawn,
                    format!("Couldn't run `{}` in {:?}: {}", line, cwd, e),
                )
            })?;
        if status.success() {
            return Ok(());
        }
        let mut err = ScaffoldError::new(
            ScaffoldErrorTypes::CommandFailed,
            format!("`{}` failed ({})", line, status),
        );
        err.code = status.code();
        Err(err)
    }
}

pub fn command_line(program: &str, args: &[String]) -> String {
    let mut parts = vec![program.to_owned()];
    parts.extend(args.iter().map(|a| {
        if a.contains(char::is_whitespace) {
            format!("\"{}\"", a)
        } else {
            a.clone()
        }
    }));
    parts.join(" ")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::ScaffoldErrorTypes;

    fn run(program: &str, args: &[&str]) -> Result<(), ScaffoldError> {
        let dir = tempfile::tempdir().unwrap();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        SystemRunner.run(dir.path(), program, &args)
    }

    #[test]
    fn success() {
        assert!(run("true", &[]).is_ok());
    }

    #[test]
    fn nonzero_exit_keeps_code() {
        let err = run("sh", &["-c", "exit 3"]).unwrap_err();
        assert_eq!(err.typ, ScaffoldErrorTypes::CommandFailed);
        assert_eq!(err.code, Some(3));
        assert_eq!(err.exit_code(), 3);
        assert!(err.msg.contains("sh -c \"exit 3\""), "{}", err);
    }

    #[test]
    fn missing_program() {
        let err = run("create-site-no-such-tool", &["--version"]).unwrap_err();
        assert_eq!(err.typ, ScaffoldErrorTypes::CommandSpawn);
        assert_eq!(err.code, None);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn runs_in_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec!["-c".to_owned(), "touch here".to_owned()];
        SystemRunner.run(dir.path(), "sh", &args).unwrap();
        assert!(dir.path().join("here").is_file());
    }
}

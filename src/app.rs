use std::env;

use clap::ArgMatches;
use console::style;

use crate::{
    config::Config,
    error::{ScaffoldError, ScaffoldErrorTypes},
    project::{Project, ProjectName},
    runner::SystemRunner,
    scaffold::Scaffolder,
};

fn handle_result<T>(res: Result<T, ScaffoldError>) -> Result<T, i32> {
    res.map_err(|e| {
        eprintln!("{} {}", style("ERROR:").red().bold(), e);
        e.exit_code()
    })
}

fn create(conf: Config, name: &str) -> Result<(), i32> {
    let name = handle_result(ProjectName::parse(name))?;
    println!("Creating project '{}'...", name);

    let base = handle_result(env::current_dir().map_err(|e| {
        ScaffoldError::new(
            ScaffoldErrorTypes::WorkingDirectory,
            format!("Couldn't resolve the current directory: {}", e),
        )
    }))?;
    let mut scaffolder = Scaffolder::new(Project::new(name, base), conf, SystemRunner);
    handle_result(scaffolder.run())?;

    println!("{} {}", style("Done:").green().bold(), scaffolder.project().root().display());
    Ok(())
}

/// Runs the command line and returns the process exit code.
pub fn handle(conf: Config, matches: ArgMatches) -> i32 {
    let name = matches
        .get_one::<String>("project-name")
        .map(String::as_str)
        .unwrap_or("");
    match create(conf, name) {
        Ok(()) => 0,
        Err(code) => code,
    }
}

use std::{fmt::Display, fs, path::PathBuf};

use console::style;

use crate::{
    config::Config,
    error::{ScaffoldError, ScaffoldErrorTypes},
    manifest::{self, ManifestEdit},
    project::Project,
    runner::{command_line, Runner},
    templates,
};

/// One unit of work. A step either succeeds or stops the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    CreateDir(PathBuf),
    Run {
        cwd: PathBuf,
        program: String,
        args: Vec<String>,
    },
    PatchManifest(PathBuf),
    Write {
        path: PathBuf,
        contents: &'static str,
    },
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::CreateDir(path) => write!(f, "create {}", path.display()),
            Step::Run { program, args, .. } => write!(f, "$ {}", command_line(program, args)),
            Step::PatchManifest(path) => write!(f, "expose dev server in {}", path.display()),
            Step::Write { path, .. } => write!(f, "write {}", path.display()),
        }
    }
}

/// The full sequence for `project`, in execution order.
pub fn plan(project: &Project, config: &Config) -> Vec<Step> {
    let name = project.get_name().as_str();
    let root = project.root();
    let app = project.app_dir();
    let run = |cwd: &PathBuf, program: &str, args: &[&str]| Step::Run {
        cwd: cwd.clone(),
        program: program.to_owned(),
        args: args.iter().map(|a| a.to_string()).collect(),
    };
    let npm = config.package_manager.as_str();
    let git = config.git.as_str();
    let deploy = config.deploy_cli.as_str();
    let branch = config.branch.as_str();

    vec![
        Step::CreateDir(root.clone()),
        run(
            &root,
            npm,
            &["create", "vite@latest", name, "--", "--template", config.template.as_str()],
        ),
        run(&app, npm, &["install"]),
        Step::PatchManifest(project.manifest_path()),
        run(&app, npm, &["install", "-D", "tailwindcss", "postcss", "autoprefixer"]),
        run(&app, config.package_runner.as_str(), &["tailwindcss", "init", "-p"]),
        Step::Write {
            path: project.tailwind_config_path(),
            contents: templates::TAILWIND_CONFIG,
        },
        Step::Write {
            path: project.stylesheet_path(),
            contents: templates::INDEX_CSS,
        },
        Step::Write {
            path: project.component_path(),
            contents: templates::APP_JSX,
        },
        // publish
        run(&app, git, &["init"]),
        run(
            &app,
            config.hosting_cli.as_str(),
            &["repo", "create", name, "--public", "--source=.", "--remote=origin"],
        ),
        run(&app, git, &["add", "."]),
        run(&app, git, &["commit", "-m", config.initial_commit_message.as_str()]),
        run(&app, git, &["push", "-u", "origin", branch]),
        run(&app, npm, &["run", "build"]),
        // deploy; init may leave files behind, so commit again before deploying
        run(&app, deploy, &["init"]),
        run(&app, git, &["add", "."]),
        run(&app, git, &["commit", "-m", config.deploy_commit_message.as_str()]),
        run(&app, git, &["push", "origin", branch]),
        run(&app, deploy, &["deploy", "--prod"]),
        run(&app, deploy, &["open:site"]),
    ]
}

pub struct Scaffolder<R: Runner> {
    project: Project,
    config: Config,
    runner: R,
}

impl<R: Runner> Scaffolder<R> {
    pub fn new(project: Project, config: Config, runner: R) -> Self {
        Scaffolder {
            project,
            config,
            runner,
        }
    }
    pub fn project(&self) -> &Project {
        &self.project
    }
    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Executes every step in order and stops at the first failure.
    /// Work already done is left in place.
    pub fn run(&mut self) -> Result<(), ScaffoldError> {
        let steps = plan(&self.project, &self.config);
        let total = steps.len();
        for (i, step) in steps.iter().enumerate() {
            println!(
                "{} {}",
                style(format!("[{}/{}]", i + 1, total)).bold().dim(),
                style(step).cyan()
            );
            self.execute(step)?;
        }
        Ok(())
    }

    fn execute(&mut self, step: &Step) -> Result<(), ScaffoldError> {
        match step {
            Step::CreateDir(path) => fs::create_dir(path)
                .map_err(|e| ScaffoldError::io(ScaffoldErrorTypes::DirectoryWrite, path, e)),
            Step::Run { cwd, program, args } => self.runner.run(cwd, program, args),
            Step::PatchManifest(path) => {
                let edit = manifest::patch_file(path)?;
                match (&edit, edit.notice()) {
                    (ManifestEdit::Unrecognized(_), Some(msg)) => eprintln!(
                        "{} {} in {:?}",
                        style("WARNING:").yellow().bold(),
                        msg,
                        path
                    ),
                    (_, Some(msg)) => println!("{}", msg),
                    _ => {}
                }
                Ok(())
            }
            Step::Write { path, contents } => fs::write(path, contents)
                .map_err(|e| ScaffoldError::io(ScaffoldErrorTypes::FileWrite, path, e)),
        }
    }
}

use clap::{command, Arg, Command};

pub fn build() -> Command {
    command!()
        .about("Create a Vite + React site with Tailwind CSS, push it to GitHub and deploy it to Netlify")
        .arg(
            // not required here: a missing name is reported by the app with exit code 1
            Arg::new("project-name")
                .num_args(1)
                .required(false)
                .help("name of the project, its directory and its GitHub repository"),
        )
        .after_help("Needs npm, git, gh and netlify on PATH, logged in where that applies")
}

/// Names of the external tools and the fixed values passed to them.
#[derive(Debug, Clone)]
pub struct Config {
    pub package_manager: String, // installs dependencies and runs scripts
    pub package_runner: String,  // runs a package binary (tailwind init)
    pub git: String,
    pub hosting_cli: String, // creates the remote repository
    pub deploy_cli: String,
    pub template: String, // vite template selector
    pub branch: String,
    pub initial_commit_message: String,
    pub deploy_commit_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            package_manager: "npm".into(),
            package_runner: "npx".into(),
            git: "git".into(),
            hosting_cli: "gh".into(),
            deploy_cli: "netlify".into(),
            template: "react".into(),
            branch: "main".into(),
            initial_commit_message: "Initial commit".into(),
            deploy_commit_message: "netlify".into(),
        }
    }
}

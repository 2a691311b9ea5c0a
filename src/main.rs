use std::process::exit;

use create_site::{app, cli, config::Config};

fn main() {
    let matches = cli::build().get_matches();
    exit(app::handle(Config::default(), matches));
}

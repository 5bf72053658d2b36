mod app;
mod cli;
mod config;
mod consts;
mod convert;
mod error;
mod output;
mod reveal;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use reveal::SystemRevealer;

fn main() {
    let cli = Cli::parse();
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    if let Err(e) = app::run(&cli, &SystemRevealer) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

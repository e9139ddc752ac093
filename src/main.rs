use clap::Parser;
use log::{error, info};

use notedesk::{App, Cli, Config};

fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    let config = Config::from_overrides(cli.notes_dir, cli.theme);
    info!("Using notes directory: {}", config.notes_dir.display());

    let result = App::new(config).and_then(|mut app| app.run(cli.command));

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

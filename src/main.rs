use assistant::application::Session;
use assistant::cli::{Cli, Repl};
use assistant::error::AssistantError;
use assistant::infrastructure::{Config, FileStore};
use assistant::logging;
use clap::Parser;
use std::io;
use tracing::info;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), AssistantError> {
    let config = Config::resolve(cli.overrides())?;
    info!(
        contacts = %config.contacts_file.display(),
        notes = %config.notes_file.display(),
        "resolved data files"
    );

    // A corrupt file stops here, before anything can overwrite it
    let mut session = Session::open(FileStore::from_config(&config))?;

    let stdin = io::stdin();
    Repl::new(stdin.lock(), io::stdout(), &mut session).run()?;

    session.close()
}

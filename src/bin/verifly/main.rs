use anyhow::Result;

mod args;
mod commands;
mod logging;
mod output;

use args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(cmd) = cli.cmd else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    };

    let verdict = match cmd {
        Commands::Verify {
            email,
            offline,
            format,
            remote,
        } => Some(commands::verify(&email, offline, format, &remote)?),
        Commands::Offline { email, format } => Some(commands::offline(&email, format)?),
        Commands::VerifyCsv {
            file,
            output,
            offline,
            remote,
        } => {
            commands::verify_csv(&file, output.as_deref(), offline, &remote)?;
            None
        }
        Commands::Config { key } => {
            commands::config(key.as_deref())?;
            None
        }
        Commands::Stats { remote } => {
            commands::stats(&remote)?;
            None
        }
    };

    // codes de sortie : 0 OK, 2 adresse non valide, 1 fatal
    if verdict.is_some_and(|c| !c.is_valid()) {
        std::process::exit(2);
    }
    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result, bail};
use verifly::{
    Classification, Config, RemoteClient, Selector, VerifyConfig, default_config_path,
    default_output_path, read_address_file, resolve_credential, run_batch, summarize,
    write_results_to_path,
};

use crate::args::{OutputFormat, RemoteArgs};
use crate::output;

fn load_config() -> Result<(std::path::PathBuf, Config)> {
    let path = default_config_path()?;
    let config = Config::load(&path)?;
    Ok((path, config))
}

fn build_selector(remote: &RemoteArgs, offline: bool) -> Result<Selector> {
    let (_, config) = load_config()?;
    let credential = resolve_credential(remote.key.as_deref(), &config);
    Selector::connect(VerifyConfig::new(credential, offline), remote.options())
        .context("cannot initialize the HTTP client")
}

/// Vérifie une adresse; renvoie la classification pour le code de sortie.
pub fn verify(
    email: &str,
    offline: bool,
    format: OutputFormat,
    remote: &RemoteArgs,
) -> Result<Classification> {
    let selector = build_selector(remote, offline)?;
    if !selector.mode().is_offline() {
        eprintln!("Verifying...");
    }

    // lot d'une seule adresse
    let (outcome, _) = run_batch(&[email], &selector, |_, _| {});
    let classification = outcome
        .entries
        .into_iter()
        .next()
        .context("no classification produced")?;

    output::print_classification(&classification, format)?;
    if selector.config().credential.is_none() && format == OutputFormat::Human {
        output::print_key_tip();
    }
    Ok(classification)
}

pub fn offline(email: &str, format: OutputFormat) -> Result<Classification> {
    let classification = Selector::offline().classify(email);
    output::print_classification(&classification, format)?;
    Ok(classification)
}

pub fn verify_csv(
    file: &Path,
    output_path: Option<&Path>,
    offline: bool,
    remote: &RemoteArgs,
) -> Result<()> {
    // fichier absent -> erreur fatale avant tout traitement
    let addresses = read_address_file(file)?;
    let selector = build_selector(remote, offline)?;
    let output_path = output_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(file));

    println!("Input:  {}", file.display());
    println!("Output: {}", output_path.display());
    if selector.mode().is_offline() {
        println!("Mode:   offline");
    }
    println!("Processing...");

    let (outcome, tally) = run_batch(&addresses, &selector, |done, total| {
        eprint!("\rProcessed: {done}/{total}");
    });
    if !addresses.is_empty() {
        eprintln!();
    }

    write_results_to_path(&outcome, &output_path)?;

    println!();
    println!("Done!");
    println!("{}", summarize(&tally));
    println!();
    println!("Output saved to: {}", output_path.display());
    Ok(())
}

pub fn config(key: Option<&str>) -> Result<()> {
    let (path, mut config) = load_config()?;
    match key {
        Some(key) => {
            if config.set_api_key(key).is_none() {
                bail!("API key is empty");
            }
            config.save(&path)?;
            println!("API key saved");
            println!("Config stored at: {}", path.display());
        }
        None => {
            let current = config
                .credential()
                .map(|c| c.masked())
                .unwrap_or_else(|| "Not set".to_string());
            println!("Current API key: {current}");
            println!();
            println!("To set: verifly config --key YOUR_API_KEY");
        }
    }
    Ok(())
}

pub fn stats(remote: &RemoteArgs) -> Result<()> {
    let (_, config) = load_config()?;
    let credential =
        resolve_credential(remote.key.as_deref(), &config).ok_or(verifly::Error::MissingCredential)?;
    let client = RemoteClient::from_options(remote.options())?;

    eprintln!("Fetching stats...");
    let stats = client
        .fetch_stats(&credential)
        .map_err(verifly::Error::from)?;
    output::print_stats(&stats);
    Ok(())
}

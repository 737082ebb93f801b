use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use verifly::RemoteOptions;
use verifly::remote::DEFAULT_API_BASE;

#[derive(Parser)]
#[command(
    name = "verifly",
    version,
    about = "Vérifie des adresses e-mail (API Verifly ou heuristique hors-ligne)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// verbosité des logs sur stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Options partagées par les commandes qui peuvent appeler l'API.
#[derive(Args, Debug, Clone)]
pub struct RemoteArgs {
    /// clé API à utiliser (prend le pas sur la config)
    #[arg(short = 'k', long = "key")]
    pub key: Option<String>,

    /// URL de base de l'API
    #[arg(long, env = "VERIFLY_API_BASE", default_value = DEFAULT_API_BASE, hide = true)]
    pub api_base: String,

    /// timeout des requêtes en ms (0 = aucun)
    #[arg(long = "timeout", default_value_t = 30_000)]
    pub timeout_ms: u64,
}

impl RemoteArgs {
    pub fn options(&self) -> RemoteOptions {
        RemoteOptions {
            base_url: self.api_base.clone(),
            timeout_ms: self.timeout_ms,
            ..RemoteOptions::default()
        }
    }
}

/// Rendu d'une classification sur stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// vérifie une adresse (API si une clé est configurée, sinon hors-ligne)
    Verify {
        email: String,
        /// n'utilise que la validation hors-ligne
        #[arg(long)]
        offline: bool,
        /// format de sortie
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
        #[command(flatten)]
        remote: RemoteArgs,
    },
    /// validation rapide hors-ligne
    Offline {
        email: String,
        /// format de sortie
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },
    /// vérifie un fichier (une adresse par ligne) et écrit un CSV de résultats
    #[command(name = "verify-csv")]
    VerifyCsv {
        file: PathBuf,
        /// fichier de sortie (défaut: <fichier>-verified.csv)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
        /// n'utilise que la validation hors-ligne
        #[arg(long)]
        offline: bool,
        #[command(flatten)]
        remote: RemoteArgs,
    },
    /// enregistre ou affiche la clé API
    Config {
        /// clé API à enregistrer
        #[arg(long)]
        key: Option<String>,
    },
    /// statistiques d'usage du compte (nécessite une clé)
    Stats {
        #[command(flatten)]
        remote: RemoteArgs,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}

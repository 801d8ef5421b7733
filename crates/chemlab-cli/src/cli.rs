use chemlab::core::catalog::CategoryFilter;
use chemlab::core::models::atom::Reactant;
use chemlab::engine::explain::ProcessKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hydrocarbon Lab - browse ball-and-stick hydrocarbon models, run halogen substitutions and ask for explanations of what happened.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Options that feed the layered configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the user configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S explanation.language=Vietnamese
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Never contact the explanation service, even if an API key is available.
    #[arg(long, global = true)]
    pub offline: bool,

    /// API key for the explanation service.
    /// Falls back to the GEMINI_API_KEY or API_KEY environment variables.
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the language explanations are written in.
    #[arg(long, global = true, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Override the explanation model name.
    #[arg(long, global = true, value_name = "NAME")]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog molecules, optionally filtered by name, formula or category.
    List(ListArgs),
    /// Show one molecule in detail together with an explanation of it.
    Show(ShowArgs),
    /// Substitute hydrogen atoms of a molecule with a halogen.
    React(ReactArgs),
    /// Ask about running an industrial process (cracking or reforming) on a molecule.
    Process(ProcessArgs),
    /// Start an interactive lab session.
    Lab(LabArgs),
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive text matched against names and formulas.
    #[arg(short = 'f', long = "filter", value_name = "TEXT", default_value = "")]
    pub query: String,

    /// Restrict to one category: all, alkane, alkene or alkyne.
    #[arg(short = 'k', long, value_name = "CATEGORY", default_value = "all")]
    pub category: CategoryFilter,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Catalog id of the molecule (e.g. `methane`, `n-butane`).
    #[arg(value_name = "MOLECULE")]
    pub molecule: String,

    /// Print the molecule as JSON instead of a human-readable summary.
    #[arg(long)]
    pub json: bool,

    /// Skip the explanation request.
    #[arg(long)]
    pub no_explain: bool,
}

/// Arguments for the `react` subcommand.
#[derive(Args, Debug)]
pub struct ReactArgs {
    /// Catalog id of the substrate molecule.
    #[arg(value_name = "MOLECULE")]
    pub molecule: String,

    /// Halogen reagent: chlorine (cl, cl2) or bromine (br, br2).
    #[arg(short, long, value_name = "REACTANT")]
    pub reactant: Reactant,

    /// Hydrogen atom id to substitute. Repeat to substitute several atoms in order.
    #[arg(short, long = "target", value_name = "ATOM", required = true)]
    pub targets: Vec<String>,

    /// List the atoms of the product after the reaction.
    #[arg(long)]
    pub atoms: bool,

    /// Skip the explanation request.
    #[arg(long)]
    pub no_explain: bool,
}

/// Arguments for the `process` subcommand.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Catalog id of the molecule.
    #[arg(value_name = "MOLECULE")]
    pub molecule: String,

    /// The process to run: cracking or reforming.
    #[arg(value_name = "PROCESS")]
    pub process: ProcessKind,
}

/// Arguments for the `lab` subcommand.
#[derive(Args, Debug)]
pub struct LabArgs {
    /// Molecule to start with. Defaults to the first catalog entry.
    #[arg(value_name = "MOLECULE")]
    pub molecule: Option<String>,
}

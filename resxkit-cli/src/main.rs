use std::path::PathBuf;

use clap::{Parser, Subcommand};
use resxkit_cli::{
    CliConfig,
    classify::run_classify_command,
    debug::run_debug_command,
    edit::{EditOperation, run_edit_command},
    export::run_export_command,
    load_inputs,
    view::print_view,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter, e.g. `resxkit=debug`.
const LOG_ENV: &str = "RESXKIT_LOG";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ./resxkit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log loading and editing steps to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the base name and locale derived from file names.
    Classify {
        /// File names to classify (need not exist)
        #[arg(required = true)]
        names: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View .resx files grouped by base name.
    View {
        /// The input files to view
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<String>,

        /// Only show the group with this base name
        #[arg(short, long)]
        group: Option<String>,

        /// Display full value without truncation
        #[arg(long)]
        full: bool,
    },

    /// Print how the inputs group together.
    Groups {
        /// The input files to group
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<String>,

        /// Output the session report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add, change or remove one entry.
    Edit {
        #[command(subcommand)]
        action: EditAction,
    },

    /// Re-serialize the inputs into a directory.
    Export {
        /// The input files to export
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<String>,

        /// Directory to write into (created if missing)
        #[arg(short, long)]
        output: String,
    },

    /// Dump the loaded session as JSON.
    Debug {
        /// The input files to load
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum EditAction {
    /// Add a new entry at the top of the file.
    Add {
        #[arg(short, long)]
        input: String,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        value: String,
        #[arg(short, long, default_value = "")]
        comment: String,
        /// Write here instead of editing in place
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Change the value (and optionally comment) of an existing entry.
    Set {
        #[arg(short, long)]
        input: String,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        value: String,
        /// New comment; the current one is kept when omitted
        #[arg(short, long)]
        comment: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Remove an entry.
    Remove {
        #[arg(short, long)]
        input: String,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args, config: CliConfig) -> Result<(), String> {
    match args.commands {
        Commands::Classify { names, json } => run_classify_command(names, json),
        Commands::View { input, group, full } => {
            let (session, _) = load_inputs(&config, &input)?;
            print_view(&session, group.as_deref(), full || config.full)
        }
        Commands::Groups { input, json } => {
            let (session, _) = load_inputs(&config, &input)?;
            let report = session.report();
            if json {
                let out = serde_json::to_string_pretty(&report)
                    .map_err(|e| format!("Error serializing to JSON: {}", e))?;
                println!("{}", out);
            } else {
                print!("{}", report);
            }
            Ok(())
        }
        Commands::Edit { action } => match action {
            EditAction::Add {
                input,
                name,
                value,
                comment,
                output,
            } => run_edit_command(
                &config,
                input,
                name,
                EditOperation::Add { value, comment },
                output,
            ),
            EditAction::Set {
                input,
                name,
                value,
                comment,
                output,
            } => run_edit_command(
                &config,
                input,
                name,
                EditOperation::Set { value, comment },
                output,
            ),
            EditAction::Remove {
                input,
                name,
                output,
            } => run_edit_command(&config, input, name, EditOperation::Remove, output),
        },
        Commands::Export { input, output } => run_export_command(&config, input, output).map(|_| ()),
        Commands::Debug { input, output } => run_debug_command(&config, input, output),
    }
}

fn main() {
    let args = Args::parse();

    let config = match CliConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(args.verbose || config.verbose);

    if let Err(e) = run(args, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

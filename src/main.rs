use carbontrack::cmd;
use carbontrack::cmd::{CompanyArgs, EstimateArgs, RegisterArgs, ReportOptions};
use carbontrack::machine::MachineForm;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// CO₂ emission tracking for industrial machine fleets
///
/// carbontrack estimates daily, monthly and yearly emissions from machine
/// energy use, suggests reductions, and builds fleet reports.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Fleet document to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    fleet: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate emissions for one machine without storing it
    Estimate {
        #[command(flatten)]
        args: EstimateArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the company or update its details
    Company {
        #[command(flatten)]
        args: CompanyArgs,
    },

    /// Register a machine and store its emissions
    Register {
        #[command(flatten)]
        args: RegisterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List, search or remove machines
    Machines {
        /// Only machines whose name or type contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Remove the machine with this id
        #[arg(long, value_name = "ID", conflicts_with = "search")]
        remove: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show fleet totals and charts
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a fleet report
    Report {
        /// Report file (default: CarbonTrack_Report_<millis>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the report as JSON and print check results as JSON
        #[arg(long)]
        json: bool,

        /// Check yearly emissions against the budget (fail if exceeded)
        #[arg(long)]
        check: bool,
    },

    /// Export machines as CSV
    Export {
        /// Only machines whose name or type contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// CSV file (default: machines.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize carbontrack configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let fleet = cli.fleet.as_deref();
    let result = match cli.command {
        Some(Commands::Estimate { args, json }) => cmd::cmd_estimate(&args, json),
        Some(Commands::Company { args }) => cmd::cmd_company(args, fleet),
        Some(Commands::Register { args, json }) => {
            cmd::cmd_register(&MachineForm::from(args), fleet, json)
        }
        Some(Commands::Machines {
            search,
            remove,
            json,
        }) => cmd::cmd_machines(search.as_deref(), remove.as_deref(), fleet, json),
        Some(Commands::Dashboard { json }) => cmd::cmd_dashboard(fleet, json),
        Some(Commands::Report {
            output,
            json,
            check,
        }) => cmd::cmd_report(
            &ReportOptions {
                output,
                json,
                check,
            },
            fleet,
        ),
        Some(Commands::Export { search, output }) => {
            cmd::cmd_export(search.as_deref(), output.as_deref(), fleet)
        }
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell, &mut Cli::command());
            Ok(())
        }
        None => {
            println!("carbontrack v{}", env!("CARGO_PKG_VERSION"));
            println!("CO₂ emission tracking for industrial machine fleets\n");
            println!("Usage: carbontrack <COMMAND>\n");
            println!("Commands:");
            println!("  estimate   Estimate emissions for one machine");
            println!("  company    Create the company or update its details");
            println!("  register   Register a machine");
            println!("  machines   List, search or remove machines");
            println!("  dashboard  Show fleet totals and charts");
            println!("  report     Generate a fleet report");
            println!("  export     Export machines as CSV");
            println!("  init       Initialize carbontrack configuration");
            println!("\nRun 'carbontrack <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use carbontrack::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

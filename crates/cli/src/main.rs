use anyhow::Result;
use clap::{Parser, Subcommand};
use ipconf::commands::{
    generate_command, init_config_command, inspect_command, project_info_command, ConfigOverrides,
    OrderArg, PolicyArg,
};
use ipconf::init_logging;

/// IP / interconnect configuration generator.
///
/// This CLI is a thin wrapper around `ipconf-core` (exposed in code as `ipconf_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "ipconf",
    version,
    about = "Resolve IPs and interconnects from a workbook into a config report",
    long_about = None
)]
struct Cli {
    /// Emit debug diagnostics (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the workbook and write the fixed-width config report.
    ///
    /// This will:
    /// - Locate the workbook (first .yaml/.yml/.json in the root, or `--input`).
    /// - Assign canonical ids (M1.., S1..) and propagate interconnect properties.
    /// - Write the report (default `config.txt` in the root).
    Generate {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Workbook file, or a directory to search. Defaults to the root.
        #[arg(long)]
        input: Option<String>,

        /// Report path. Defaults to the config's `output_file`.
        #[arg(long)]
        output: Option<String>,

        /// Role resolution policy (overrides the config file).
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Report row order (overrides the config file).
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Also print the report to stdout.
        #[arg(long, default_value_t = false)]
        preview: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the original-name to canonical-id mapping without writing a report.
    Inspect {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Workbook file, or a directory to search. Defaults to the root.
        #[arg(long)]
        input: Option<String>,

        /// Role resolution policy (overrides the config file).
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Row order (overrides the config file).
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a default `ipconf.json` in the project root.
    InitConfig {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Overwrite an existing config.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Show the effective configuration and the workbook that would be used.
    ProjectInfo {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to generating in the current directory if no command is provided.
    let command = cli.command.unwrap_or(Command::Generate {
        root: ".".to_string(),
        input: None,
        output: None,
        policy: None,
        order: None,
        preview: false,
        json: false,
    });

    match command {
        Command::Generate { root, input, output, policy, order, preview, json } => {
            generate_command(
                &root,
                input.as_deref(),
                output.as_deref(),
                ConfigOverrides { policy, order },
                preview,
                json,
            )?;
        }
        Command::Inspect { root, input, policy, order, json } => {
            inspect_command(&root, input.as_deref(), ConfigOverrides { policy, order }, json)?
        }
        Command::InitConfig { root, force } => init_config_command(&root, force)?,
        Command::ProjectInfo { root, json } => project_info_command(&root, json)?,
    }

    Ok(())
}

#![forbid(unsafe_code)]
//! AdCopy Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use adcopy::commands::{
    execute_check, execute_extract, execute_rules, execute_validate, CheckOptions,
    ExtractOptions, RulesOptions, ValidateOptions,
};
use adcopy::config::DEFAULT_CONFIG_FILE;
use adcopy::{Channel, Config, FieldKind};

#[derive(Parser)]
#[command(name = "adcopy")]
#[command(about = "Extract channel guidelines from instruction prose and check ad copy")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the constraints found in an instruction document
    Extract {
        /// Instruction document (`-` reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a single piece of copy
    Validate {
        /// Copy text to check
        text: String,

        /// Channel the copy is written for
        #[arg(long, value_enum)]
        channel: Option<ChannelArg>,

        /// Field the text fills
        #[arg(long, value_enum)]
        field: FieldArg,

        /// Instruction document (default: prompt store entry for the channel)
        #[arg(long)]
        instructions: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a raw generation response and check every copy in it
    Check {
        /// Raw response file (`-` reads stdin)
        #[arg(default_value = "-")]
        response: PathBuf,

        /// Channel the copy is written for
        #[arg(long, value_enum)]
        channel: Option<ChannelArg>,

        /// Instruction document (default: prompt store entry for the channel)
        #[arg(long)]
        instructions: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the guidelines in effect for a channel
    Rules {
        /// Channel to show
        #[arg(long, value_enum)]
        channel: Option<ChannelArg>,

        /// Instruction document (default: prompt store entry for the channel)
        #[arg(long)]
        instructions: Option<PathBuf>,

        /// Show only the built-in table
        #[arg(long)]
        builtin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Ad placement channel
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ChannelArg {
    Naver,
    Kakao,
    Social,
    Landing,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Naver => Channel::Naver,
            ChannelArg::Kakao => Channel::Kakao,
            ChannelArg::Social => Channel::Social,
            ChannelArg::Landing => Channel::Landing,
        }
    }
}

/// Copy field
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FieldArg {
    Title,
    Description,
    Main,
    Sub,
    Full,
}

impl From<FieldArg> for FieldKind {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Title => FieldKind::Title,
            FieldArg::Description => FieldKind::Description,
            FieldArg::Main => FieldKind::Main,
            FieldArg::Sub => FieldKind::Sub,
            FieldArg::Full => FieldKind::Full,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "adcopy=debug" } else { "adcopy=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Channel from the command line, else from config
fn pick_channel(arg: Option<ChannelArg>, config: &Config) -> Channel {
    match arg.map(Channel::from).or(config.default_channel) {
        Some(channel) => channel,
        None => {
            eprintln!("{} No channel given", style("✗").red());
            eprintln!("  Pass --channel or set \"defaultChannel\" in {}", DEFAULT_CONFIG_FILE);
            std::process::exit(2);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = Config::load_or_default(&cli.config)?;

    let passed = match cli.command {
        Commands::Extract { input, json } => {
            execute_extract(ExtractOptions { input, json })?;
            true
        }

        Commands::Validate { text, channel, field, instructions, json } => {
            let options = ValidateOptions {
                channel: pick_channel(channel, &config),
                field: field.into(),
                text,
                instructions,
                json,
            };
            execute_validate(options, &config)?
        }

        Commands::Check { response, channel, instructions, json } => {
            let options = CheckOptions {
                channel: pick_channel(channel, &config),
                response,
                instructions,
                json,
            };
            execute_check(options, &config)?
        }

        Commands::Rules { channel, instructions, builtin, json } => {
            let options = RulesOptions {
                channel: pick_channel(channel, &config),
                instructions,
                builtin,
                json,
            };
            execute_rules(options, &config)?;
            true
        }
    };

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}

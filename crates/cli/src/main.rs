use std::io::{self, Write};

use anyhow::Context;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use kyuuid_uuid::{UuidFormat, UuidResult, UuidValue};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;

use config::CliConfig;

/// Rendered in every format in the FORMATS section of the long help
const EXAMPLE_UUID: UuidValue =
    UuidValue::from_integer_pair(0x2D3FB6B6090D4FBD, 0x8AC2428DC536FFE8);

#[derive(Debug, Parser)]
#[command(name = "kyuuid", version)]
#[command(about = "A utility for generating & formatting UUIDs")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate random (version 4) UUIDs [default if no command supplied]
    Generate(GenerateArgs),
    /// Convert a UUID from any supported format to another
    Convert {
        /// The output format
        #[arg(long, value_enum, default_value_t = FormatArg::Standard)]
        to: FormatArg,
        /// The UUID to convert; its format is detected
        uuid: String,
    },
}

#[derive(Debug, Clone, Args)]
struct GenerateArgs {
    /// The output format of the UUID(s). See FORMATS for more info
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// The number of UUIDs to generate, each printed on its own line
    #[arg(long, default_value_t = 1)]
    repeat: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// 2D3FB6B6-090D-4FBD-8AC2-428DC536FFE8
    Standard,
    /// LT+2tgkNT72KwkKNxTb/6A==
    Base64,
    /// LT+2tgkNT72KwkKNxTb/6A
    #[value(name = "truncatedBase64")]
    TruncatedBase64,
}

impl From<FormatArg> for UuidFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Standard => UuidFormat::Standard,
            FormatArg::Base64 => UuidFormat::Base64,
            FormatArg::TruncatedBase64 => UuidFormat::TruncatedBase64,
        }
    }
}

fn formats_discussion() -> String {
    let mut discussion = format!(
        "FORMATS:\n\nThis utility offers {} different formatting options:\n",
        UuidFormat::ALL.len()
    );
    for format in UuidFormat::ALL {
        discussion.push_str(&format!(
            "\n    {}:  {}\n        Example: {}\n",
            format.as_str(),
            format.summary(),
            format.render(&EXAMPLE_UUID)
        ));
    }
    discussion
}

fn parse_cli() -> Cli {
    let matches = Cli::command()
        .after_long_help(formats_discussion())
        .get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// `config` is only resolved by commands that read it, and only once clap has handled
/// `--help` and `--version`.
fn run(
    cli: Cli,
    config: impl FnOnce() -> UuidResult<CliConfig>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Generate(cli.generate)) {
        Commands::Generate(args) => generate(&args, config, out),
        Commands::Convert { to, uuid } => convert(to.into(), &uuid, out),
    }
}

fn generate(
    args: &GenerateArgs,
    config: impl FnOnce() -> UuidResult<CliConfig>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let format = match args.format {
        Some(format) => format.into(),
        None => {
            let config = config().context("invalid configuration")?;
            debug!(?config);
            config.default_format()
        }
    };
    let count = args.repeat.max(1);
    debug!(%format, count, "generating");

    for _ in 0..count {
        writeln!(out, "{}", format.render(&UuidValue::new_v4()))?;
    }
    Ok(())
}

fn convert(target: UuidFormat, uuid: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let converted = target
        .convert(uuid)
        .with_context(|| format!("could not convert '{uuid}' to {target}"))?;
    debug!(input = uuid, %target, output = %converted, "converted");

    writeln!(out, "{converted}")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("kyuuid=warn"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = parse_cli();
    let stdout = io::stdout();
    run(cli, CliConfig::from_env, &mut stdout.lock())
}

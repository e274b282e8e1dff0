use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use tagfind::config::{Delimiters, SessionConfig};
use tagfind::finder::{underscores_to_spaces, Dialect, TagTableBuilder, TokenFinder};
use tagfind::input::{
    DirectInputStrategy, InputStrategy, MultilineInputStrategy, OnelineInputStrategy,
    RustylineSource,
};
use tagfind::session::{
    ClipboardHook, DualInputSession, HistorySeed, NonInteractiveSession, Session,
    SingleInputSession,
};
use tagfind::setop::{SetCalculator, SetOperation};
use tagfind::ui::{PromptLabels, PromptStyle};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "tagfind", version, about = "Toolbox for delimited prompts")]
pub struct Cli {
    /// Show extra logs; give twice for debug output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Delimiter splitting the input prompt into tokens
    #[arg(short = 'd', long, default_value = ",")]
    pub input_delimiter: String,

    /// Delimiter joining the output records
    #[arg(short = 'D', long, default_value = "\n", hide_default_value = true)]
    pub output_delimiter: String,

    /// Separator between a token and its count in one record
    #[arg(short = 'F', long, default_value = ",")]
    pub output_field_separator: String,

    /// Output format: csv, a1111 or a1111compat
    #[arg(long, default_value = "csv")]
    pub formatter: String,

    /// Label shown while waiting for a prompt
    #[arg(short = 'p', long, default_value = ">>> ")]
    pub ps1: String,

    /// Label shown for continuation lines
    #[arg(long, default_value = "... ")]
    pub ps2: String,

    /// Confirm every prompt with a single line instead of EOF
    #[arg(short = 'l', long)]
    pub one_line: bool,

    /// Do not show the banner in interactive mode
    #[arg(long)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Output the number of posts for every tag of a prompt
    Tfind(TfindArgs),
    /// Apply a set operation to two prompts
    Setop(SetopArgs),
}

#[derive(Args, Debug)]
pub struct TfindArgs {
    /// Delimited text file mapping tags to counts
    pub infile: PathBuf,

    /// Provide a REPL to play with prompts
    #[arg(short, long)]
    pub interactive: bool,

    /// Field number (from 1) holding the tag
    #[arg(short, long, default_value_t = 1)]
    pub key_field: usize,

    /// Field number (from 1) holding the count
    #[arg(short = 'v', long, default_value_t = 2)]
    pub value_field: usize,

    /// Field separator of the tag file
    #[arg(short = 'f', long, default_value = ",")]
    pub dict_field_separator: String,

    /// Directory for the scratch file seeding line-editing history
    #[arg(short, long, default_value_os_t = std::env::temp_dir())]
    pub tempdir: PathBuf,

    /// Copy every result to the clipboard if possible
    #[arg(short, long)]
    pub clipboard: bool,
}

#[derive(Args, Debug)]
pub struct SetopArgs {
    /// Operation applied to the first and second prompt
    #[arg(long, value_enum)]
    pub op: SetOperation,

    /// Ask for prompt pairs in a REPL
    #[arg(short, long)]
    pub interactive: bool,

    /// Second prompt when not interactive; the first is read from stdin
    #[arg(long, required_unless_present = "interactive")]
    pub with: Option<String>,
}

impl Cli {
    pub fn delimiters(&self) -> Delimiters {
        Delimiters::new(
            &self.input_delimiter,
            &self.output_delimiter,
            Some(self.output_field_separator.clone()),
        )
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            ps1: self.ps1.clone(),
            ps2: self.ps2.clone(),
            banner: !self.no_banner,
        }
    }
}

/// Builds the session selected by the command line.
pub fn build_session(cli: &Cli) -> Result<Session> {
    let dialect: Dialect = cli.formatter.parse()?;
    let delimiters = cli.delimiters();
    let config = cli.session_config();

    match &cli.command {
        Commands::Tfind(args) => build_tfind(args, delimiters, dialect, &config, cli.one_line),
        Commands::Setop(args) => build_setop(args, delimiters, &config, cli.one_line),
    }
}

fn build_tfind(
    args: &TfindArgs,
    delimiters: Delimiters,
    dialect: Dialect,
    config: &SessionConfig,
    one_line: bool,
) -> Result<Session> {
    let finder = TokenFinder::new(delimiters, dialect)?;

    let file = File::open(&args.infile)
        .with_context(|| format!("failed to open {}", args.infile.display()))?;
    let table = TagTableBuilder::new(args.dict_field_separator.as_str())
        .key_field(args.key_field)
        .value_field(args.value_field)
        .normalize_keys(underscores_to_spaces)
        .build_from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load {}", args.infile.display()))?;
    info!(tags = table.len(), "loaded {}", args.infile.display());

    let strategy = input_strategy(args.interactive, one_line, config)?;

    if !args.interactive {
        let execute = Box::new(move |prompt: &str| finder.execute(prompt, &table));
        let mut session = NonInteractiveSession::new(strategy, execute);
        if args.clipboard {
            session = session.with_hook(Box::<ClipboardHook>::default());
        }
        return Ok(Session::NonInteractive(session));
    }

    let seed = HistorySeed::new(args.tempdir.clone(), table.tags().map(str::to_string));
    let execute = Box::new(move |prompt: &str| finder.execute(prompt, &table));
    let mut session = SingleInputSession::new(strategy, execute)
        .banner(config.banner)
        .with_hook(Box::new(seed));
    if args.clipboard {
        session = session.with_hook(Box::<ClipboardHook>::default());
    }
    Ok(Session::Single(session))
}

fn build_setop(
    args: &SetopArgs,
    delimiters: Delimiters,
    config: &SessionConfig,
    one_line: bool,
) -> Result<Session> {
    let calculator = SetCalculator::new(delimiters, args.op)?;
    let strategy = input_strategy(args.interactive, one_line, config)?;

    if args.interactive {
        let execute = Box::new(move |first: &str, second: &str| calculator.execute(first, second));
        let session = DualInputSession::new(strategy, execute).banner(config.banner);
        return Ok(Session::Dual(session));
    }

    let with = args
        .with
        .clone()
        .context("--with is required unless --interactive is given")?;
    let execute = Box::new(move |prompt: &str| calculator.execute(prompt, &with));
    Ok(Session::NonInteractive(NonInteractiveSession::new(
        strategy, execute,
    )))
}

fn input_strategy(
    interactive: bool,
    one_line: bool,
    config: &SessionConfig,
) -> Result<Box<dyn InputStrategy>> {
    if !interactive {
        let strategy =
            DirectInputStrategy::from_reader(Box::new(io::stdin())).interruptible(sigint()?);
        return Ok(Box::new(strategy));
    }

    let labels = PromptLabels::new(&config.ps1, &config.ps2, PromptStyle::detect());
    let source = Box::new(RustylineSource::new().context("failed to start the line editor")?);
    Ok(if one_line {
        Box::new(OnelineInputStrategy::new(source, labels))
    } else {
        Box::new(MultilineInputStrategy::new(source, labels))
    })
}

/// Forwards every Ctrl-C to the returned channel instead of killing the
/// process, so a pending stdin read can still flush one result.
fn sigint() -> Result<Receiver<()>> {
    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        if tx.send(()).is_err() {
            debug!("interrupt received after input was read");
        }
    })
    .context("failed to install the interrupt handler")?;
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tfind_defaults() {
        let cli = Cli::try_parse_from(["tagfind", "tfind", "tags.csv"]).unwrap();
        let Commands::Tfind(args) = &cli.command else {
            panic!("Expected tfind");
        };
        assert_eq!(args.key_field, 1);
        assert_eq!(args.value_field, 2);
        assert_eq!(args.dict_field_separator, ",");
        assert!(!args.interactive);
        assert_eq!(cli.delimiters(), Delimiters::default());
        assert_eq!(cli.session_config(), SessionConfig::default());
    }

    #[test]
    fn test_global_and_subcommand_flags() {
        let cli = Cli::try_parse_from([
            "tagfind", "-vv", "-d", ";", "-F", ":", "--no-banner", "tfind", "-i", "-k", "2",
            "-v", "1", "tags.csv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.input_delimiter, ";");
        assert!(!cli.session_config().banner);
        let Commands::Tfind(args) = &cli.command else {
            panic!("Expected tfind");
        };
        assert!(args.interactive);
        assert_eq!((args.key_field, args.value_field), (2, 1));
    }

    #[test]
    fn test_setop_requires_with_unless_interactive() {
        assert!(Cli::try_parse_from(["tagfind", "setop", "--op", "union"]).is_err());
        assert!(Cli::try_parse_from(["tagfind", "setop", "--op", "union", "-i"]).is_ok());

        let cli = Cli::try_parse_from([
            "tagfind",
            "setop",
            "--op",
            "symmetric-difference",
            "--with",
            "a, b",
        ])
        .unwrap();
        let Commands::Setop(args) = &cli.command else {
            panic!("Expected setop");
        };
        assert_eq!(args.op, SetOperation::SymmetricDifference);
        assert_eq!(args.with.as_deref(), Some("a, b"));
    }

    #[test]
    fn test_unknown_formatter_fails_at_startup() {
        let cli =
            Cli::try_parse_from(["tagfind", "--formatter", "json", "tfind", "missing.csv"]).unwrap();
        let err = build_session(&cli).err().unwrap();
        assert!(err.to_string().contains("no formatter applicable: json"));
    }

    #[test]
    fn test_empty_input_delimiter_fails_at_startup() {
        let cli = Cli::try_parse_from(["tagfind", "-d", "", "setop", "--op", "union", "--with", "a"])
            .unwrap();
        let err = build_session(&cli).err().unwrap();
        assert!(err.to_string().contains("input delimiter must not be empty"));
    }

    #[test]
    fn test_missing_table_fails_at_startup() {
        let cli = Cli::try_parse_from(["tagfind", "tfind", "/nonexistent/tags.csv"]).unwrap();
        let err = build_session(&cli).err().unwrap();
        assert!(err.to_string().contains("failed to open"));
    }
}

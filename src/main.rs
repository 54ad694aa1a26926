//! Command-line interface for the slugline binary.
//!
//! The CLI exposes one-shot conversion (`slugify`), the example gallery
//! (`samples`), and an interactive terminal session (`session`) driven by the
//! same state machine a graphical front end would use.

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use slugline::{
    Clipboard, Error, HELP, MemoryClipboard, RenderMode, Session, SessionCommand, SessionConfig,
    SessionHandle, SessionRules, SessionState, SlugRecord, channel, load_config, parse_command,
    samples, slugify_file, submit_text, write_state,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Command line interface for converting text into slugs.
#[derive(Debug, Parser,)]
#[command(name = "slugline", version, about = "Turn free-form text into URL-safe slugs")]
struct Cli
{
    /// Optional YAML file overriding session defaults.
    #[arg(long = "config", value_name = "PATH", global = true, env = "SLUGLINE_CONFIG")]
    config: Option<PathBuf,>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Convert text given as arguments or read line by line from a file.
    Slugify(SlugifyArgs,),
    /// Print the built-in example gallery.
    Samples(OutputArgs,),
    /// Start an interactive editing session on stdin/stdout.
    Session(OutputArgs,),
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `slugify` subcommand.
struct SlugifyArgs
{
    /// Text to convert. Multiple values are joined with spaces.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    text: Vec<String,>,

    /// File whose lines are converted independently.
    #[arg(long = "file", value_name = "PATH")]
    file: Option<PathBuf,>,

    /// Emit JSON records instead of bare slugs.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args, Default,)]
struct OutputArgs
{
    /// Emit JSON instead of human-readable text.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, validation and output errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path,) => load_config(path,)?,
        None => SessionConfig::default(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Slugify(args,) => run_slugify(&mut handle, &args, &config,),
        Command::Samples(args,) => write_samples(&mut handle, args.json,),
        Command::Session(args,) => run_session(&mut handle, &config, render_mode(args.json,),),
    }
}

fn render_mode(json: bool,) -> RenderMode
{
    if json { RenderMode::Json } else { RenderMode::Text }
}

fn run_slugify<W: Write,>(writer: &mut W, args: &SlugifyArgs, config: &SessionConfig,) -> Result<(), Error,>
{
    if let Some(path,) = args.file.as_deref() {
        let records = slugify_file(path,)?;
        return write_records(writer, &records, args.json,);
    }

    let text = args.text.join(" ",);
    let slug = submit_text(&text, &config.empty_input_message,)?;
    if args.json {
        let record = SlugRecord {
            input: text, char_count: slug.chars().count(), slug,
        };
        serde_json::to_writer(&mut *writer, &record,)?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "{slug}")?;
    }
    Ok((),)
}

fn write_records<W: Write,>(writer: &mut W, records: &[SlugRecord], json: bool,) -> Result<(), Error,>
{
    if json {
        serde_json::to_writer(&mut *writer, records,)?;
        writeln!(writer)?;
        return Ok((),);
    }

    for record in records {
        writeln!(writer, "{}", record.slug)?;
    }
    Ok((),)
}

fn write_samples<W: Write,>(writer: &mut W, json: bool,) -> Result<(), Error,>
{
    let rows = samples();
    if json {
        serde_json::to_writer_pretty(&mut *writer, &rows,)?;
        writeln!(writer)?;
        return Ok((),);
    }

    for row in rows {
        writeln!(writer, "{:?} -> {} ({} chars)", row.input, row.slug, row.char_count)?;
    }
    Ok((),)
}

fn run_session<W: Write,>(writer: &mut W, config: &SessionConfig, mode: RenderMode,) -> Result<(), Error,>
{
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let session = Session::new(SessionRules::from(config,), open_clipboard(),);
    let input = BufReader::new(tokio::io::stdin(),);

    writeln!(writer, "{HELP}")?;
    let final_state = runtime.block_on(drive_session(session, input, writer, mode,),)?;
    write_state(writer, &final_state, mode,)
}

#[cfg(feature = "clipboard")]
fn open_clipboard() -> Box<dyn Clipboard,>
{
    match slugline::SystemClipboard::new() {
        Ok(clipboard,) => Box::new(clipboard,),
        Err(error,) => {
            warn!("{}; copies stay inside this session", error);
            Box::new(MemoryClipboard::new(),)
        }
    }
}

#[cfg(not(feature = "clipboard"))]
fn open_clipboard() -> Box<dyn Clipboard,>
{
    warn!("built without system clipboard support; copies stay inside this session");
    Box::new(MemoryClipboard::new(),)
}

/// Runs the driver and the line-oriented front end side by side on the
/// current task and returns the state left when the user quits.
async fn drive_session<C, R, W,>(
    session: Session<C,>,
    input: R,
    writer: &mut W,
    mode: RenderMode,
) -> Result<SessionState, Error,>
where
    C: Clipboard,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (driver, handle,) = channel(session,);
    let (final_state, outcome,) = tokio::join!(driver.run(), front_end(handle, input, writer, mode));
    outcome?;
    Ok(final_state,)
}

async fn front_end<R, W,>(
    handle: SessionHandle,
    input: R,
    writer: &mut W,
    mode: RenderMode,
) -> Result<(), Error,>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut states = handle.subscribe();
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Some(SessionCommand::Trigger(trigger))) => handle.send(trigger).await?,
                    Ok(Some(SessionCommand::Show)) => write_state(writer, &handle.current(), mode)?,
                    Ok(Some(SessionCommand::Help)) => writeln!(writer, "{HELP}")?,
                    Ok(Some(SessionCommand::Quit)) => break,
                    Ok(None) => {}
                    Err(error) => writeln!(writer, "{}", error.to_display_string())?,
                }
            }
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = states.borrow_and_update().clone();
                write_state(writer, &state, mode)?;
            }
        }
    }

    Ok((),)
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Cursor, path::Path};

    use clap::Parser;
    use slugline::{MemoryClipboard, RenderMode, Session, SessionConfig, SessionRules};
    use tempfile::tempdir;

    use super::{Cli, Command, drive_session, run_slugify, write_samples};

    fn slugify_args(arguments: &[&str],) -> super::SlugifyArgs
    {
        let cli = Cli::try_parse_from(
            [env!("CARGO_PKG_NAME"), "slugify",].into_iter().chain(arguments.iter().copied(),),
        )
        .expect("failed to parse CLI",);

        match cli.command {
            Command::Slugify(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn cli_accepts_global_config()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "samples", "--config", "slugline.yaml",],)
            .expect("failed to parse CLI",);

        assert_eq!(cli.config.as_deref(), Some(Path::new("slugline.yaml")));
        assert!(matches!(cli.command, Command::Samples(_)));
    }

    #[test]
    fn text_and_file_conflict()
    {
        let result = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "slugify",
            "hello",
            "--file",
            "titles.txt",
        ],);
        assert!(result.is_err());
    }

    #[test]
    fn slugify_joins_arguments()
    {
        let args = slugify_args(&["Hello", "World!",],);
        let mut buffer = Cursor::new(Vec::new(),);
        run_slugify(&mut buffer, &args, &SessionConfig::default(),).expect("slugify failed",);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert_eq!(output, "hello-world\n");
    }

    #[test]
    fn slugify_json_reports_char_count()
    {
        let args = slugify_args(&["Café Olé", "--json",],);
        let mut buffer = Cursor::new(Vec::new(),);
        run_slugify(&mut buffer, &args, &SessionConfig::default(),).expect("slugify failed",);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert_eq!(output, "{\"input\":\"Café Olé\",\"slug\":\"cafe-ole\",\"char_count\":8}\n");
    }

    #[test]
    fn slugify_rejects_blank_text_with_configured_message()
    {
        let args = slugify_args(&["   ",],);
        let config = SessionConfig {
            empty_input_message: "Nothing to convert".to_owned(),
            ..SessionConfig::default()
        };
        let mut buffer = Cursor::new(Vec::new(),);

        let error = run_slugify(&mut buffer, &args, &config,).expect_err("blank input",);
        assert_eq!(error.to_display_string(), "Nothing to convert");
    }

    #[test]
    fn slugify_file_prints_one_slug_per_line()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("titles.txt",);
        fs::write(&path, "Hello World!\nThis & That\n",).expect("failed to write input",);

        let args = slugify_args(&["--file", path.to_str().expect("utf8",),],);
        let mut buffer = Cursor::new(Vec::new(),);
        run_slugify(&mut buffer, &args, &SessionConfig::default(),).expect("slugify failed",);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert_eq!(output, "hello-world\nthis-that\n");
    }

    #[test]
    fn samples_text_lists_gallery()
    {
        let mut buffer = Cursor::new(Vec::new(),);
        write_samples(&mut buffer, false,).expect("samples failed",);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert!(output.contains("\"Xin chào!\" -> xin-chao (8 chars)"));
    }

    #[tokio::test]
    async fn scripted_session_reaches_final_state()
    {
        let script: &[u8] = b"input Hello World!\nsubmit\nedit hello-rust\nbogus\nquit\n";
        let session = Session::new(SessionRules::default(), MemoryClipboard::new(),);
        let mut output = Vec::new();

        let state = drive_session(session, script, &mut output, RenderMode::Text,)
            .await
            .expect("session failed",);

        assert_eq!(state.raw_input, "Hello World!");
        assert_eq!(state.slug, "hello-rust");
        assert_eq!(state.char_count, 10);

        let printed = String::from_utf8(output,).expect("invalid UTF-8",);
        assert!(printed.contains("unknown command 'bogus'"));
    }
}

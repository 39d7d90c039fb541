use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use termkit::ansi::{clear, color, cursor, style};
use termkit::config::Config;
use termkit::errors::Result;
use termkit::input::{KeyReader, RawModeGuard, is_key_pressed};
use termkit::key::{KeyCode, KeyEvent};
use termkit::logging::SessionLog;
use termkit::term::{self, AltScreenGuard};

#[derive(Debug, Clone)]
struct CliArgs {
    config_path: PathBuf,
    logs_dir: PathBuf,
    grammar: Option<String>,
}

impl CliArgs {
    fn from_env() -> std::result::Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    fn from_args<I>(mut args: I) -> std::result::Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut parsed = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Self::next_value(&mut args, "--config")?.into();
                }
                "--logs" => {
                    parsed.logs_dir = Self::next_value(&mut args, "--logs")?.into();
                }
                "--grammar" => {
                    parsed.grammar = Some(Self::next_value(&mut args, "--grammar")?);
                }
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }
        Ok(parsed)
    }

    fn next_value<I>(args: &mut I, flag: &str) -> std::result::Result<String, String>
    where
        I: Iterator<Item = String>,
    {
        args.next().ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn defaults() -> Self {
        Self {
            config_path: PathBuf::from("termkit.json"),
            logs_dir: PathBuf::from("logs"),
            grammar: None,
        }
    }
}

fn main() {
    let args = match CliArgs::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let config = match Config::load_from(&args.config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let log = SessionLog::new(&args.logs_dir, config.file_logging_enabled);

    if let Err(err) = run(&args, &config, &log) {
        log.error(format!("{err}"));
        std::process::exit(1);
    }
}

fn run(args: &CliArgs, config: &Config, log: &SessionLog) -> Result<()> {
    let reader = match &args.grammar {
        Some(name) => KeyReader::with_grammar_name(name)?,
        None => config.key_reader()?,
    };

    let _raw = RawModeGuard::enter()?;
    let _alt = AltScreenGuard::enter();
    print_banner(&reader);
    log.info(format!("session started, grammar={}", reader.grammar_name()));

    loop {
        if !is_key_pressed()? {
            thread::sleep(Duration::from_millis(config.poll_interval_ms));
            continue;
        }
        let event = reader.poll()?;
        if event.code == KeyCode::None {
            continue;
        }
        show_event(&event);
        log.info(format!("{} value={}", event.code, event.value));
        if event.code == KeyCode::Escape {
            break;
        }
    }

    log.info("session ended");
    Ok(())
}

fn print_banner(reader: &KeyReader) {
    let size = term::size();
    let version = env!("CARGO_PKG_VERSION");
    print!("{}{}{}", clear::ALL_SCREEN, cursor::HIDE, cursor::move_to(1, 1));
    print!("{}termkit key viewer{} v{version}\r\n", style::BRIGHT, color::RESET);
    print!(
        "grammar: {}   terminal: {}x{}\r\n",
        reader.grammar_name(),
        size.cols,
        size.rows
    );
    print!(
        "{}press keys to see how they decode; Esc quits{}\r\n\r\n",
        style::DIM,
        color::RESET
    );
    let _ = io::stdout().flush();
}

fn show_event(event: &KeyEvent) {
    let shown = event
        .to_char()
        .map(|c| format!(" '{c}'"))
        .unwrap_or_default();
    print!(
        "{}{:<10}{} value={}{shown}\r\n",
        style::BRIGHT,
        event.code,
        color::RESET,
        event.value
    );
    let _ = io::stdout().flush();
}

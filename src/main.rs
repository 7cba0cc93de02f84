//! The `mathdown` binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use mathdown::nodes::Document;
use mathdown::options::{Parse, Render};
use mathdown::{format_html, format_text, parse_document, Options};

#[cfg(feature = "katex")]
use mathdown::adapters::{self, ReadinessGate};
#[cfg(feature = "katex")]
use mathdown::format_html_with_plugins;
#[cfg(feature = "katex")]
use mathdown::options::{MathPlugin, Plugins, RenderPlugins};
#[cfg(feature = "katex")]
use mathdown::plugins::katex::KatexAdapter;
#[cfg(feature = "katex")]
use std::time::Duration;

#[cfg(feature = "katex")]
const KATEX_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The Markdown file(s) to render; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Specify output format
    #[arg(
        short = 't',
        long = "to",
        value_enum,
        default_value = "html",
        value_name = "FORMAT"
    )]
    format: Format,

    /// Write output to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pair inline `$` delimiters naively instead of applying the
    /// currency-safe heuristics
    #[arg(long)]
    relaxed_dollar_matching: bool,

    /// Emit a stylable `<div class="spacer"></div>` for each blank line
    #[arg(long)]
    spacer_divs: bool,

    /// Typeset math spans with the bundled KaTeX engine instead of
    /// emitting literal-source fallbacks
    #[cfg(feature = "katex")]
    #[arg(long)]
    katex: bool,

    /// Read default command-line options from this file ("none" to
    /// disable)
    #[arg(long, value_name = "PATH", default_value = default_config_path())]
    config_file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
}

fn default_config_path() -> String {
    #[cfg(all(not(windows), not(target_arch = "wasm32")))]
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("mathdown") {
        if let Some(path) = xdg_dirs.find_config_file("config") {
            if let Some(path_str) = path.to_str() {
                return path_str.to_string();
            }
        }
    }
    "none".to_string()
}

/// Parses argv twice when a config file is in play: the file's contents
/// are spliced in front of the command-line arguments, so explicit
/// arguments win over configured ones.
fn build_cli() -> Result<Cli> {
    let cli = Cli::parse();
    if cli.config_file == "none" {
        return Ok(cli);
    }

    let contents = fs::read_to_string(&cli.config_file);
    let contents = match contents {
        Err(ref e) if e.kind() == io::ErrorKind::NotFound => return Ok(cli),
        _ => contents.with_context(|| format!("reading config file {}", cli.config_file))?,
    };
    let config_args = shell_words::split(&contents)
        .with_context(|| format!("parsing config file {}", cli.config_file))?;

    let mut argv: Vec<OsString> = env::args_os().collect();
    let program = if argv.is_empty() {
        OsString::from("mathdown")
    } else {
        argv.remove(0)
    };
    let mut merged = vec![program];
    merged.extend(config_args.into_iter().map(OsString::from));
    merged.extend(argv);
    Ok(Cli::parse_from(merged))
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = build_cli()?;

    let mut input = String::new();
    if cli.files.is_empty() {
        io::stdin()
            .read_to_string(&mut input)
            .context("reading standard input")?;
    } else {
        for path in &cli.files {
            let mut f = fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut input)
                .with_context(|| format!("reading {}", path.display()))?;
        }
    }

    let options = Options {
        parse: Parse {
            relaxed_dollar_matching: cli.relaxed_dollar_matching,
        },
        render: Render {
            spacer_divs: cli.spacer_divs,
        },
    };

    let doc = parse_document(&input, &options);

    let mut rendered = String::new();
    match cli.format {
        Format::Html => render_html(&cli, &doc, &options, &mut rendered)?,
        Format::Text => format_text(&doc, &options, &mut rendered)?,
    }

    match cli.output {
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("writing standard output")?,
        Some(ref path) => {
            fs::write(path, &rendered).with_context(|| format!("writing {}", path.display()))?
        }
    }

    Ok(())
}

#[cfg(feature = "katex")]
fn render_html(cli: &Cli, doc: &Document, options: &Options, output: &mut String) -> Result<()> {
    if cli.katex {
        let adapter = KatexAdapter::new()?;
        let readiness = adapters::wait_until_ready(
            &adapter,
            ReadinessGate::DEFAULT_INTERVAL,
            KATEX_LOAD_TIMEOUT,
        );
        let plugins = Plugins {
            render: RenderPlugins {
                math: Some(MathPlugin::with_readiness(&adapter, readiness)),
            },
        };
        format_html_with_plugins(doc, options, output, &plugins)?;
        return Ok(());
    }

    format_html(doc, options, output)?;
    Ok(())
}

#[cfg(not(feature = "katex"))]
fn render_html(_cli: &Cli, doc: &Document, options: &Options, output: &mut String) -> Result<()> {
    format_html(doc, options, output)?;
    Ok(())
}

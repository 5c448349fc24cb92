use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mdfootnote::adapters::pulldown::{PulldownAdapterOptions, to_html};
use mdfootnote::{LineEnding, Options};

/// Render markdown to HTML with GFM footnotes.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Markdown file to read (stdin when omitted).
    input: Option<PathBuf>,

    /// JSON file with compiler options; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefix for generated ids.
    #[arg(long)]
    id_prefix: Option<String>,

    /// Heading text of the footnote section.
    #[arg(long)]
    label: Option<String>,

    /// Heading tag of the footnote section.
    #[arg(long)]
    label_tag: Option<String>,

    /// aria-label of back-reference links.
    #[arg(long)]
    back_label: Option<String>,

    /// Use CRLF line endings.
    #[arg(long)]
    crlf: bool,
}

fn load_options(args: &Args) -> Result<Options, String> {
    let mut opts = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("invalid config {}: {e}", path.display()))?
        }
        None => Options::default(),
    };
    if let Some(prefix) = &args.id_prefix {
        opts.id_prefix = prefix.clone();
    }
    if let Some(label) = &args.label {
        opts.label = label.clone();
    }
    if let Some(tag) = &args.label_tag {
        opts.label_tag = tag.clone();
    }
    if let Some(back) = &args.back_label {
        opts.back_label = back.clone();
    }
    if args.crlf {
        opts.line_ending = LineEnding::CrLf;
    }
    Ok(opts)
}

fn run(args: Args) -> Result<(), String> {
    let opts = load_options(&args)?;

    let mut src = String::new();
    match &args.input {
        Some(path) => {
            src = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut src)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
        }
    }
    log::debug!("read {} bytes of markdown", src.len());

    let html =
        to_html(&src, &PulldownAdapterOptions::default(), opts).map_err(|e| e.to_string())?;
    std::io::stdout()
        .write_all(html.as_bytes())
        .map_err(|e| format!("failed to write output: {e}"))
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mdfootnote: {e}");
            ExitCode::FAILURE
        }
    }
}

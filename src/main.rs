//! mergedoc: merge a tree of annotated C/C++ snippets into one Markdown file.
//!
//! Runs a one-way pipeline:
//!
//! 1. **Collect**: walk the root, skip hidden directories, group `.c`/`.cpp`/
//!    `.h`/`.hpp` files by directory
//! 2. **Parse**: decode each file and split off its `/* name: / description: */`
//!    header
//! 3. **Render**: one `##` section per directory, one `###` entry per file
//! 4. **Write**: overwrite the output file, or report that nothing was found
//!
//! With no arguments it scans the working directory into `output.md`.

mod collect;
mod model;
mod parser;
mod render;
mod write;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mergedoc",
    about = "Merge annotated C/C++ source files into a single Markdown document"
)]
struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file
    #[arg(short = 'o', long, default_value = "output.md")]
    output: PathBuf,

    /// Document title (top-level heading)
    #[arg(short = 't', long, default_value = render::DEFAULT_TITLE)]
    title: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = run(&cli)?;
    println!("{}", outcome);
    Ok(())
}

fn run(cli: &Cli) -> Result<write::Outcome> {
    let groups = collect::collect(&cli.root)?;

    let mut parsed = Vec::with_capacity(groups.len());
    for group in groups {
        log::info!(
            "{}: {} file(s)",
            if group.label.is_empty() { render::ROOT_LABEL } else { group.label.as_str() },
            group.files.len()
        );
        parsed.push(group.try_map(|entry| parser::parse_file(&entry))?);
    }

    let document = render::render_document(&cli.title, &parsed);
    write::write_output(&cli.output, document.as_deref())
}

/// Map `-v` occurrences to a level; `RUST_LOG` still takes precedence.
fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

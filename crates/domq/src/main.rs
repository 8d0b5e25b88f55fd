// ABOUTME: CLI for running element lookups and string helpers against an HTML file or stdin.
// ABOUTME: Prints traversal results as JSON for inspection and scripting.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dom_utils::html::{parse_document, select_first, Html, HtmlNode};
use dom_utils::{
    closest_parent_element, main_app_container, not_base_page, reverse_query_selector, sanitize,
};
use serde_json::json;

/// Locate elements relative to a starting element in an HTML document.
#[derive(Parser, Debug)]
#[command(name = "domq")]
#[command(about = "Query HTML documents relative to a starting element", long_about = None)]
struct Args {
    /// HTML file to read. Use "-" (the default) to read from stdin.
    #[arg(long, global = true, default_value = "-")]
    html: String,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Nearest ancestor (inclusive) of the start element matching a selector.
    Closest {
        /// CSS selector picking the start element (first match in document order).
        #[arg(long)]
        from: String,
        /// CSS selector to look for.
        #[arg(long)]
        selector: String,
        /// Stop when an ancestor matches this selector first.
        #[arg(long)]
        stop: Option<String>,
    },
    /// Closest element by radiating outward: siblings and their subtrees, then ancestors.
    Reverse {
        #[arg(long)]
        from: String,
        #[arg(long)]
        selector: String,
        #[arg(long)]
        stop: Option<String>,
    },
    /// Application container enclosing the start element.
    AppContainer {
        #[arg(long)]
        from: String,
    },
    /// Escape HTML-significant characters in TEXT.
    Sanitize {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print whether URL is not the base page.
    NotBasePage {
        #[arg(allow_hyphen_values = true)]
        url: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.command {
        Command::Closest {
            from,
            selector,
            stop,
        } => {
            let doc = parse_document(&load_html(&args.html)?);
            let start = find_start(&doc, from)?;
            let found = closest_parent_element(&start, selector, stop.as_deref())?;
            print_found(found, args.compact)
        }
        Command::Reverse {
            from,
            selector,
            stop,
        } => {
            let doc = parse_document(&load_html(&args.html)?);
            let start = find_start(&doc, from)?;
            let found = reverse_query_selector(&start, selector, stop.as_deref())?;
            print_found(found, args.compact)
        }
        Command::AppContainer { from } => {
            let doc = parse_document(&load_html(&args.html)?);
            let start = find_start(&doc, from)?;
            print_found(main_app_container(&start)?, args.compact)
        }
        Command::Sanitize { text } => {
            println!("{}", sanitize(text));
            Ok(())
        }
        Command::NotBasePage { url } => {
            println!("{}", not_base_page(url));
            Ok(())
        }
    }
}

fn print_found(found: Option<HtmlNode<'_>>, compact: bool) -> Result<()> {
    log::debug!("lookup finished, found: {}", found.is_some());
    let output = json!({
        "found": found.is_some(),
        "element": found.map(|node| node.describe()),
    });

    if compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn find_start<'a>(doc: &'a Html, css: &str) -> Result<HtmlNode<'a>> {
    select_first(doc, css)?.ok_or_else(|| anyhow!("no element matches start selector {:?}", css))
}

fn load_html(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading HTML from stdin")?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    fs::read_to_string(&path).with_context(|| format!("reading {}", target))
}

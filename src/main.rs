use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use sevd::application::forms::{self, FormOptions};
use sevd::domain::catalog::{REQUEST, RESPONSE};
use sevd::interfaces::xml;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a document and print its canonical form
    Check {
        /// XML document to read
        file: PathBuf,

        /// Read the document as a Response_v1 instead of a Request_v1
        #[arg(long)]
        response: bool,
    },
    /// Print fresh identifiers in GUID layout
    Uuid {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Wrap an encrypted envelope into the hosted payment form
    Form {
        /// File holding the envelope returned by the encrypt endpoint
        file: PathBuf,

        #[arg(long)]
        redirect_url: String,

        #[arg(long, default_value = "Submit")]
        button: String,

        #[arg(long, default_value = "_blank")]
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Command::Check { file, response } => {
            let text = fs::read_to_string(&file).into_diagnostic()?;
            let schema = if response { &RESPONSE } else { &REQUEST };
            let (node, diagnostics) = xml::read_node(schema, &text)?;
            for diagnostic in &diagnostics {
                eprintln!("warning: {diagnostic}");
            }
            println!("{}", xml::to_xml_string(&node)?);
        }
        Command::Uuid { count } => {
            for _ in 0..count {
                println!("{}", forms::new_identifier());
            }
        }
        Command::Form {
            file,
            redirect_url,
            button,
            target,
        } => {
            let text = fs::read_to_string(&file).into_diagnostic()?;
            let envelope = forms::trim_xml(&text).unwrap_or(text.trim());
            let options = FormOptions::new(redirect_url, button).with_target(target);
            println!("{}", forms::html_form(envelope, &options));
        }
    }

    Ok(())
}

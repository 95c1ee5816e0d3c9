//! `pkw`: generate SEO keyword sets for purifier rental city pages.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use purifier_keywords::{
    CityCatalog, KeywordSet, KeywordSetGenerator, KwError, KwResult, Locality, Vocabulary,
    META_SEPARATOR,
};

#[derive(Parser)]
#[command(name = "pkw", version, about = "Purifier rental SEO keyword generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate keywords for a single locality.
    Generate {
        /// Locality (city) name, used verbatim.
        #[arg(long)]
        name: String,
        /// Sub-area of the locality. Repeatable.
        #[arg(long = "area")]
        areas: Vec<String>,
        /// Hand-authored phrase to include verbatim. Repeatable.
        #[arg(long = "phrase")]
        phrases: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Build a city catalog from a TOML config.
    Catalog {
        config: PathBuf,
        /// Print the keywords of one city instead of the summary.
        #[arg(long)]
        city: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the built-in vocabulary tables as JSON.
    Vocab,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One keyword per line.
    Text,
    Json,
    /// A single comma-separated line for a meta keywords tag.
    Meta,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> KwResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Generate {
            name,
            areas,
            phrases,
            format,
        } => {
            let locality = Locality::new(name)
                .with_areas(areas)
                .with_extra_phrases(phrases);
            let keywords = KeywordSetGenerator::new().generate(&locality)?;
            print_keywords(&mut out, &keywords, format)?;
        }
        Command::Catalog {
            config,
            city,
            format,
        } => {
            let catalog = CityCatalog::load(&config)?;
            match city {
                Some(slug) => {
                    let page = catalog
                        .get(&slug)
                        .ok_or_else(|| KwError::InvalidInput(format!("unknown city: {slug}")))?;
                    print_keywords(&mut out, &page.keywords, format)?;
                }
                None if format == Format::Json => {
                    serde_json::to_writer_pretty(&mut out, catalog.pages())?;
                    writeln!(out)?;
                }
                None => {
                    for page in catalog.pages() {
                        writeln!(
                            out,
                            "{}\t{}\t{}",
                            page.slug,
                            page.locality.name,
                            page.keywords.len()
                        )?;
                    }
                }
            }
        }
        Command::Vocab => {
            serde_json::to_writer_pretty(&mut out, &Vocabulary::builtin())?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn print_keywords(out: &mut impl Write, keywords: &KeywordSet, format: Format) -> KwResult<()> {
    match format {
        Format::Text => {
            for keyword in keywords.iter() {
                writeln!(out, "{keyword}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, keywords)?;
            writeln!(out)?;
        }
        Format::Meta => writeln!(out, "{}", keywords.to_meta_content(META_SEPARATOR))?,
    }
    Ok(())
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use serde_yaml::Value;
use tagsort_rs::error::TagsortError;
use tagsort_rs::expr;
use tagsort_rs::sorter::config::SorterConfig;
use tagsort_rs::sorter::matcher;
use tagsort_rs::sorter::note::NoteMeta;
use tagsort_rs::sorter::scan;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a rule expression against ad-hoc note data
    Eval {
        /// The rule expression, e.g. 'tag[work]&project[acme]'
        expression: String,

        /// A tag the note carries (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,

        /// A frontmatter entry as key=value (repeatable)
        #[arg(short, long)]
        meta: Vec<String>,
    },
    /// Show where each note in a vault would be moved
    Plan {
        /// Path to the YAML rules file
        #[arg(short, long)]
        rules: PathBuf,

        /// Path to the vault root
        #[arg(short, long)]
        vault: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval {
            expression,
            tag,
            meta,
        } => {
            let config = SorterConfig::default();
            let mut note = NoteMeta::default();
            for t in tag {
                note.tags.push(t.trim_start_matches('#').to_string());
            }
            for entry in meta {
                let Some((key, value)) = entry.split_once('=') else {
                    return Err(TagsortError::config(format!(
                        "Invalid --meta entry '{}', expected key=value",
                        entry
                    ))
                    .into());
                };
                note.front_matter.insert(
                    Value::String(key.to_string()),
                    Value::String(value.to_string()),
                );
            }

            let result = expr::matches(&expression, |literal| {
                matcher::literal_matches(literal, &note, &config)
            });
            println!("{}", result);
        }
        Commands::Plan { rules, vault } => {
            let config = SorterConfig::load(&rules)?;
            config.validate()?;
            log::info!(
                "Loaded {} rules, {} exclusions",
                config.rules.len(),
                config.excluded_folders.len()
            );

            let moves = scan::plan(&vault, &config)?;
            if moves.is_empty() {
                println!("Nothing to move.");
            }
            for planned in &moves {
                println!("{} -> {}", planned.note.display(), planned.folder);
            }
        }
    }

    Ok(())
}

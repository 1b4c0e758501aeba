mod config;

use crate::config::load_config;
use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{debug, warn};
use promz_core::file_storage::{self, find_promz_files};
use promz_core::{Content, Example, History, Metadata, Promz, PromzError, Variable};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version,
display_name = "promz",
bin_name = "promz",
about="Create, edit and validate .promz prompt documents",
long_about="Create, edit and validate .promz prompt documents", )]
struct Args {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Create a new document
    New {
        path: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(short = 'd', long)]
        description: String,
        #[arg(short = 'a', long)]
        author: Option<String>,
        #[arg(long = "doc-version")]
        doc_version: Option<String>,
        #[arg(short = 'p', long, default_value = "")]
        prompt: String,
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
        #[arg(short = 'o', long)]
        overwrite: bool,
    },
    /// Print the prompt text of a document
    Show {
        path: PathBuf,
        #[arg(short = 'e', long)]
        examples: bool,
        #[arg(short = 'c', long)]
        copy: bool,
    },
    /// Replace the prompt text of a document
    SetPrompt { path: PathBuf, text: String },
    AddExample {
        path: PathBuf,
        #[arg(short = 'i', long, default_value = "")]
        input: String,
        #[arg(short = 'o', long, default_value = "")]
        output: String,
    },
    AddVariable {
        path: PathBuf,
        #[arg(short = 'n', long)]
        name: String,
        #[arg(short = 'd', long)]
        description: String,
    },
    /// Record a prior revision in the history
    AddHistory {
        path: PathBuf,
        #[arg(short = 'r', long)]
        revision: String,
        #[arg(short = 'c', long)]
        changes: String,
    },
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },
    /// Validate files, or every .promz file under a directory
    Validate {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the schema documents are validated against
    Schema,
}

#[derive(Subcommand, Debug, Clone)]
enum TagAction {
    Add { path: PathBuf, tag: String },
    Remove { path: PathBuf, tag: String },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let code = match run(args.cmd) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code(&err)
        }
    };
    std::process::exit(code);
}

fn run(cmd: Commands) -> anyhow::Result<exitcode::ExitCode> {
    match cmd {
        Commands::New {
            path,
            title,
            description,
            author,
            doc_version,
            prompt,
            tags,
            overwrite,
        } => {
            if path.exists() && !overwrite {
                eprintln!("Error: {} already exists, use --overwrite to replace it", path.display());
                return Ok(exitcode::CANTCREAT);
            }

            let config = match load_config() {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("Error: Problem loading config: {}", err);
                    return Ok(exitcode::CONFIG);
                }
            };

            let metadata = Metadata::new(
                title,
                description,
                author.unwrap_or(config.default_author),
                Utc::now(),
            );
            let mut promz = Promz::new(
                doc_version.unwrap_or(config.default_version),
                metadata,
                Content::new(prompt),
            );
            for tag in &tags {
                promz.add_tag(tag);
            }

            save(&promz, &path)?;
            println!("Created {}", path.display());
        }
        Commands::Show {
            path,
            examples,
            copy,
        } => {
            let promz = file_storage::read(&path)?;
            println!("{}", promz.prompt_text());

            if examples {
                for (i, example) in promz.examples().iter().enumerate() {
                    println!("\n# Example {}\nInput: {}\nOutput: {}", i + 1, example.input, example.output);
                }
            }

            if copy {
                let mut clipboard = arboard::Clipboard::new().context("failed to access the clipboard")?;
                clipboard
                    .set_text(promz.prompt_text())
                    .context("failed to copy the prompt to the clipboard")?;
                println!("Prompt copied to clipboard");
            }
        }
        Commands::SetPrompt { path, text } => {
            update(&path, |promz| promz.set_prompt_text(text))?;
        }
        Commands::AddExample {
            path,
            input,
            output,
        } => {
            update(&path, |promz| promz.add_example(Example::new(input, output)))?;
        }
        Commands::AddVariable {
            path,
            name,
            description,
        } => {
            update(&path, |promz| promz.add_variable(Variable::new(name, description)))?;
        }
        Commands::AddHistory {
            path,
            revision,
            changes,
        } => {
            update(&path, |promz| {
                promz.add_history(History::new(revision, Utc::now(), changes))
            })?;
        }
        Commands::Tag { action } => match action {
            TagAction::Add { path, tag } => update(&path, |promz| promz.add_tag(&tag))?,
            TagAction::Remove { path, tag } => update(&path, |promz| promz.remove_tag(&tag))?,
        },
        Commands::Validate { paths } => return validate(&paths),
        Commands::Schema => println!("{}", promz_core::schema::schema_text()),
    }

    Ok(exitcode::OK)
}

/// Reads a document, applies `change` and writes it back.
fn update(path: &Path, change: impl FnOnce(&mut Promz)) -> anyhow::Result<()> {
    let mut promz = file_storage::read(path)?;
    change(&mut promz);
    save(&promz, path)
}

fn save(promz: &Promz, path: &Path) -> anyhow::Result<()> {
    file_storage::write(promz, path)?;
    file_storage::validate_file(path)
        .with_context(|| format!("{} was written but is not valid", path.display()))?;
    debug!("saved {}", path.display());
    Ok(())
}

fn validate(paths: &[PathBuf]) -> anyhow::Result<exitcode::ExitCode> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = find_promz_files(path)?;
            if found.is_empty() {
                warn!("no .promz files found in {}", path.display());
            }
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    let mut failed = 0;
    for file in &files {
        match file_storage::validate_file(file) {
            Ok(()) => println!("ok: {}", file.display()),
            Err(err) => {
                failed += 1;
                println!("invalid: {}: {}", file.display(), err);
            }
        }
    }

    if failed > 0 {
        eprintln!("{} of {} file(s) failed validation", failed, files.len());
        return Ok(exitcode::DATAERR);
    }
    Ok(exitcode::OK)
}

fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<PromzError>() {
        Some(PromzError::File { .. }) => exitcode::IOERR,
        Some(PromzError::InvalidDirectory(_)) => exitcode::NOINPUT,
        Some(PromzError::Parse(_)) | Some(PromzError::SchemaViolation(_)) => exitcode::DATAERR,
        Some(PromzError::Schema(_)) => exitcode::SOFTWARE,
        None => exitcode::SOFTWARE,
    }
}

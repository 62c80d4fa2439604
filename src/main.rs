use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fdx::error::IndexerError;
use fdx::index::store;
use fdx::index::build_index;
use fdx::output::print_results;
use fdx::query::{FilesystemSource, search_combined, search_content, search_names};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fdx")]
#[command(about = "Find files, dirs or file content in a directory tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index of a directory tree
    Index {
        /// Directory to index
        root: PathBuf,

        /// Output index file (must be .fdx)
        #[arg(short, long, default_value = "index.fdx")]
        output: PathBuf,
    },
    /// Find information within files
    Info {
        /// Information to find
        info: String,

        /// Directory to search
        root: Option<PathBuf>,

        /// Search a persisted index instead of the live tree
        #[arg(short = 'i', long = "index", value_name = "FILE")]
        index_file: Option<PathBuf>,
    },
    /// Search files or directories by name
    Searchfd {
        /// File or directory name to search
        name: String,

        /// Directory to search
        root: Option<PathBuf>,

        /// Search a persisted index instead of the live tree
        #[arg(short = 'i', long = "index", value_name = "FILE")]
        index_file: Option<PathBuf>,
    },
    /// Find information within files whose path matches a name
    Searchfdi {
        /// Information to find
        info: String,

        /// Name (or path fragment) the file must match
        name: String,

        /// Directory to search
        root: Option<PathBuf>,

        /// Search a persisted index instead of the live tree
        #[arg(short = 'i', long = "index", value_name = "FILE")]
        index_file: Option<PathBuf>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Index { .. } => "index",
            Commands::Info { .. } => "info",
            Commands::Searchfd { .. } => "searchfd",
            Commands::Searchfdi { .. } => "searchfdi",
        }
    }
}

/// Either a live root directory or a persisted index file.
enum Source {
    Root(PathBuf),
    IndexFile(PathBuf),
}

fn select_source(root: Option<PathBuf>, index_file: Option<PathBuf>) -> Result<Source, IndexerError> {
    match (root, index_file) {
        (Some(root), None) => Ok(Source::Root(root)),
        (None, Some(file)) => Ok(Source::IndexFile(file)),
        _ => Err(IndexerError::InvalidArguments(
            "expected either a root directory or -i INDEX_FILE".to_string(),
        )),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let subcommand = cli.command.name();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            print_usage(subcommand);
            ExitCode::FAILURE
        }
    }
}

/// Print the failing subcommand's usage line.
fn print_usage(name: &str) {
    let mut cli = Cli::command();
    if let Some(sub) = cli.find_subcommand_mut(name) {
        eprintln!("{}", sub.render_usage());
    }
}

fn run(cli: Cli) -> Result<()> {
    let color = !cli.no_color;

    match cli.command {
        Commands::Index { root, output } => {
            // Validate the destination before the (possibly long) build.
            if !store::is_index_file(&output) {
                return Err(IndexerError::InvalidFormat(output).into());
            }
            let index = build_index(&root)?;
            store::save(&index, &output)?;
            println!("Created index file: {}", output.display());
        }

        Commands::Info {
            info,
            root,
            index_file,
        } => {
            let started = Instant::now();
            match select_source(root, index_file)? {
                Source::Root(root) => {
                    println!("Finding information runtime");
                    let source = FilesystemSource::new(&root)?;
                    print_results(search_content(&info, &source)?, color)?;
                }
                Source::IndexFile(file) => {
                    let index = store::load(&file)?;
                    println!("Loaded index from: {}", index.created());
                    print_results(search_content(&info, &index)?, color)?;
                }
            }
            report_elapsed(started);
        }

        Commands::Searchfd {
            name,
            root,
            index_file,
        } => {
            let started = Instant::now();
            match select_source(root, index_file)? {
                Source::Root(root) => {
                    let source = FilesystemSource::new(&root)?;
                    print_results(search_names(&name, &source)?, color)?;
                }
                Source::IndexFile(file) => {
                    let index = store::load(&file)?;
                    print_results(search_names(&name, &index)?, color)?;
                }
            }
            report_elapsed(started);
        }

        Commands::Searchfdi {
            info,
            name,
            root,
            index_file,
        } => {
            let started = Instant::now();
            match select_source(root, index_file)? {
                Source::Root(root) => {
                    let source = FilesystemSource::new(&root)?;
                    print_results(search_combined(&info, &name, &source)?, color)?;
                }
                Source::IndexFile(file) => {
                    let index = store::load(&file)?;
                    print_results(search_combined(&info, &name, &index)?, color)?;
                }
            }
            report_elapsed(started);
        }
    }

    Ok(())
}

/// Elapsed-time report on stderr so stdout stays pipeable.
fn report_elapsed(started: Instant) {
    eprintln!("{:.0} ms", started.elapsed().as_secs_f64() * 1000.0);
}

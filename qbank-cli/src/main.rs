//! qbank CLI - add and list questions in a local SQLite question store

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use qbank_core::config::{self, QbankConfig};
use qbank_core::db::{self, migrations};
use qbank_core::{Question, QuestionStore, SqliteQuestions};
use tracing::debug;

mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "qbank",
    author,
    version,
    about = "Store questions and answers, rejecting blanks and duplicates"
)]
struct Cli {
    /// SQLite database file (overrides QBANK_DATABASE and config)
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a question with an explicit flag
    Add(AddArgs),
    /// Add a question with the flag unset
    Create(CreateArgs),
    /// List all questions in insertion order
    List(ListArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Question text (must be unique)
    text: String,
    /// Answer text
    answer: String,
    /// Set the question's flag
    #[arg(long)]
    flag: bool,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Question text (must be unique)
    text: String,
    /// Answer text
    answer: String,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Output as JSON array
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    config::load_dotenv();
    let cfg = QbankConfig::load()?;

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        level: cfg.general.log_level.clone(),
    })?;

    let path = match cli.database {
        Some(path) => path,
        None => cfg.database_path()?,
    };
    ensure_parent_dir(&path)?;
    debug!("Using database {}", path.display());

    let pool = db::create_pool_with_options(&db::sqlite_url(&path), cfg.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database: {}", path.display()))?;
    migrations::run(&pool)
        .await
        .context("Failed to prepare database schema")?;

    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    let result = run(&store, cli.command).await;

    // Close the pool so WAL contents are checkpointed before exit
    pool.close().await;
    result
}

async fn run(store: &QuestionStore<'_, SqliteQuestions<'_>>, command: Commands) -> Result<()> {
    match command {
        Commands::Add(args) => {
            let question = store
                .add_question(args.text, args.answer, args.flag)
                .await?;
            print_added(&question);
        }
        Commands::Create(args) => {
            let question = store.create_question(args.text, args.answer).await?;
            print_added(&question);
        }
        Commands::List(args) => {
            let questions = store.read_questions().await?;
            print_list(&questions, args.json)?;
        }
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn print_added(question: &Question) {
    println!("Added question #{}: {}", question.id, question);
}

fn print_list(questions: &[Question], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(questions)?);
        return Ok(());
    }

    if questions.is_empty() {
        println!("No questions stored");
        return Ok(());
    }

    for q in questions {
        let marker = if q.flag { " [flag]" } else { "" };
        println!("{}. {} => {}{}", q.id, q.text, q.answer, marker);
    }
    Ok(())
}

use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, eyre};
use std::path::PathBuf;
use std::process;
use todo::{Config, Task, TaskStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal task tracker backed by a local JSON file")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the task file (default: ~/.todo_cli.json)
    #[arg(short, long, env = "TODO_FILE", global = true)]
    file: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List tasks
    List {
        /// Only show tasks that are not done
        #[arg(short, long)]
        pending: bool,
    },

    /// Show a single task
    Show { id: u64 },

    /// Mark a task as done
    Done { id: u64 },

    /// Delete a task
    #[command(alias = "rm")]
    Delete { id: u64 },
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let path = config.tasks_path(cli.file)?;

    // Open store
    let mut store = TaskStore::open(&path);

    match cli.command {
        Commands::Add { text } => {
            let text = text.join(" ");
            if text.trim().is_empty() {
                return Err(eyre!("Task text cannot be empty"));
            }
            let task = store.add(text)?;
            println!("Added #{}: {}", task.id, task.text);
        }
        Commands::List { pending } => {
            let tasks = store.list(!pending);
            if tasks.is_empty() {
                println!("No tasks.");
            }
            for task in &tasks {
                println!("{}", render(task));
            }
        }
        Commands::Show { id } => match store.get(id) {
            Some(task) => println!("{}", render(&task)),
            None => not_found(id),
        },
        Commands::Done { id } => {
            if !store.done(id)? {
                not_found(id);
            }
            println!("Completed #{}", id);
        }
        Commands::Delete { id } => {
            if !store.delete(id)? {
                not_found(id);
            }
            println!("Deleted #{}", id);
        }
    }

    Ok(())
}

fn render(task: &Task) -> String {
    if task.done {
        task.to_string().green().to_string()
    } else {
        task.to_string()
    }
}

fn not_found(id: u64) -> ! {
    eprintln!("{}", format!("Task #{} not found", id).red());
    process::exit(1);
}

use clap::{Parser, Subcommand};
use colored::Colorize;
use numera::repl::{ReplEngine, ReplError, ReplResult};
use rustyline::{error::ReadlineError, DefaultEditor};

#[derive(Parser)]
#[command(name = "numera")]
#[command(about = "An educational mathematics toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell
    Repl,
    /// Evaluate a single shell command and exit
    Eval {
        /// Command line to run, e.g. `primes 100`
        line: Vec<String>,
    },
}

fn main() -> ReplResult<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(),
        Commands::Eval { line } => run_once(&line.join(" ")),
    }
}

/// Run the interactive shell loop
fn run_repl() -> ReplResult<()> {
    println!("numera -- an educational mathematics toolkit");
    println!("Type 'help' for the command list, or 'quit' to leave.");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| ReplError::Terminal {
        message: e.to_string(),
    })?;
    let mut engine = ReplEngine::new();

    while engine.is_running() {
        let prompt = format!("numera[{}]> ", engine.line_number());

        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match engine.execute(line) {
                    Ok(output) => println!("{}\n", output),
                    Err(e) => eprintln!("{} {}\n", "Error:".red(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                return Err(ReplError::Terminal {
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Evaluate one command non-interactively
fn run_once(line: &str) -> ReplResult<()> {
    let mut engine = ReplEngine::new();
    let output = engine.execute(line)?;
    println!("{}", output);
    Ok(())
}

mod menu;
mod new;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dsakit")]
#[command(about = "Scaffold and test practice problems", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the folder structure for a new problem
    #[command(after_help = "\
Common categories:
  arrays
  linked-list
  trees
  hash-table
  strings
  dynamic-programming
  graphs
  stacks
  queues
  heaps")]
    New {
        /// Data structure category, e.g. 'arrays'
        category: String,
        /// Problem name, e.g. 'two-sum'
        problem: String,
    },
    /// Run a solution attempt.
    ///
    /// With no arguments, opens the interactive menu. With
    /// `<category> <problem> <language>`, runs the latest attempt.
    /// With `<category> <problem> <attempt> <language>`, runs that
    /// specific attempt.
    Test {
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },
}

pub fn run(cli: Cli) {
    match cli.command {
        Commands::New { category, problem } => new::new_problem(&category, &problem),
        Commands::Test { args } => test::test_solution(&args),
    }
}

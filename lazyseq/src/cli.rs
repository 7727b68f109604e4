//! Command-line argument parsing
use clap::{Parser, Subcommand, ValueEnum};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("COMMIT_SHA"), ")");

#[derive(Debug, Parser)]
#[command(name = "lazyseq", version = VERSION, about = "Zip and buffer JSON sequences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Traverse arrays or objects in lockstep, printing one line per step
    ///
    /// Traversal stops at the end of the shortest input.
    Zip {
        /// Merge the values of each step with the given function
        ///
        /// Without this option, the values of each step are printed as array.
        #[arg(long = "with", value_enum)]
        with: Option<Combiner>,
        /// JSON arrays or objects; if none are given, they are read from standard input
        inputs: Vec<String>,
    },
    /// Traverse an array or object several times, reading it only once
    Buffer {
        /// Number of full traversals
        #[arg(long, default_value_t = 2)]
        passes: usize,
        /// Before the full traversals, traverse only this many elements
        #[arg(long)]
        take: Option<usize>,
        /// JSON array or object; if not given, it is read from standard input
        input: Option<String>,
    },
}

/// Functions to merge the values of zipped inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Combiner {
    /// Add numbers
    Sum,
    /// Multiply numbers
    Product,
    /// Smallest number
    Min,
    /// Largest number
    Max,
    /// Concatenate strings or arrays
    Concat,
    /// Subtract the second number from the first (exactly two inputs)
    Sub,
    /// Divide the first number by the second (exactly two inputs)
    Div,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parse_zip() {
    let cli = Cli::parse_from(["lazyseq", "zip", "--with", "sum", "[1]", "[2]"]);
    match cli.command {
        Command::Zip { with, inputs } => {
            assert_eq!(with, Some(Combiner::Sum));
            assert_eq!(inputs, ["[1]", "[2]"]);
        }
        _ => panic!("expected zip command"),
    }
}

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use simple_sorter::{input::parse_values, Algorithm, QuickSort};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let values = parse_values(&args.values)
        .with_context(|| format!("failed to parse numbers from `{}`", args.values))?;

    let sorted = args.algorithm().invoke(values, args.time);

    let output = format!(
        "{}{}\n",
        sorted.summary,
        sorted.items.iter().map(format_value).join("\n")
    );

    if let Err(err) = io::stdout().lock().write_all(output.as_bytes()) {
        if err.kind() != io::ErrorKind::BrokenPipe {
            return Err(err).context("failed to write the sorted numbers");
        }
    }

    Ok(())
}

/// Prints every number as a real number, so `3` shows as `3.0`.
fn format_value(value: &f64) -> String {
    format!("{value:?}")
}

/// Sort an array using a specific sorting algorithm
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    #[arg(value_enum, ignore_case = true)]
    algorithm: AlgorithmArg,

    /// Numbers separated by `,` or `|`, e.g. "3,1,2" or "3 | 1 | 2"
    #[arg(allow_hyphen_values = true)]
    values: String,

    /// Print how long the sort took
    #[arg(short, long)]
    time: bool,

    /// Don't shuffle the numbers before a quick sort
    #[arg(long)]
    no_shuffle: bool,

    /// Seed for the quick sort shuffle
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn algorithm(&self) -> Algorithm {
        match self.algorithm {
            AlgorithmArg::Bubble => Algorithm::Bubble,
            AlgorithmArg::Merge => Algorithm::Merge,
            AlgorithmArg::Insertion => Algorithm::Insertion,
            AlgorithmArg::Quick => {
                let quick_sort = QuickSort::new(!self.no_shuffle);
                Algorithm::Quick(match self.seed {
                    Some(seed) => quick_sort.with_seed(seed),
                    None => quick_sort,
                })
            }
            AlgorithmArg::Selection => Algorithm::Selection,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum AlgorithmArg {
    Bubble,
    Merge,
    Insertion,
    Quick,
    Selection,
}

//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every day in order on the calling thread
    Sequential,
    /// One task per year; days and parts run in order within it
    Year,
    /// One task per day; parts share a parsed instance (default)
    #[default]
    Day,
    /// One task per part, each with its own parsed instance
    Part,
}

/// Result layout on stdout
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// One row per day with both answers and all timings
    #[default]
    Table,
    /// One line per part
    Lines,
}

/// Time the Advent of Code 2024 solutions
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run and time Advent of Code solutions", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{day:02}.txt` inputs [env: AOC_INPUT_DIR, default: inputs]
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Parse and solve each day this many times, averaging the timings
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=10_000)
    )]
    pub repetitions: u32,

    /// Output layout: table or lines
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["advent"]).unwrap();
        assert_eq!(args.repetitions, 1);
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.input_dir.is_none());
        assert!(args.tags.is_empty());
    }

    #[test]
    fn test_filters_and_tags() {
        let args = Args::try_parse_from([
            "advent",
            "--year",
            "2024",
            "-d",
            "7",
            "-p",
            "2",
            "--tags",
            "2024,grid",
            "--format",
            "lines",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.day, Some(7));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["2024", "grid"]);
        assert_eq!(args.format, OutputFormat::Lines);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Args::try_parse_from(["advent", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["advent", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["advent", "--repetitions", "0"]).is_err());
    }
}

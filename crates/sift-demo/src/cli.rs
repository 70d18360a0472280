//! Command-line configuration.

use clap::{Parser, ValueEnum};
use sift::{Case, Op};

#[derive(Debug, Parser)]
#[command(
    name = "sift-demo",
    version,
    about = "Filter sample users and products by keyword, four ways"
)]
pub struct Cli {
    /// Keyword to search for (repeatable; tasks 1 and 3 use the first one)
    #[arg(
        short,
        long = "keyword",
        env = "SIFT_KEYWORDS",
        value_delimiter = ',',
        default_values = ["Joe", "Joa"]
    )]
    pub keywords: Vec<String>,

    /// Match operation used by the field-driven tasks
    #[arg(long, value_enum, default_value_t = OpArg::Contains)]
    pub op: OpArg,

    /// Match keywords case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Run a single task instead of all four
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub task: Option<u8>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn case(&self) -> Case {
        if self.case_sensitive {
            Case::Sensitive
        } else {
            Case::Insensitive
        }
    }

    pub fn runs(&self, task: u8) -> bool {
        self.task.is_none() || self.task == Some(task)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpArg {
    Contains,
    Eq,
    StartsWith,
    EndsWith,
    Regex,
}

impl From<OpArg> for Op {
    fn from(arg: OpArg) -> Self {
        match arg {
            OpArg::Contains => Op::Contains,
            OpArg::Eq => Op::Eq,
            OpArg::StartsWith => Op::StartsWith,
            OpArg::EndsWith => Op::EndsWith,
            OpArg::Regex => Op::Regex,
        }
    }
}

use anagram_core::{GroupOrder, InputFormat, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "anagram",
    version,
    about = "Group words into sets of anagrams"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read a word list and print its anagram groups
    Group(GroupArgs),
    /// Print the version and exit
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GroupArgs {
    /// Word list path, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = InputFormatArg::Lines, env = "ANAGRAM_INPUT_FORMAT")]
    pub input_format: InputFormatArg,

    #[arg(long, value_enum, default_value_t = OutputFormatArg::Text, env = "ANAGRAM_FORMAT")]
    pub format: OutputFormatArg,

    /// Group ordering; `unspecified` uses hash order
    #[arg(long, value_enum, default_value_t = OrderArg::FirstSeen)]
    pub order: OrderArg,

    /// Sort raw UTF-8 bytes instead of characters
    #[arg(long)]
    pub bytes: bool,

    /// Include each group's canonical key (json only)
    #[arg(long)]
    pub with_keys: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum InputFormatArg {
    #[default]
    Lines,
    Json,
    Yaml,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormatArg {
    #[default]
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OrderArg {
    Unspecified,
    #[default]
    FirstSeen,
    Size,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Lines => InputFormat::Lines,
            InputFormatArg::Json => InputFormat::Json,
            InputFormatArg::Yaml => InputFormat::Yaml,
        }
    }
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

impl From<OrderArg> for GroupOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Unspecified => GroupOrder::Unspecified,
            OrderArg::FirstSeen => GroupOrder::FirstSeen,
            OrderArg::Size => GroupOrder::BySizeDesc,
        }
    }
}

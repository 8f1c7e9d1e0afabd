//! Command-line argument parsing

use crate::core::CasingRule;
use clap::{Args as ClapArgs, Parser, Subcommand};

const ROOT_LONG_ABOUT: &str = "\
A CLI tool to convert text to different cases using various conversion functions.

Examples:
  caseconv camel \"hello world\"
  caseconv snake \"HelloWorld\"
  echo \"hello world\" | caseconv pascal";

/// Convert text to different cases
#[derive(Parser, Debug)]
#[command(author, version, long_about = ROOT_LONG_ABOUT)]
#[command(name = "caseconv")]
pub struct Args {
    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Text to convert, shared by every subcommand
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TextArgs {
    /// Text to convert; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

/// Available commands, one per casing rule
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert text to camelCase
    #[command(long_about = "Convert text to camelCase (e.g., 'hello world' -> 'helloWorld')")]
    Camel(TextArgs),

    /// Convert text to Go-style camelCase
    #[command(
        name = "gocamel",
        long_about = "Convert text to Go-style camelCase with special handling for Go identifiers \
                      (e.g., 'user id' -> 'userID')"
    )]
    GoCamel(TextArgs),

    /// Convert text to PascalCase
    #[command(long_about = "Convert text to PascalCase (e.g., 'hello world' -> 'HelloWorld')")]
    Pascal(TextArgs),

    /// Convert text to Go-style PascalCase
    #[command(
        name = "gopascal",
        long_about = "Convert text to Go-style PascalCase with special handling for Go identifiers \
                      (e.g., 'user id' -> 'UserID')"
    )]
    GoPascal(TextArgs),

    /// Convert text to snake_case
    #[command(long_about = "Convert text to snake_case (e.g., 'hello world' -> 'hello_world')")]
    Snake(TextArgs),

    /// Convert text to UPPER_SNAKE_CASE
    #[command(
        name = "uppersnake",
        long_about = "Convert text to UPPER_SNAKE_CASE (e.g., 'hello world' -> 'HELLO_WORLD')"
    )]
    UpperSnake(TextArgs),

    /// Convert text to kebab-case
    #[command(long_about = "Convert text to kebab-case (e.g., 'hello world' -> 'hello-world')")]
    Kebab(TextArgs),

    /// Convert text to UPPER-KEBAB-CASE
    #[command(
        name = "upperkebab",
        long_about = "Convert text to UPPER-KEBAB-CASE (e.g., 'hello world' -> 'HELLO-WORLD')"
    )]
    UpperKebab(TextArgs),
}

impl Command {
    /// Casing rule this command applies
    pub fn rule(&self) -> CasingRule {
        match self {
            Self::Camel(_) => CasingRule::Camel,
            Self::GoCamel(_) => CasingRule::GoCamel,
            Self::Pascal(_) => CasingRule::Pascal,
            Self::GoPascal(_) => CasingRule::GoPascal,
            Self::Snake(_) => CasingRule::Snake,
            Self::UpperSnake(_) => CasingRule::UpperSnake,
            Self::Kebab(_) => CasingRule::Kebab,
            Self::UpperKebab(_) => CasingRule::UpperKebab,
        }
    }

    /// Text given on the command line, possibly empty
    pub fn text(&self) -> &[String] {
        match self {
            Self::Camel(args)
            | Self::GoCamel(args)
            | Self::Pascal(args)
            | Self::GoPascal(args)
            | Self::Snake(args)
            | Self::UpperSnake(args)
            | Self::Kebab(args)
            | Self::UpperKebab(args) => &args.text,
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

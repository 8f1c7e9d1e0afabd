//! Configuration for one invocation
//!
//! Everything comes from the command line; no files or environment variables
//! are consulted.

use crate::{cli::Args, core::CasingRule};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Casing rule selected by the subcommand
    pub rule: CasingRule,
    /// Text arguments, empty when input should come from stdin
    pub text: Vec<String>,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            rule: args.command.rule(),
            text: args.command.text().to_vec(),
        }
    }

    /// Whether input will be taken from stdin rather than arguments
    pub fn reads_stdin(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from(["caseconv", "--debug", "gopascal", "user", "id"]).unwrap();
        let config = Config::from_args(&args);

        assert!(config.debug);
        assert_eq!(config.rule, CasingRule::GoPascal);
        assert_eq!(config.text, vec!["user", "id"]);
        assert!(!config.reads_stdin());
    }

    #[test]
    fn test_config_without_text_reads_stdin() {
        let args = Args::try_parse_from(["caseconv", "kebab"]).unwrap();
        let config = Config::from_args(&args);

        assert!(!config.debug);
        assert_eq!(config.rule, CasingRule::Kebab);
        assert!(config.reads_stdin());
    }
}

//! # caseconv
//!
//! Convert text between identifier casing conventions: camelCase, PascalCase,
//! snake_case, kebab-case, their upper-case forms and Go-flavored variants
//! that keep common initialisms such as `ID` or `URL` upper-case.
//!
//! ## Example
//!
//! ```
//! use caseconv::core::{convert, CasingRule};
//!
//! assert_eq!(convert("hello world", CasingRule::Camel), "helloWorld");
//! assert_eq!(convert("HTTPServer", CasingRule::Snake), "http_server");
//! assert_eq!(convert("user id", CasingRule::GoPascal), "UserID");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr, keeping stdout for converted text
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

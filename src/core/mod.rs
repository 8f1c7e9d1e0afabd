//! Case conversion
//!
//! Tokenizes text into words and re-joins them under a casing rule.

pub mod casing;
pub mod initialisms;
pub mod words;

pub use casing::{convert, CasingRule};
pub use initialisms::{Initialisms, GO_INITIALISMS};
pub use words::{tokenize, Word};

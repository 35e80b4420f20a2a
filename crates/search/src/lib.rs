//! Document search utilities for Quill.

mod error;
mod finder;
mod navigator;
mod worker;

pub use error::InvalidPatternError;
pub use finder::{Match, SearchMode, SearchQuery, find};
pub use navigator::MatchNavigator;
pub use worker::{SearchCompletion, SearchWorker};

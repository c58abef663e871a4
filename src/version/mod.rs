//! Version bumping and change classification.

pub mod analyzer;
pub mod bump;

pub use analyzer::{ChangeAnalysis, Reason, analyze};
pub use bump::{BumpLevel, bump_version};

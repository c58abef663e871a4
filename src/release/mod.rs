//! Release side effects: version files and the git publish sequence.

pub mod executor;
pub mod version_files;

pub use executor::{PublishStep, StepEvent, commit, publish, tag_name};
pub use version_files::{read_current_version, update_index_file, update_package_json};

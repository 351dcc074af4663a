mod parse;
mod prompt;
mod types;

pub use parse::{extract_json_object, parse_generation};
pub use prompt::build_prompt;
pub use types::{GenerationResult, REQUIRED_FIELDS};

//! Job file parser module.

mod job_file;
mod sections;

pub use job_file::{parse_job_file, parse_job_str};

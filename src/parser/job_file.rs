//! Job file parser.
//!
//! ```text
//! [Order]
//! Quantity=500
//! [Sheet]
//! Size=65x100
//! Price=4500
//! [Cut]
//! Width=21
//! Height=29.7
//! [Costs]
//! Print=2500
//! Finishing=1000
//! Margin=30
//! ```
//!
//! Anything not given keeps its `Job::default()` value.

use super::sections::*;
use crate::error::{CalcError, Result};
use crate::model::{parse_dimensions, Job};
use std::path::Path;
use tracing::debug;

/// Section of the job file currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Order,
    Sheet,
    Cut,
    Costs,
    Unknown,
}

impl Section {
    fn from_name(name: &str) -> Self {
        match name {
            "Order" => Section::Order,
            "Sheet" => Section::Sheet,
            "Cut" => Section::Cut,
            "Costs" => Section::Costs,
            _ => Section::Unknown,
        }
    }
}

/// Parse job file content.
pub fn parse_job_str(content: &str) -> Result<Job> {
    let mut job = Job::default();
    let mut section: Option<Section> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = parse_section_header(line) {
            let parsed = Section::from_name(name);
            if parsed == Section::Unknown {
                debug!("Ignoring unknown section [{}] at line {}", name, line_no);
            }
            section = Some(parsed);
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or_else(|| CalcError::ParseError {
            line: line_no,
            message: format!("expected Key=Value, got '{}'", line),
        })?;

        let current = section.ok_or_else(|| CalcError::ParseError {
            line: line_no,
            message: format!("'{}' appears before any section header", key),
        })?;

        let handled = apply_value(&mut job, current, key, value, line_no)?;
        if !handled {
            debug!("Ignoring key '{}' at line {}", key, line_no);
        }
    }

    Ok(job)
}

/// Apply one key to the job. Returns false for keys this section doesn't know.
fn apply_value(job: &mut Job, section: Section, key: &str, value: &str, line: usize) -> Result<bool> {
    match (section, key) {
        (Section::Order, "Quantity") => job.quantity = parse_count(value, line)?,

        (Section::Sheet, "Size") => {
            let (width, height) = parse_dimensions(value)?;
            job.sheet.width = width;
            job.sheet.height = height;
        }
        (Section::Sheet, "Width") => job.sheet.width = parse_float(value, line)?,
        (Section::Sheet, "Height") => job.sheet.height = parse_float(value, line)?,
        (Section::Sheet, "Price") => job.costs.price_per_sheet = parse_float(value, line)?,

        (Section::Cut, "Size") => {
            let (width, height) = parse_dimensions(value)?;
            job.cut.width = width;
            job.cut.height = height;
        }
        (Section::Cut, "Width") => job.cut.width = parse_float(value, line)?,
        (Section::Cut, "Height") => job.cut.height = parse_float(value, line)?,

        (Section::Costs, "Print") => job.costs.print_cost_per_unit = parse_float(value, line)?,
        (Section::Costs, "Finishing") => {
            job.costs.finishing_cost_per_unit = parse_float(value, line)?
        }
        (Section::Costs, "Margin") => job.costs.margin_percent = parse_float(value, line)?,

        _ => return Ok(false),
    }
    Ok(true)
}

/// Parse a job file from disk.
pub fn parse_job_file(path: &Path) -> Result<Job> {
    if !path.exists() {
        return Err(CalcError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(CalcError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    debug!("Parsing job file {}", path.display());
    parse_job_str(&content)
}

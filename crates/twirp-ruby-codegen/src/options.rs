//! Plugin parameter (`--twirp_ruby_opt=...`) parsing.

use crate::error::{GenerateError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Skip files that declare no services instead of emitting an
    /// artifact that only contains the header.
    pub skip_empty: bool,
}

impl GeneratorOptions {
    /// Parse a comma separated `key[=value]` list. Blank entries are
    /// ignored; unknown keys are rejected.
    pub fn parse(parameter: Option<&str>) -> Result<Self> {
        let mut opts = Self::default();
        let Some(parameter) = parameter else {
            return Ok(opts);
        };

        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = match part.split_once('=') {
                Some((k, v)) => (k.trim(), Some(v.trim())),
                None => (part, None),
            };
            match key {
                "skip-empty" | "skip_empty" => opts.skip_empty = parse_flag(part, value)?,
                _ => return Err(GenerateError::InvalidParameter(part.to_string())),
            }
        }

        Ok(opts)
    }
}

fn parse_flag(part: &str, value: Option<&str>) -> Result<bool> {
    match value {
        None | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(_) => Err(GenerateError::InvalidParameter(part.to_string())),
    }
}

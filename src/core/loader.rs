use crate::domain::model::{Mass, ModuleList};
use crate::utils::error::{FuelError, Result};
use std::io::BufRead;

/// Reads one base-10 mass per line, keeping input order.
///
/// Surrounding whitespace on a line is ignored. Any other content, including a
/// blank line, fails with [`FuelError::ParseError`] carrying the 1-based line
/// number.
pub fn load_masses<R: BufRead>(source: R) -> Result<ModuleList> {
    let mut masses = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line = line?;
        let content = line.trim();
        let mass = content
            .parse::<Mass>()
            .map_err(|source| FuelError::ParseError {
                line: index + 1,
                content: content.to_string(),
                source,
            })?;
        masses.push(mass);
    }

    tracing::debug!("Loaded {} module masses", masses.len());
    Ok(ModuleList::new(masses))
}

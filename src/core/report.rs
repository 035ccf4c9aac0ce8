use crate::core::aggregate::{recursive_total, simple_total};
use crate::core::loader::load_masses;
use crate::domain::model::{FuelReport, ModuleList};
use crate::utils::error::Result;
use std::io::BufRead;

/// Loads `source` once and computes both totals from that single load.
pub fn run<R: BufRead>(source: R) -> Result<FuelReport> {
    let modules = load_masses(source)?;
    summarize(&modules)
}

pub fn summarize(modules: &ModuleList) -> Result<FuelReport> {
    let masses = modules.masses();
    Ok(FuelReport {
        module_count: modules.len(),
        simple_total: simple_total(masses)?,
        recursive_total: recursive_total(masses)?,
    })
}

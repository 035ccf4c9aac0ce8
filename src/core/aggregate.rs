use crate::core::fuel::{fuel_requirement, recursive_fuel};
use crate::domain::model::{Fuel, Mass};
use crate::utils::error::{FuelError, Result};

/// Sum of the direct fuel requirement of every mass.
pub fn simple_total(masses: &[Mass]) -> Result<Fuel> {
    checked_total("simple", masses, fuel_requirement)
}

/// Sum of the direct plus fuel-for-fuel requirement of every mass.
pub fn recursive_total(masses: &[Mass]) -> Result<Fuel> {
    checked_total("recursive", masses, recursive_fuel)
}

fn checked_total(total: &'static str, masses: &[Mass], fuel: fn(Mass) -> Fuel) -> Result<Fuel> {
    masses
        .iter()
        .copied()
        .try_fold(0 as Fuel, |acc, mass| acc.checked_add(fuel(mass)))
        .ok_or(FuelError::TotalOverflow { total })
}

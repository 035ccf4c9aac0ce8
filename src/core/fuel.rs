use crate::domain::model::{Fuel, Mass};

/// Fuel needed to lift `mass`: `mass / 3 - 2`, truncating toward zero.
pub fn fuel_requirement(mass: Mass) -> Fuel {
    mass / 3 - 2
}

/// Strictly positive fuel terms needed to carry `mass` and then the fuel itself.
///
/// The first non-positive term ends the chain and is not yielded.
pub fn fuel_chain(mass: Mass) -> impl Iterator<Item = Fuel> {
    std::iter::successors(Some(fuel_requirement(mass)), |&fuel| {
        Some(fuel_requirement(fuel))
    })
    .take_while(|&fuel| fuel > 0)
}

/// Per-module Part 2 contribution.
pub fn recursive_fuel(mass: Mass) -> Fuel {
    fuel_chain(mass).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_requirement_examples() {
        assert_eq!(fuel_requirement(12), 2);
        assert_eq!(fuel_requirement(14), 2);
        assert_eq!(fuel_requirement(1969), 654);
        assert_eq!(fuel_requirement(100756), 33583);
    }

    #[test]
    fn test_fuel_requirement_matches_floor_formula() {
        for mass in 0..1000 {
            assert_eq!(fuel_requirement(mass), mass.div_euclid(3) - 2);
        }
    }

    #[test]
    fn test_fuel_requirement_small_and_negative_masses() {
        assert_eq!(fuel_requirement(0), -2);
        assert_eq!(fuel_requirement(5), -1);
        assert_eq!(fuel_requirement(6), 0);
        // truncates toward zero
        assert_eq!(fuel_requirement(-4), -3);
    }

    #[test]
    fn test_fuel_chain_terms() {
        assert_eq!(fuel_chain(14).collect::<Vec<_>>(), vec![2]);
        assert_eq!(
            fuel_chain(1969).collect::<Vec<_>>(),
            vec![654, 216, 70, 21, 5]
        );
        assert_eq!(fuel_chain(8).count(), 0);
    }

    #[test]
    fn test_recursive_fuel_examples() {
        assert_eq!(recursive_fuel(14), 2);
        assert_eq!(recursive_fuel(1969), 966);
        assert_eq!(recursive_fuel(100756), 50346);
        assert_eq!(recursive_fuel(2), 0);
    }
}

use std::fmt;

/// Mass of a single spacecraft module.
pub type Mass = i64;

/// Fuel amount. Non-positive values only ever appear as the end of a fuel chain.
pub type Fuel = i64;

/// Masses in input order, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleList {
    masses: Vec<Mass>,
}

impl ModuleList {
    pub fn new(masses: Vec<Mass>) -> Self {
        Self { masses }
    }

    pub fn masses(&self) -> &[Mass] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelReport {
    pub module_count: usize,
    pub simple_total: Fuel,
    pub recursive_total: Fuel,
}

impl FuelReport {
    pub fn totals(&self) -> (Fuel, Fuel) {
        (self.simple_total, self.recursive_total)
    }
}

impl fmt::Display for FuelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Part 1: {}", self.simple_total)?;
        write!(f, "Part 2: {}", self.recursive_total)
    }
}

/// What to do when the input source cannot be opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingInputPolicy {
    #[default]
    Fail,
    Empty,
}

impl MissingInputPolicy {
    pub const VALID_VALUES: [&'static str; 2] = ["fail", "empty"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fail" => Some(Self::Fail),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }
}

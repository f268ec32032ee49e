use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of length units the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LengthUnit {
    Metre,
    Millimetre,
    Mile,
    Foot,
}

impl LengthUnit {
    /// All units in picker order
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Metre,
        LengthUnit::Millimetre,
        LengthUnit::Mile,
        LengthUnit::Foot,
    ];

    /// The pivot unit every factor is expressed against
    pub const BASE: LengthUnit = LengthUnit::Metre;

    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Metre => "Metre",
            LengthUnit::Millimetre => "Millimetre",
            LengthUnit::Mile => "Mile",
            LengthUnit::Foot => "Foot",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Metre => "m",
            LengthUnit::Millimetre => "mm",
            LengthUnit::Mile => "mi",
            LengthUnit::Foot => "ft",
        }
    }

    /// How many of this unit make one Metre
    pub fn factor(self) -> f64 {
        UNIT_TABLE.factor(self)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    /// Accepts canonical names in any case and the short symbols
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LengthUnit::ALL
            .iter()
            .copied()
            .find(|unit| {
                unit.name().eq_ignore_ascii_case(trimmed) || unit.symbol() == trimmed
            })
            .ok_or_else(|| UnitError::UnknownUnit(s.to_string()))
    }
}

impl TryFrom<String> for LengthUnit {
    type Error = UnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LengthUnit> for String {
    fn from(unit: LengthUnit) -> Self {
        unit.name().to_string()
    }
}

/// Fixed mapping of unit to its factor relative to one Metre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTable {
    entries: [(LengthUnit, f64); 4],
}

/// The process-wide conversion table
pub static UNIT_TABLE: UnitTable = UnitTable::standard();

impl UnitTable {
    pub const fn standard() -> Self {
        Self {
            entries: [
                (LengthUnit::Metre, 1.0),
                (LengthUnit::Millimetre, 1000.0),
                (LengthUnit::Mile, 0.000621371),
                (LengthUnit::Foot, 3.28084),
            ],
        }
    }

    pub fn factor(&self, unit: LengthUnit) -> f64 {
        // Entries are laid out in declaration order of LengthUnit
        self.entries[unit as usize].1
    }

    pub fn entries(&self) -> impl Iterator<Item = (LengthUnit, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

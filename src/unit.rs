//! SBML Level 1 base unit kinds
//!
//! This module provides the enumeration of base unit kinds an SBML Level 1
//! `unit` element may carry in its `kind` attribute. Level 1 canonically
//! spells the volume and length units `liter` and `meter`; the British
//! spellings `litre` and `metre` used by later levels are accepted as
//! aliases on input and map to the same variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SbmlError;

/// A base unit kind of the SBML Level 1 enumeration.
///
/// Both spellings of the volume and length units deserialize to the same
/// variant; serialization always emits the Level 1 spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Ampere,
    Becquerel,
    Candela,
    Celsius,
    Coulomb,
    #[default]
    Dimensionless,
    Farad,
    Gram,
    Gray,
    Henry,
    Hertz,
    Item,
    Joule,
    Katal,
    Kelvin,
    Kilogram,
    #[serde(rename = "liter", alias = "litre")]
    Liter,
    Lumen,
    Lux,
    #[serde(rename = "meter", alias = "metre")]
    Meter,
    Mole,
    Newton,
    Ohm,
    Pascal,
    Radian,
    Second,
    Siemens,
    Sievert,
    Steradian,
    Tesla,
    Volt,
    Watt,
    Weber,
}

impl UnitKind {
    /// The attribute value this kind is written as in Level 1 documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Ampere => "ampere",
            UnitKind::Becquerel => "becquerel",
            UnitKind::Candela => "candela",
            UnitKind::Celsius => "celsius",
            UnitKind::Coulomb => "coulomb",
            UnitKind::Dimensionless => "dimensionless",
            UnitKind::Farad => "farad",
            UnitKind::Gram => "gram",
            UnitKind::Gray => "gray",
            UnitKind::Henry => "henry",
            UnitKind::Hertz => "hertz",
            UnitKind::Item => "item",
            UnitKind::Joule => "joule",
            UnitKind::Katal => "katal",
            UnitKind::Kelvin => "kelvin",
            UnitKind::Kilogram => "kilogram",
            UnitKind::Liter => "liter",
            UnitKind::Lumen => "lumen",
            UnitKind::Lux => "lux",
            UnitKind::Meter => "meter",
            UnitKind::Mole => "mole",
            UnitKind::Newton => "newton",
            UnitKind::Ohm => "ohm",
            UnitKind::Pascal => "pascal",
            UnitKind::Radian => "radian",
            UnitKind::Second => "second",
            UnitKind::Siemens => "siemens",
            UnitKind::Sievert => "sievert",
            UnitKind::Steradian => "steradian",
            UnitKind::Tesla => "tesla",
            UnitKind::Volt => "volt",
            UnitKind::Watt => "watt",
            UnitKind::Weber => "weber",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = SbmlError;

    /// Parse a `kind` attribute value into a base unit kind.
    ///
    /// # Errors
    ///
    /// Returns `SbmlError::InvalidUnitKind` for strings outside the Level 1
    /// enumeration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "ampere" => UnitKind::Ampere,
            "becquerel" => UnitKind::Becquerel,
            "candela" => UnitKind::Candela,
            "celsius" => UnitKind::Celsius,
            "coulomb" => UnitKind::Coulomb,
            "dimensionless" => UnitKind::Dimensionless,
            "farad" => UnitKind::Farad,
            "gram" => UnitKind::Gram,
            "gray" => UnitKind::Gray,
            "henry" => UnitKind::Henry,
            "hertz" => UnitKind::Hertz,
            "item" => UnitKind::Item,
            "joule" => UnitKind::Joule,
            "katal" => UnitKind::Katal,
            "kelvin" => UnitKind::Kelvin,
            "kilogram" => UnitKind::Kilogram,
            "liter" | "litre" => UnitKind::Liter,
            "lumen" => UnitKind::Lumen,
            "lux" => UnitKind::Lux,
            "meter" | "metre" => UnitKind::Meter,
            "mole" => UnitKind::Mole,
            "newton" => UnitKind::Newton,
            "ohm" => UnitKind::Ohm,
            "pascal" => UnitKind::Pascal,
            "radian" => UnitKind::Radian,
            "second" => UnitKind::Second,
            "siemens" => UnitKind::Siemens,
            "sievert" => UnitKind::Sievert,
            "steradian" => UnitKind::Steradian,
            "tesla" => UnitKind::Tesla,
            "volt" => UnitKind::Volt,
            "watt" => UnitKind::Watt,
            "weber" => UnitKind::Weber,
            _ => return Err(SbmlError::InvalidUnitKind(s.to_string())),
        };

        Ok(kind)
    }
}

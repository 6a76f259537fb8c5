//! Raw serde structures mirroring the SBML Level 1 wire format
//!
//! These structures are a one-to-one image of the XML subset this crate
//! supports: the `sbml` root with its `level`/`version` attributes, the
//! `model` element and its `listOf*` wrapper elements. They exist only as an
//! intermediate between quick-xml and the document model in
//! [`crate::document`]; conversions live in the reader and writer modules.
//!
//! Level 1 Version 1 spelled the species elements `specie` and
//! `specieReference`; Version 2 renamed them to `species` and
//! `speciesReference`. Either spelling is accepted on input through serde
//! aliases and the Version 2 spelling is written. A document uses one
//! spelling consistently; mixing both spellings within a single list is
//! not supported.
//!
//! Defaulting rules for absent attributes are encoded here as serde default
//! functions: `exponent=1`, `scale=0`, `multiplier=1`,
//! `boundaryCondition=false`, `reversible=true` (absent means reversible),
//! `fast=false`, `stoichiometry=1`, `denominator=1`. Attributes that carry
//! their default value are skipped on output.

use serde::{Deserialize, Serialize};

use crate::unit::UnitKind;

/// The XML namespace of SBML Level 1 documents
pub(crate) const SBML_L1_NS: &str = "http://www.sbml.org/sbml/level1";

fn default_xmlns() -> String {
    SBML_L1_NS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_one_i32() -> i32 {
    1
}

fn default_one_i64() -> i64 {
    1
}

fn default_one_f64() -> f64 {
    1.0
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

fn is_one_i32(value: &i32) -> bool {
    *value == 1
}

fn is_one_i64(value: &i64) -> bool {
    *value == 1
}

fn is_one_f64(value: &f64) -> bool {
    *value == 1.0
}

/// The `sbml` root element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename = "sbml")]
pub(crate) struct SbmlElem {
    #[serde(rename = "@xmlns", default = "default_xmlns")]
    pub xmlns: String,

    #[serde(rename = "@level")]
    pub level: u32,

    #[serde(rename = "@version")]
    pub version: u32,

    #[serde(rename = "model", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelElem>,
}

/// The `model` element with its `listOf*` children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ModelElem {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        rename = "listOfUnitDefinitions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_unit_definitions: Option<ListOfUnitDefinitions>,

    #[serde(
        rename = "listOfCompartments",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_compartments: Option<ListOfCompartments>,

    #[serde(
        rename = "listOfSpecies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_species: Option<ListOfSpecies>,

    #[serde(
        rename = "listOfParameters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_parameters: Option<ListOfParameters>,

    #[serde(
        rename = "listOfRules",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_rules: Option<ListOfRules>,

    #[serde(
        rename = "listOfReactions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_reactions: Option<ListOfReactions>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ListOfUnitDefinitions {
    #[serde(rename = "unitDefinition", default)]
    pub unit_definitions: Vec<UnitDefinitionElem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct UnitDefinitionElem {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "listOfUnits", default, skip_serializing_if = "Option::is_none")]
    pub list_of_units: Option<ListOfUnits>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ListOfUnits {
    #[serde(rename = "unit", default)]
    pub units: Vec<UnitElem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct UnitElem {
    #[serde(rename = "@kind")]
    pub kind: UnitKind,

    #[serde(
        rename = "@exponent",
        default = "default_one_i32",
        skip_serializing_if = "is_one_i32"
    )]
    pub exponent: i32,

    #[serde(rename = "@scale", default, skip_serializing_if = "is_zero_i32")]
    pub scale: i32,

    #[serde(
        rename = "@multiplier",
        default = "default_one_f64",
        skip_serializing_if = "is_one_f64"
    )]
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ListOfCompartments {
    #[serde(rename = "compartment", default)]
    pub compartments: Vec<CompartmentElem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct CompartmentElem {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "@volume", default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,

    #[serde(rename = "@units", default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(rename = "@outside", default, skip_serializing_if = "Option::is_none")]
    pub outside: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ListOfSpecies {
    #[serde(rename = "species", alias = "specie", default)]
    pub species: Vec<SpeciesElem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct SpeciesElem {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "@compartment", default)]
    pub compartment: String,

    #[serde(
        rename = "@initialAmount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_amount: Option<f64>,

    #[serde(
        rename = "@initialConcentration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_concentration: Option<f64>,

    #[serde(rename = "@units", default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(
        rename = "@boundaryCondition",
        default,
        skip_serializing_if = "is_false"
    )]
    pub boundary_condition: bool,

    #[serde(rename = "@charge", default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ListOfParameters {
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<ParameterElem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ParameterElem {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "@value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    #[serde(rename = "@units", default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ListOfRules {
    #[serde(rename = "$value", default)]
    pub rules: Vec<RuleElem>,
}

/// The four rule elements Level 1 allows inside `listOfRules`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) enum RuleElem {
    #[serde(rename = "algebraicRule")]
    Algebraic {
        #[serde(rename = "@formula")]
        formula: String,
    },
    #[serde(rename = "compartmentVolumeRule")]
    CompartmentVolume {
        #[serde(rename = "@compartment")]
        compartment: String,
        #[serde(rename = "@formula")]
        formula: String,
    },
    #[serde(rename = "parameterRule")]
    Parameter {
        #[serde(rename = "@name")]
        name: String,
        #[serde(rename = "@formula")]
        formula: String,
    },
    #[serde(
        rename = "speciesConcentrationRule",
        alias = "specieConcentrationRule"
    )]
    SpeciesConcentration {
        #[serde(rename = "@species", alias = "@specie")]
        species: String,
        #[serde(rename = "@formula")]
        formula: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ListOfReactions {
    #[serde(rename = "reaction", default)]
    pub reactions: Vec<ReactionElem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct ReactionElem {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(
        rename = "@reversible",
        default = "default_true",
        skip_serializing_if = "is_true"
    )]
    pub reversible: bool,

    #[serde(rename = "@fast", default, skip_serializing_if = "is_false")]
    pub fast: bool,

    #[serde(
        rename = "listOfReactants",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_reactants: Option<ListOfSpeciesReferences>,

    #[serde(
        rename = "listOfProducts",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_products: Option<ListOfSpeciesReferences>,

    #[serde(rename = "kineticLaw", default, skip_serializing_if = "Option::is_none")]
    pub kinetic_law: Option<KineticLawElem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct ListOfSpeciesReferences {
    #[serde(rename = "speciesReference", alias = "specieReference", default)]
    pub species_references: Vec<SpeciesReferenceElem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct SpeciesReferenceElem {
    #[serde(rename = "@species", alias = "@specie", default)]
    pub species: String,

    #[serde(
        rename = "@stoichiometry",
        default = "default_one_i64",
        skip_serializing_if = "is_one_i64"
    )]
    pub stoichiometry: i64,

    #[serde(
        rename = "@denominator",
        default = "default_one_i64",
        skip_serializing_if = "is_one_i64"
    )]
    pub denominator: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub(crate) struct KineticLawElem {
    #[serde(rename = "@formula", default)]
    pub formula: String,

    #[serde(rename = "@timeUnits", default, skip_serializing_if = "Option::is_none")]
    pub time_units: Option<String>,

    #[serde(
        rename = "@substanceUnits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub substance_units: Option<String>,

    #[serde(
        rename = "listOfParameters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_of_parameters: Option<ListOfParameters>,
}

//! Reading SBML Level 1 XML into the document model
//!
//! The entry point is [`read_sbml`], which takes the raw document text and
//! produces an [`SbmlDocument`]. Reading happens in four steps:
//!
//! 1. the root element is checked to be `sbml` (anything else is rejected
//!    before deserialization so the error names the offending element);
//! 2. the text is deserialized into the raw schema structures, applying the
//!    Level 1 defaulting rules for absent attributes;
//! 3. the declared Level/Version pair is checked against the supported
//!    combinations;
//! 4. the raw structures are converted into the document model and the
//!    Level 1 kinetic-law normalization is applied.
//!
//! # Kinetic-law normalization
//!
//! Level 1 kinetic laws are expected to carry the volume of the reaction's
//! compartment as a multiplicative factor. When a loaded formula does not
//! already start with the compartment name as a leading factor, the loader
//! prefixes it: a law written as `(vm * s1)/(km + s1)` for a reaction whose
//! participants live in compartment `cell` is stored as
//! `cell * (vm * s1)/(km + s1)`. The reaction's compartment is resolved
//! through the first participant (reactants before products) whose species
//! is known to the model; a reaction with no resolvable participant keeps
//! its formula as written.
//! This is a fixed Level 1 rule; it is not applied to any other level and
//! loading an already-normalized document leaves every formula unchanged.

use std::collections::HashMap;

use log::debug;
use quick_xml::events::Event;
use regex::Regex;

use crate::{
    document::{
        Compartment, KineticLaw, Model, Parameter, Reaction, Rule, SbmlDocument, Species,
        SpeciesReference, Unit, UnitDefinition, SUPPORTED_LEVEL_VERSIONS,
    },
    error::SbmlError,
    xml::schema::{
        CompartmentElem, KineticLawElem, ModelElem, ParameterElem, ReactionElem, RuleElem,
        SbmlElem, SpeciesElem, SpeciesReferenceElem, UnitDefinitionElem, UnitElem,
    },
};

/// Parses an SBML Level 1 document from its XML text.
///
/// # Arguments
/// * `text` - The raw XML text of the document
///
/// # Returns
/// The parsed [`SbmlDocument`] with the Level 1 kinetic-law normalization
/// applied.
///
/// # Errors
/// * `SbmlError::UnknownRoot` - the root element is not `sbml`
/// * `SbmlError::Parse` - the input is not well-formed XML or violates the
///   supported schema subset
/// * `SbmlError::UnsupportedLevelVersion` - the declared Level/Version pair
///   is not implemented
pub fn read_sbml(text: &str) -> Result<SbmlDocument, SbmlError> {
    if let Some(root) = root_element_name(text) {
        if root != "sbml" {
            return Err(SbmlError::UnknownRoot(root));
        }
    }

    let raw: SbmlElem = quick_xml::de::from_str(text)?;

    if !SUPPORTED_LEVEL_VERSIONS.contains(&(raw.level, raw.version)) {
        return Err(SbmlError::UnsupportedLevelVersion {
            level: raw.level,
            version: raw.version,
        });
    }

    debug!("parsed SBML L{}V{} document", raw.level, raw.version);

    let mut document = SbmlDocument::new(raw.level, raw.version);
    document.model = raw.model.map(Model::from);

    if let Some(model) = document.model.as_mut() {
        normalize_kinetic_laws(model);
    }

    Ok(document)
}

/// The local name of the first start element in the text, if any.
///
/// A truncated or element-free input yields `None` and is left to the
/// deserializer to report.
fn root_element_name(text: &str) -> Option<String> {
    let mut reader = quick_xml::Reader::from_str(text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                return Some(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            _ => {}
        }
    }
}

/// Prefixes each kinetic-law formula with the reaction's compartment when
/// the compartment is not already a leading multiplicative factor.
fn normalize_kinetic_laws(model: &mut Model) {
    let compartment_of: HashMap<&str, &str> = model
        .species
        .iter()
        .map(|s| (s.name.as_str(), s.compartment.as_str()))
        .collect();

    let mut rewrites: Vec<(usize, String)> = Vec::new();
    for (index, reaction) in model.reactions.iter().enumerate() {
        let Some(law) = reaction.kinetic_law.as_ref() else {
            continue;
        };
        let compartment = reaction
            .reactants
            .iter()
            .chain(reaction.products.iter())
            .find_map(|sr| compartment_of.get(sr.species.as_str()));
        let Some(compartment) = compartment else {
            continue;
        };
        if compartment.is_empty() || has_leading_factor(&law.formula, compartment) {
            continue;
        }
        debug!(
            "normalizing kinetic law of reaction '{}' with compartment '{}'",
            reaction.name, compartment
        );
        rewrites.push((index, format!("{compartment} * {}", law.formula)));
    }

    for (index, formula) in rewrites {
        if let Some(law) = model.reactions[index].kinetic_law.as_mut() {
            law.formula = formula;
        }
    }
}

/// Whether the formula already starts with `name` as a multiplicative
/// factor.
fn has_leading_factor(formula: &str, name: &str) -> bool {
    let pattern = format!(r"^\s*{}\s*\*", regex::escape(name));
    if let Ok(re) = Regex::new(&pattern) {
        re.is_match(formula)
    } else {
        false
    }
}

// Raw schema to document model conversions

impl From<ModelElem> for Model {
    fn from(elem: ModelElem) -> Self {
        Model {
            name: elem.name,
            unit_definitions: elem
                .list_of_unit_definitions
                .map(|list| list.unit_definitions.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
            compartments: elem
                .list_of_compartments
                .map(|list| list.compartments.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
            species: elem
                .list_of_species
                .map(|list| list.species.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
            parameters: elem
                .list_of_parameters
                .map(|list| list.parameters.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
            rules: elem
                .list_of_rules
                .map(|list| list.rules.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
            reactions: elem
                .list_of_reactions
                .map(|list| list.reactions.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<UnitDefinitionElem> for UnitDefinition {
    fn from(elem: UnitDefinitionElem) -> Self {
        UnitDefinition {
            name: elem.name,
            units: elem
                .list_of_units
                .map(|list| list.units.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<UnitElem> for Unit {
    fn from(elem: UnitElem) -> Self {
        Unit {
            kind: elem.kind,
            exponent: elem.exponent,
            scale: elem.scale,
            multiplier: elem.multiplier,
        }
    }
}

impl From<CompartmentElem> for Compartment {
    fn from(elem: CompartmentElem) -> Self {
        Compartment {
            name: elem.name,
            volume: elem.volume,
            units: elem.units,
            outside: elem.outside,
        }
    }
}

impl From<SpeciesElem> for Species {
    fn from(elem: SpeciesElem) -> Self {
        Species {
            name: elem.name,
            compartment: elem.compartment,
            initial_amount: elem.initial_amount,
            initial_concentration: elem.initial_concentration,
            units: elem.units,
            boundary_condition: elem.boundary_condition,
            charge: elem.charge,
        }
    }
}

impl From<ParameterElem> for Parameter {
    fn from(elem: ParameterElem) -> Self {
        Parameter {
            name: elem.name,
            value: elem.value,
            units: elem.units,
        }
    }
}

impl From<RuleElem> for Rule {
    fn from(elem: RuleElem) -> Self {
        match elem {
            RuleElem::Algebraic { formula } => Rule::Algebraic { formula },
            RuleElem::CompartmentVolume {
                compartment,
                formula,
            } => Rule::CompartmentVolume {
                compartment,
                formula,
            },
            RuleElem::Parameter { name, formula } => Rule::Parameter { name, formula },
            RuleElem::SpeciesConcentration { species, formula } => {
                Rule::SpeciesConcentration { species, formula }
            }
        }
    }
}

impl From<ReactionElem> for Reaction {
    fn from(elem: ReactionElem) -> Self {
        Reaction {
            name: elem.name,
            reversible: elem.reversible,
            fast: elem.fast,
            reactants: elem
                .list_of_reactants
                .map(|list| list.species_references.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
            products: elem
                .list_of_products
                .map(|list| list.species_references.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
            kinetic_law: elem.kinetic_law.map(Into::into),
        }
    }
}

impl From<SpeciesReferenceElem> for SpeciesReference {
    fn from(elem: SpeciesReferenceElem) -> Self {
        SpeciesReference {
            species: elem.species,
            stoichiometry: elem.stoichiometry,
            denominator: elem.denominator,
        }
    }
}

impl From<KineticLawElem> for KineticLaw {
    fn from(elem: KineticLawElem) -> Self {
        KineticLaw {
            formula: elem.formula,
            time_units: elem.time_units,
            substance_units: elem.substance_units,
            parameters: elem
                .list_of_parameters
                .map(|list| list.parameters.into_iter().map(Into::into).collect())
                .unwrap_or_default(),
        }
    }
}

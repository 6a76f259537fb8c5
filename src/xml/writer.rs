//! Writing the document model to SBML Level 1 XML
//!
//! The entry point is [`write_sbml`], the symmetric inverse of the reader:
//! the document model is converted back into the raw schema structures and
//! serialized with an XML declaration and two-space indentation. Attributes
//! that carry their Level 1 default value are omitted, and the writer never
//! rewrites kinetic-law formulas, so writing a loaded document and reading
//! it back yields an equal document.

use log::debug;
use serde::Serialize;

use crate::{
    document::{
        Compartment, KineticLaw, Model, Parameter, Reaction, Rule, SbmlDocument, Species,
        SpeciesReference, Unit, UnitDefinition,
    },
    error::SbmlError,
    xml::schema::{
        CompartmentElem, KineticLawElem, ListOfCompartments, ListOfParameters, ListOfReactions,
        ListOfRules, ListOfSpecies, ListOfSpeciesReferences, ListOfUnitDefinitions, ListOfUnits,
        ModelElem, ParameterElem, ReactionElem, RuleElem, SbmlElem, SpeciesElem,
        SpeciesReferenceElem, UnitDefinitionElem, UnitElem, SBML_L1_NS,
    },
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Serializes a document to SBML Level 1 XML text.
///
/// # Arguments
/// * `document` - The document to serialize
///
/// # Returns
/// The XML text, starting with an XML declaration.
///
/// # Errors
/// * `SbmlError::UnsupportedLevelVersion` - the document's Level/Version
///   pair is not implemented
/// * `SbmlError::Serialize` - serialization failed
pub fn write_sbml(document: &SbmlDocument) -> Result<String, SbmlError> {
    if !document.is_supported() {
        return Err(SbmlError::UnsupportedLevelVersion {
            level: document.level,
            version: document.version,
        });
    }

    let raw = SbmlElem {
        xmlns: SBML_L1_NS.to_string(),
        level: document.level,
        version: document.version,
        model: document.model.clone().map(ModelElem::from),
    };

    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    raw.serialize(serializer)?;

    debug!(
        "serialized SBML L{}V{} document ({} bytes)",
        document.level,
        document.version,
        body.len()
    );

    Ok(format!("{XML_DECLARATION}\n{body}\n"))
}

// Document model to raw schema conversions

impl From<Model> for ModelElem {
    fn from(model: Model) -> Self {
        ModelElem {
            name: model.name,
            list_of_unit_definitions: wrap(model.unit_definitions, |unit_definitions| {
                ListOfUnitDefinitions { unit_definitions }
            }),
            list_of_compartments: wrap(model.compartments, |compartments| ListOfCompartments {
                compartments,
            }),
            list_of_species: wrap(model.species, |species| ListOfSpecies { species }),
            list_of_parameters: wrap(model.parameters, |parameters| ListOfParameters {
                parameters,
            }),
            list_of_rules: wrap(model.rules, |rules| ListOfRules { rules }),
            list_of_reactions: wrap(model.reactions, |reactions| ListOfReactions { reactions }),
        }
    }
}

/// Converts a collection into its `listOf*` wrapper, omitting the wrapper
/// entirely when the collection is empty.
fn wrap<T, E, W>(items: Vec<T>, wrapper: impl FnOnce(Vec<E>) -> W) -> Option<W>
where
    E: From<T>,
{
    if items.is_empty() {
        None
    } else {
        Some(wrapper(items.into_iter().map(E::from).collect()))
    }
}

impl From<UnitDefinition> for UnitDefinitionElem {
    fn from(ud: UnitDefinition) -> Self {
        UnitDefinitionElem {
            name: ud.name,
            list_of_units: wrap(ud.units, |units| ListOfUnits { units }),
        }
    }
}

impl From<Unit> for UnitElem {
    fn from(unit: Unit) -> Self {
        UnitElem {
            kind: unit.kind,
            exponent: unit.exponent,
            scale: unit.scale,
            multiplier: unit.multiplier,
        }
    }
}

impl From<Compartment> for CompartmentElem {
    fn from(compartment: Compartment) -> Self {
        CompartmentElem {
            name: compartment.name,
            volume: compartment.volume,
            units: compartment.units,
            outside: compartment.outside,
        }
    }
}

impl From<Species> for SpeciesElem {
    fn from(species: Species) -> Self {
        SpeciesElem {
            name: species.name,
            compartment: species.compartment,
            initial_amount: species.initial_amount,
            initial_concentration: species.initial_concentration,
            units: species.units,
            boundary_condition: species.boundary_condition,
            charge: species.charge,
        }
    }
}

impl From<Parameter> for ParameterElem {
    fn from(parameter: Parameter) -> Self {
        ParameterElem {
            name: parameter.name,
            value: parameter.value,
            units: parameter.units,
        }
    }
}

impl From<Rule> for RuleElem {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Algebraic { formula } => RuleElem::Algebraic { formula },
            Rule::CompartmentVolume {
                compartment,
                formula,
            } => RuleElem::CompartmentVolume {
                compartment,
                formula,
            },
            Rule::Parameter { name, formula } => RuleElem::Parameter { name, formula },
            Rule::SpeciesConcentration { species, formula } => {
                RuleElem::SpeciesConcentration { species, formula }
            }
        }
    }
}

impl From<Reaction> for ReactionElem {
    fn from(reaction: Reaction) -> Self {
        ReactionElem {
            name: reaction.name,
            reversible: reaction.reversible,
            fast: reaction.fast,
            list_of_reactants: wrap(reaction.reactants, |species_references| {
                ListOfSpeciesReferences { species_references }
            }),
            list_of_products: wrap(reaction.products, |species_references| {
                ListOfSpeciesReferences { species_references }
            }),
            kinetic_law: reaction.kinetic_law.map(Into::into),
        }
    }
}

impl From<SpeciesReference> for SpeciesReferenceElem {
    fn from(sr: SpeciesReference) -> Self {
        SpeciesReferenceElem {
            species: sr.species,
            stoichiometry: sr.stoichiometry,
            denominator: sr.denominator,
        }
    }
}

impl From<KineticLaw> for KineticLawElem {
    fn from(law: KineticLaw) -> Self {
        KineticLawElem {
            formula: law.formula,
            time_units: law.time_units,
            substance_units: law.substance_units,
            list_of_parameters: wrap(law.parameters, |parameters| ListOfParameters { parameters }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{unit::UnitKind, xml::reader::read_sbml};

    fn example_document() -> SbmlDocument {
        let mut model = Model {
            name: Some("example".to_string()),
            ..Model::default()
        };

        let ud = model.create_unit_definition();
        ud.name = "substance".to_string();
        let unit = model.create_unit().unwrap();
        unit.kind = UnitKind::Mole;
        unit.scale = -3;

        let compartment = model.create_compartment();
        compartment.name = "cell".to_string();

        let species = model.create_species();
        species.name = "s1".to_string();
        species.compartment = "cell".to_string();
        species.initial_amount = Some(1.0);

        let species = model.create_species();
        species.name = "s2".to_string();
        species.compartment = "cell".to_string();
        species.initial_amount = Some(0.0);

        let parameter = model.create_parameter();
        parameter.name = "k".to_string();
        parameter.value = Some(2.0);

        let reaction = model.create_reaction();
        reaction.name = "v1".to_string();
        let sr = model.create_reactant().unwrap();
        sr.species = "s1".to_string();
        let sr = model.create_product().unwrap();
        sr.species = "s2".to_string();
        let law = model.create_kinetic_law().unwrap();
        law.formula = "cell * k * s1".to_string();

        let mut document = SbmlDocument::new(1, 2);
        document.model = Some(model);
        document
    }

    /// Tests that the emitted XML carries the expected elements and skips
    /// default-valued attributes
    #[test]
    fn test_writer_shape() {
        let xml = write_sbml(&example_document()).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<sbml xmlns="http://www.sbml.org/sbml/level1" level="1" version="2">"#));
        assert!(xml.contains(r#"<unit kind="mole" scale="-3"/>"#));
        assert!(xml.contains(r#"<speciesReference species="s1"/>"#));
        assert!(xml.contains(r#"<kineticLaw formula="cell * k * s1"/>"#));
        // defaults are not written
        assert!(!xml.contains("reversible"));
        assert!(!xml.contains("stoichiometry"));
        assert!(!xml.contains("boundaryCondition"));
    }

    /// Tests that writing a normalized document and reading it back yields
    /// an equal document
    #[test]
    fn test_round_trip() {
        let document = example_document();
        let xml = write_sbml(&document).unwrap();
        let reloaded = read_sbml(&xml).unwrap();

        assert_eq!(reloaded, document);
    }

    /// Tests that a document declaring an unimplemented Level/Version pair
    /// is refused
    #[test]
    fn test_write_unsupported_level() {
        let document = SbmlDocument::new(3, 2);
        let err = write_sbml(&document).unwrap_err();
        assert!(matches!(err, SbmlError::UnsupportedLevelVersion { .. }));
    }
}

//! Validation of by-name cross-references
//!
//! Entities in a model reference each other by name: a species names its
//! compartment, a species reference names its species, parameters and
//! compartments name their units, rules name their targets. None of these
//! names is checked at construction or load time; this module resolves all
//! of them against the owning model's collections and reports the edges
//! that do not resolve.
//!
//! A units reference resolves against the model's unit definitions, the
//! Level 1 built-in unit names (`substance`, `volume`, `time`) and the base
//! unit kinds.

use std::fmt;

use thiserror::Error;

use crate::{
    document::{Model, Rule},
    error::SbmlError,
    unit::UnitKind,
};

/// Unit names Level 1 predefines in every model.
const BUILTIN_UNITS: &[&str] = &["substance", "volume", "time"];

/// One unresolved by-name reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// A named compartment does not exist in the model
    #[error("{referrer} references unknown compartment '{compartment}'")]
    UnknownCompartment {
        /// The entity holding the reference
        referrer: String,
        /// The unresolved compartment name
        compartment: String,
    },

    /// A named species does not exist in the model
    #[error("{referrer} references unknown species '{species}'")]
    UnknownSpecies {
        /// The entity holding the reference
        referrer: String,
        /// The unresolved species name
        species: String,
    },

    /// A named parameter does not exist in the model
    #[error("{referrer} references unknown parameter '{parameter}'")]
    UnknownParameter {
        /// The entity holding the reference
        referrer: String,
        /// The unresolved parameter name
        parameter: String,
    },

    /// A units reference resolves to neither a unit definition, a built-in
    /// unit nor a base unit kind
    #[error("{referrer} references unknown units '{units}'")]
    UnknownUnits {
        /// The entity holding the reference
        referrer: String,
        /// The unresolved units name
        units: String,
    },
}

/// The collected outcome of resolving every by-name edge of a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// The unresolved references, in traversal order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Whether every reference resolved.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Converts the report into a result, surfacing the first unresolved
    /// reference as an [`SbmlError`].
    pub fn into_result(self) -> Result<(), SbmlError> {
        match self.issues.into_iter().next() {
            None => Ok(()),
            Some(issue) => Err(SbmlError::UnresolvedReference(issue.to_string())),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "all references resolved");
        }
        for issue in &self.issues {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Resolves every by-name reference of the model and collects the edges
/// that fail.
///
/// # Arguments
/// * `model` - The model to validate
///
/// # Returns
/// A [`ValidationReport`] listing every unresolved reference in traversal
/// order (compartments, species, parameters, rules, reactions).
pub fn validate_references(model: &Model) -> ValidationReport {
    let mut issues = Vec::new();

    for compartment in &model.compartments {
        let referrer = format!("compartment '{}'", compartment.name);
        if let Some(outside) = &compartment.outside {
            if model.compartment_by_name(outside).is_none() {
                issues.push(ValidationIssue::UnknownCompartment {
                    referrer: referrer.clone(),
                    compartment: outside.clone(),
                });
            }
        }
        if let Some(units) = &compartment.units {
            check_units(model, &referrer, units, &mut issues);
        }
    }

    for species in &model.species {
        let referrer = format!("species '{}'", species.name);
        if !species.compartment.is_empty()
            && model.compartment_by_name(&species.compartment).is_none()
        {
            issues.push(ValidationIssue::UnknownCompartment {
                referrer: referrer.clone(),
                compartment: species.compartment.clone(),
            });
        }
        if let Some(units) = &species.units {
            check_units(model, &referrer, units, &mut issues);
        }
    }

    for parameter in &model.parameters {
        if let Some(units) = &parameter.units {
            let referrer = format!("parameter '{}'", parameter.name);
            check_units(model, &referrer, units, &mut issues);
        }
    }

    for rule in &model.rules {
        check_rule(model, rule, &mut issues);
    }

    for reaction in &model.reactions {
        let referrer = format!("reaction '{}'", reaction.name);
        for sr in reaction.reactants.iter().chain(reaction.products.iter()) {
            if model.species_by_name(&sr.species).is_none() {
                issues.push(ValidationIssue::UnknownSpecies {
                    referrer: referrer.clone(),
                    species: sr.species.clone(),
                });
            }
        }
        if let Some(law) = &reaction.kinetic_law {
            let referrer = format!("kinetic law of reaction '{}'", reaction.name);
            for units in [&law.time_units, &law.substance_units].into_iter().flatten() {
                check_units(model, &referrer, units, &mut issues);
            }
            for parameter in &law.parameters {
                if let Some(units) = &parameter.units {
                    check_units(model, &referrer, units, &mut issues);
                }
            }
        }
    }

    ValidationReport { issues }
}

fn check_units(
    model: &Model,
    referrer: &str,
    units: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    let resolved = model.unit_definition_by_name(units).is_some()
        || BUILTIN_UNITS.contains(&units)
        || units.parse::<UnitKind>().is_ok();
    if !resolved {
        issues.push(ValidationIssue::UnknownUnits {
            referrer: referrer.to_string(),
            units: units.to_string(),
        });
    }
}

fn check_rule(model: &Model, rule: &Rule, issues: &mut Vec<ValidationIssue>) {
    match rule {
        Rule::Algebraic { .. } => {}
        Rule::CompartmentVolume { compartment, .. } => {
            if model.compartment_by_name(compartment).is_none() {
                issues.push(ValidationIssue::UnknownCompartment {
                    referrer: "compartment volume rule".to_string(),
                    compartment: compartment.clone(),
                });
            }
        }
        Rule::Parameter { name, .. } => {
            if !model.parameters.iter().any(|p| p.name == *name) {
                issues.push(ValidationIssue::UnknownParameter {
                    referrer: "parameter rule".to_string(),
                    parameter: name.clone(),
                });
            }
        }
        Rule::SpeciesConcentration { species, .. } => {
            if model.species_by_name(species).is_none() {
                issues.push(ValidationIssue::UnknownSpecies {
                    referrer: "species concentration rule".to_string(),
                    species: species.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn model_with_cell() -> Model {
        let mut model = Model::default();
        let compartment = model.create_compartment();
        compartment.name = "cell".to_string();
        model
    }

    /// Tests that a fully resolvable model produces an empty report
    #[test]
    fn test_resolvable_model() {
        let mut model = model_with_cell();
        let species = model.create_species();
        species.name = "s1".to_string();
        species.compartment = "cell".to_string();
        let parameter = model.create_parameter();
        parameter.name = "vm".to_string();
        parameter.units = Some("second".to_string());
        let reaction = model.create_reaction();
        reaction.name = "v1".to_string();
        let sr = model.create_reactant().unwrap();
        sr.species = "s1".to_string();

        let report = validate_references(&model);
        assert!(report.is_ok());
        assert!(report.into_result().is_ok());
    }

    /// Tests that an unknown compartment reference is reported but not
    /// rejected at construction time
    #[test]
    fn test_unknown_compartment_reported() {
        let mut model = Model::default();
        let species = model.create_species();
        species.name = "s1".to_string();
        species.compartment = "nucleus".to_string();

        let report = validate_references(&model);
        assert_eq!(
            report.issues,
            vec![ValidationIssue::UnknownCompartment {
                referrer: "species 's1'".to_string(),
                compartment: "nucleus".to_string(),
            }]
        );
        assert!(report.into_result().is_err());
    }

    /// Tests that units resolve against unit definitions, built-ins and
    /// base unit kinds
    #[test]
    fn test_units_resolution() {
        let mut model = model_with_cell();
        let ud = model.create_unit_definition();
        ud.name = "mls".to_string();

        for units in ["mls", "substance", "volume", "time", "mole", "litre"] {
            let parameter = model.create_parameter();
            parameter.name = format!("p_{units}");
            parameter.units = Some(units.to_string());
        }
        let parameter = model.create_parameter();
        parameter.name = "bad".to_string();
        parameter.units = Some("fathoms".to_string());

        let report = validate_references(&model);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(
            report.issues[0],
            ValidationIssue::UnknownUnits {
                referrer: "parameter 'bad'".to_string(),
                units: "fathoms".to_string(),
            }
        );
    }

    /// Tests that reaction members and rule targets are resolved
    #[test]
    fn test_reaction_and_rule_targets() {
        let mut model = model_with_cell();
        let reaction = model.create_reaction();
        reaction.name = "v1".to_string();
        let sr = model.create_reactant().unwrap();
        sr.species = "ghost".to_string();
        model.rules.push(Rule::SpeciesConcentration {
            species: "phantom".to_string(),
            formula: "k".to_string(),
        });

        let report = validate_references(&model);
        let species: Vec<&str> = report
            .issues
            .iter()
            .map(|issue| match issue {
                ValidationIssue::UnknownSpecies { species, .. } => species.as_str(),
                other => panic!("unexpected issue: {other}"),
            })
            .collect();
        assert_eq!(species, vec!["phantom", "ghost"]);
    }
}

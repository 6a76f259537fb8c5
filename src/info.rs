//! Information display module for SBML documents
//!
//! This module provides functionality for displaying SBML documents and
//! their components in a human-readable format. It implements the `Display`
//! trait for `SbmlDocument` and provides helper functions to format the
//! model's collections as tables.

use std::fmt::{self, Display};

use tabled::{builder::Builder, settings::Style};

use crate::document::{
    Compartment, Parameter, Reaction, Rule, SbmlDocument, Species, UnitDefinition,
};

/// Trait for converting model components to table records
///
/// Implementors provide column headers and a way to convert their data to
/// string values for each column.
trait TableRecord {
    /// Get the column headers for the table
    fn columns() -> Vec<String>;

    /// Convert the instance to a record for display in a table
    fn to_record(&self) -> Vec<String>;
}

impl Display for SbmlDocument {
    /// Formats an SBML document for display
    ///
    /// Creates a formatted table representation of the document, including
    /// all model collections that are present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(vec![format!(
            "SBML Document (Level {}, Version {})",
            self.level, self.version
        )]);

        let Some(model) = &self.model else {
            builder.push_record(vec!["No model".to_string()]);
            let mut table = builder.build();
            table.with(Style::sharp());
            return write!(f, "{table}");
        };

        if let Some(name) = &model.name {
            builder.push_record(vec![format!("Model: {name}")]);
        }

        if !model.unit_definitions.is_empty() {
            builder.push_record(vec!["Unit Definitions".to_string()]);
            builder.push_record(vec![to_table(&model.unit_definitions)]);
        }

        if !model.compartments.is_empty() {
            builder.push_record(vec!["Compartments".to_string()]);
            builder.push_record(vec![to_table(&model.compartments)]);
        }

        if !model.species.is_empty() {
            builder.push_record(vec!["Species".to_string()]);
            builder.push_record(vec![to_table(&model.species)]);
        }

        if !model.parameters.is_empty() {
            builder.push_record(vec!["Parameters".to_string()]);
            builder.push_record(vec![to_table(&model.parameters)]);
        }

        if !model.rules.is_empty() {
            builder.push_record(vec!["Rules".to_string()]);
            builder.push_record(vec![to_table(&model.rules)]);
        }

        if !model.reactions.is_empty() {
            builder.push_record(vec!["Reactions".to_string()]);
            builder.push_record(vec![to_table(&model.reactions)]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{table}")
    }
}

/// Converts a collection of TableRecord implementors to a formatted table
/// string
fn to_table<T: TableRecord>(records: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(T::columns());

    for record in records {
        builder.push_record(record.to_record());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn optional_f64(value: &Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn optional_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl TableRecord for UnitDefinition {
    fn columns() -> Vec<String> {
        vec!["Name".to_string(), "Units".to_string()]
    }

    fn to_record(&self) -> Vec<String> {
        let units = self
            .units
            .iter()
            .map(|u| format!("{}^{} (scale {})", u.kind, u.exponent, u.scale))
            .collect::<Vec<_>>()
            .join(", ");
        vec![self.name.clone(), units]
    }
}

impl TableRecord for Compartment {
    fn columns() -> Vec<String> {
        vec![
            "Name".to_string(),
            "Volume".to_string(),
            "Units".to_string(),
            "Outside".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            optional_f64(&self.volume),
            optional_str(&self.units),
            optional_str(&self.outside),
        ]
    }
}

impl TableRecord for Species {
    fn columns() -> Vec<String> {
        vec![
            "Name".to_string(),
            "Compartment".to_string(),
            "Initial Amount".to_string(),
            "Initial Concentration".to_string(),
            "Boundary".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.compartment.clone(),
            optional_f64(&self.initial_amount),
            optional_f64(&self.initial_concentration),
            self.boundary_condition.to_string(),
        ]
    }
}

impl TableRecord for Parameter {
    fn columns() -> Vec<String> {
        vec![
            "Name".to_string(),
            "Value".to_string(),
            "Units".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            optional_f64(&self.value),
            optional_str(&self.units),
        ]
    }
}

impl TableRecord for Rule {
    fn columns() -> Vec<String> {
        vec![
            "Type".to_string(),
            "Target".to_string(),
            "Formula".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        match self {
            Rule::Algebraic { formula } => {
                vec!["algebraic".to_string(), String::new(), formula.clone()]
            }
            Rule::CompartmentVolume {
                compartment,
                formula,
            } => vec![
                "compartment volume".to_string(),
                compartment.clone(),
                formula.clone(),
            ],
            Rule::Parameter { name, formula } => {
                vec!["parameter".to_string(), name.clone(), formula.clone()]
            }
            Rule::SpeciesConcentration { species, formula } => vec![
                "species concentration".to_string(),
                species.clone(),
                formula.clone(),
            ],
        }
    }
}

impl TableRecord for Reaction {
    fn columns() -> Vec<String> {
        vec![
            "Name".to_string(),
            "Reactants".to_string(),
            "Products".to_string(),
            "Reversible".to_string(),
            "Kinetic Law".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        let side = |refs: &[crate::document::SpeciesReference]| {
            refs.iter()
                .map(|sr| {
                    if sr.stoichiometry == 1 && sr.denominator == 1 {
                        sr.species.clone()
                    } else {
                        format!("{}/{} {}", sr.stoichiometry, sr.denominator, sr.species)
                    }
                })
                .collect::<Vec<_>>()
                .join(" + ")
        };
        vec![
            self.name.clone(),
            side(&self.reactants),
            side(&self.products),
            self.reversible.to_string(),
            self.kinetic_law
                .as_ref()
                .map(|law| law.formula.clone())
                .unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Model;

    /// Tests that the rendered summary mentions every collection present
    #[test]
    fn test_display_document() {
        let mut model = Model {
            name: Some("example".to_string()),
            ..Model::default()
        };
        let compartment = model.create_compartment();
        compartment.name = "cell".to_string();
        let species = model.create_species();
        species.name = "s1".to_string();
        species.compartment = "cell".to_string();
        let reaction = model.create_reaction();
        reaction.name = "v1".to_string();

        let mut document = SbmlDocument::new(1, 1);
        document.model = Some(model);
        let rendered = document.to_string();

        assert!(rendered.contains("SBML Document (Level 1, Version 1)"));
        assert!(rendered.contains("Model: example"));
        assert!(rendered.contains("Compartments"));
        assert!(rendered.contains("Species"));
        assert!(rendered.contains("Reactions"));
        assert!(rendered.contains("cell"));
        assert!(rendered.contains("v1"));
    }

    /// Tests that a document without a model still renders
    #[test]
    fn test_display_empty_document() {
        let document = SbmlDocument::new(1, 2);
        assert!(document.to_string().contains("No model"));
    }
}

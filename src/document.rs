//! The SBML Level 1 document model
//!
//! This module defines the in-memory representation of an SBML Level 1
//! document: the top-level [`SbmlDocument`] with its Level/Version pair, the
//! [`Model`] it contains, and the ordered child collections of the model
//! (unit definitions, compartments, species, parameters, rules, reactions).
//!
//! All cross-references between entities (a species' compartment, a species
//! reference's species, a parameter's units) are plain name strings resolved
//! lazily against the owning model's collections — never ownership edges.
//! Nothing checks these names at construction time; resolution failures
//! surface through the [`crate::validation`] module.
//!
//! Entities can be constructed two ways:
//! - through the `create_*` methods on [`Model`], which append a
//!   default-initialized entity to the relevant collection and return a
//!   mutable handle for further mutation;
//! - through the `derive_builder` builders, for whole-struct construction.
//!
//! Collections preserve insertion order and are index-addressed. Duplicate
//! names within a collection are permitted.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{error::SbmlError, unit::UnitKind};

/// The level/version combinations this crate implements.
pub const SUPPORTED_LEVEL_VERSIONS: &[(u32, u32)] = &[(1, 1), (1, 2)];

/// The root container of an SBML document.
///
/// Holds the Level/Version pair of the schema the document was written
/// against and at most one [`Model`]. The document exclusively owns its
/// model; dropping the document drops everything below it.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, PartialEq)]
pub struct SbmlDocument {
    /// SBML level of the document.
    #[builder(default = "1")]
    pub level: u32,

    /// Version within the level.
    #[builder(default = "1")]
    pub version: u32,

    /// The model contained in the document, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub model: Option<Model>,
}

impl Default for SbmlDocument {
    fn default() -> Self {
        SbmlDocument {
            level: 1,
            version: 1,
            model: None,
        }
    }
}

impl SbmlDocument {
    /// Creates an empty document for the given level and version.
    pub fn new(level: u32, version: u32) -> Self {
        SbmlDocument {
            level,
            version,
            model: None,
        }
    }

    /// Whether the document's level/version pair is one this crate
    /// implements.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_LEVEL_VERSIONS.contains(&(self.level, self.version))
    }

    /// The document's model, for operations that need one.
    ///
    /// # Errors
    ///
    /// Returns `SbmlError::MissingModel` when the document has no model.
    pub fn require_model(&self) -> Result<&Model, SbmlError> {
        self.model.as_ref().ok_or(SbmlError::MissingModel)
    }
}

/// A biochemical reaction network model.
///
/// Aggregates the ordered child collections of an SBML Level 1 model. The
/// model exclusively owns its children; entities reference each other by
/// name only.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Default, PartialEq)]
pub struct Model {
    /// Name of the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,

    /// Named composite units available to the model.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_unit_definitions")))]
    pub unit_definitions: Vec<UnitDefinition>,

    /// Containers species live in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_compartments")))]
    pub compartments: Vec<Compartment>,

    /// Chemical entities taking part in reactions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_species")))]
    pub species: Vec<Species>,

    /// Global scalar parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_parameters")))]
    pub parameters: Vec<Parameter>,

    /// Mathematical rules constraining model quantities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_rules")))]
    pub rules: Vec<Rule>,

    /// Transformations between species.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_reactions")))]
    pub reactions: Vec<Reaction>,
}

impl Model {
    /// Appends a new, empty unit definition and returns a handle to it.
    pub fn create_unit_definition(&mut self) -> &mut UnitDefinition {
        self.unit_definitions.push(UnitDefinition::default());
        self.unit_definitions.last_mut().unwrap()
    }

    /// Appends a new unit to the most recently created unit definition.
    ///
    /// Returns `None` when the model has no unit definition yet.
    pub fn create_unit(&mut self) -> Option<&mut Unit> {
        let ud = self.unit_definitions.last_mut()?;
        ud.units.push(Unit::default());
        ud.units.last_mut()
    }

    /// Appends a new, empty compartment and returns a handle to it.
    pub fn create_compartment(&mut self) -> &mut Compartment {
        self.compartments.push(Compartment::default());
        self.compartments.last_mut().unwrap()
    }

    /// Appends a new, empty species and returns a handle to it.
    pub fn create_species(&mut self) -> &mut Species {
        self.species.push(Species::default());
        self.species.last_mut().unwrap()
    }

    /// Appends a new, empty parameter and returns a handle to it.
    pub fn create_parameter(&mut self) -> &mut Parameter {
        self.parameters.push(Parameter::default());
        self.parameters.last_mut().unwrap()
    }

    /// Appends a new, default-initialized reaction and returns a handle to
    /// it. The reaction starts out reversible and not fast.
    pub fn create_reaction(&mut self) -> &mut Reaction {
        self.reactions.push(Reaction::default());
        self.reactions.last_mut().unwrap()
    }

    /// Appends a new reactant reference to the most recently created
    /// reaction.
    ///
    /// Returns `None` when the model has no reaction yet.
    pub fn create_reactant(&mut self) -> Option<&mut SpeciesReference> {
        let reaction = self.reactions.last_mut()?;
        reaction.reactants.push(SpeciesReference::default());
        reaction.reactants.last_mut()
    }

    /// Appends a new product reference to the most recently created
    /// reaction.
    ///
    /// Returns `None` when the model has no reaction yet.
    pub fn create_product(&mut self) -> Option<&mut SpeciesReference> {
        let reaction = self.reactions.last_mut()?;
        reaction.products.push(SpeciesReference::default());
        reaction.products.last_mut()
    }

    /// Installs an empty kinetic law on the most recently created reaction,
    /// replacing any existing one, and returns a handle to it.
    ///
    /// Returns `None` when the model has no reaction yet.
    pub fn create_kinetic_law(&mut self) -> Option<&mut KineticLaw> {
        let reaction = self.reactions.last_mut()?;
        reaction.kinetic_law = Some(KineticLaw::default());
        reaction.kinetic_law.as_mut()
    }

    /// The unit definition at the given insertion index.
    pub fn unit_definition(&self, index: usize) -> Option<&UnitDefinition> {
        self.unit_definitions.get(index)
    }

    /// The compartment at the given insertion index.
    pub fn compartment(&self, index: usize) -> Option<&Compartment> {
        self.compartments.get(index)
    }

    /// The species at the given insertion index.
    pub fn get_species(&self, index: usize) -> Option<&Species> {
        self.species.get(index)
    }

    /// The parameter at the given insertion index.
    pub fn parameter(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index)
    }

    /// The rule at the given insertion index.
    pub fn rule(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// The reaction at the given insertion index.
    pub fn reaction(&self, index: usize) -> Option<&Reaction> {
        self.reactions.get(index)
    }

    /// Looks up a compartment by name. The first match wins when names are
    /// duplicated.
    pub fn compartment_by_name(&self, name: &str) -> Option<&Compartment> {
        self.compartments.iter().find(|c| c.name == name)
    }

    /// Looks up a species by name. The first match wins when names are
    /// duplicated.
    pub fn species_by_name(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }

    /// Looks up a unit definition by name. The first match wins when names
    /// are duplicated.
    pub fn unit_definition_by_name(&self, name: &str) -> Option<&UnitDefinition> {
        self.unit_definitions.iter().find(|ud| ud.name == name)
    }
}

/// A named composite unit built from one or more base units.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Default, PartialEq)]
pub struct UnitDefinition {
    /// Name the unit is referenced by.
    #[serde(default)]
    #[builder(default, setter(into))]
    pub name: String,

    /// The ordered base-unit factors making up the composite unit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_units")))]
    pub units: Vec<Unit>,
}

/// One base-unit factor of a unit definition.
///
/// Represents `multiplier * 10^scale * kind^exponent`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, PartialEq)]
pub struct Unit {
    /// The base unit this factor is built on.
    #[builder(default)]
    pub kind: UnitKind,

    /// Exponent on the base unit.
    #[serde(default = "default_one_i32")]
    #[builder(default = "1")]
    pub exponent: i32,

    /// Decimal scale applied to the base unit.
    #[serde(default)]
    #[builder(default)]
    pub scale: i32,

    /// Linear multiplier applied to the base unit.
    #[serde(default = "default_one_f64")]
    #[builder(default = "1.0")]
    pub multiplier: f64,
}

impl Default for Unit {
    fn default() -> Self {
        Unit {
            kind: UnitKind::default(),
            exponent: 1,
            scale: 0,
            multiplier: 1.0,
        }
    }
}

/// A bounded container that species live in.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Default, PartialEq)]
pub struct Compartment {
    /// Name the compartment is referenced by.
    #[serde(default)]
    #[builder(default, setter(into))]
    pub name: String,

    /// Volume of the compartment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub volume: Option<f64>,

    /// Units the volume is expressed in, by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub units: Option<String>,

    /// Name of the enclosing compartment, if nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub outside: Option<String>,
}

/// A chemical entity located in a compartment.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Default, PartialEq)]
pub struct Species {
    /// Name the species is referenced by.
    #[serde(default)]
    #[builder(default, setter(into))]
    pub name: String,

    /// Name of the compartment the species lives in.
    #[serde(default)]
    #[builder(default, setter(into))]
    pub compartment: String,

    /// Initial amount of the species.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub initial_amount: Option<f64>,

    /// Initial concentration of the species.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub initial_concentration: Option<f64>,

    /// Units of the amount, by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub units: Option<String>,

    /// Whether the species is held constant at a boundary of the reaction
    /// system. Default is false.
    #[serde(default)]
    #[builder(default)]
    pub boundary_condition: bool,

    /// Electrical charge of the species.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub charge: Option<i32>,
}

/// A named scalar value, global or local to a kinetic law.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Default, PartialEq)]
pub struct Parameter {
    /// Name the parameter is referenced by.
    #[serde(default)]
    #[builder(default, setter(into))]
    pub name: String,

    /// Value of the parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub value: Option<f64>,

    /// Units the value is expressed in, by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub units: Option<String>,
}

/// A mathematical rule constraining a model quantity.
///
/// Level 1 distinguishes four rule elements by the quantity they target.
/// Formulas are stored verbatim and never evaluated by this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Rule {
    /// A constraint with no designated target variable.
    Algebraic {
        /// The constraint expression.
        formula: String,
    },
    /// A rule determining a compartment's volume.
    CompartmentVolume {
        /// Name of the targeted compartment.
        compartment: String,
        /// The volume expression.
        formula: String,
    },
    /// A rule determining a parameter's value.
    Parameter {
        /// Name of the targeted parameter.
        name: String,
        /// The value expression.
        formula: String,
    },
    /// A rule determining a species' concentration.
    SpeciesConcentration {
        /// Name of the targeted species.
        species: String,
        /// The concentration expression.
        formula: String,
    },
}

/// A named transformation between species.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, PartialEq)]
pub struct Reaction {
    /// Name the reaction is referenced by.
    #[serde(default)]
    #[builder(default, setter(into))]
    pub name: String,

    /// Whether the reaction can proceed in both directions. Default is
    /// true; an absent attribute means reversible.
    #[serde(default = "default_true")]
    #[builder(default = "true")]
    pub reversible: bool,

    /// Whether the reaction is treated as instantaneous. Default is false.
    #[serde(default)]
    #[builder(default)]
    pub fast: bool,

    /// Ordered references to the consumed species.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_reactants")))]
    pub reactants: Vec<SpeciesReference>,

    /// Ordered references to the produced species.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_products")))]
    pub products: Vec<SpeciesReference>,

    /// The rate law governing the reaction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub kinetic_law: Option<KineticLaw>,
}

impl Default for Reaction {
    fn default() -> Self {
        Reaction {
            name: String::new(),
            reversible: true,
            fast: false,
            reactants: Vec::new(),
            products: Vec::new(),
            kinetic_law: None,
        }
    }
}

impl Reaction {
    /// The reactant reference at the given insertion index.
    pub fn reactant(&self, index: usize) -> Option<&SpeciesReference> {
        self.reactants.get(index)
    }

    /// The product reference at the given insertion index.
    pub fn product(&self, index: usize) -> Option<&SpeciesReference> {
        self.products.get(index)
    }
}

/// A reference from a reaction to a species used as reactant or product.
///
/// Stoichiometry and denominator together express a rational coefficient
/// `stoichiometry / denominator`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, PartialEq)]
pub struct SpeciesReference {
    /// Name of the referenced species.
    #[serde(default)]
    #[builder(default, setter(into))]
    pub species: String,

    /// Numerator of the stoichiometric coefficient. Default is 1.
    #[serde(default = "default_one_i64")]
    #[builder(default = "1")]
    pub stoichiometry: i64,

    /// Denominator of the stoichiometric coefficient. Default is 1.
    #[serde(default = "default_one_i64")]
    #[builder(default = "1")]
    pub denominator: i64,
}

impl Default for SpeciesReference {
    fn default() -> Self {
        SpeciesReference {
            species: String::new(),
            stoichiometry: 1,
            denominator: 1,
        }
    }
}

/// The rate expression governing a reaction.
///
/// The formula is an opaque string; this layer stores and transports it but
/// never parses or evaluates it.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Default, PartialEq)]
pub struct KineticLaw {
    /// The rate expression, stored verbatim.
    #[serde(default)]
    #[builder(default, setter(into))]
    pub formula: String,

    /// Units of time the formula assumes, by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub time_units: Option<String>,

    /// Units of substance the formula assumes, by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub substance_units: Option<String>,

    /// Parameters local to this kinetic law, shadowing globals of the same
    /// name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into, each(name = "to_parameters")))]
    pub parameters: Vec<Parameter>,
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Tests the create-then-mutate construction path: entities are
    /// appended default-initialized and mutated through the returned handle
    #[test]
    fn test_create_path_appends_in_order() {
        let mut model = Model::default();

        let ud = model.create_unit_definition();
        ud.name = "substance".to_string();
        let u = model.create_unit().unwrap();
        u.kind = UnitKind::Mole;
        u.scale = -3;

        let c = model.create_compartment();
        c.name = "cell".to_string();

        let s = model.create_species();
        s.name = "s1".to_string();
        s.compartment = "cell".to_string();
        s.initial_amount = Some(1.0);

        let r = model.create_reaction();
        r.name = "v1".to_string();
        let sr = model.create_reactant().unwrap();
        sr.species = "s1".to_string();
        let kl = model.create_kinetic_law().unwrap();
        kl.formula = "(vm * s1)/(km + s1)".to_string();

        assert_eq!(model.unit_definitions.len(), 1);
        assert_eq!(model.unit_definition(0).unwrap().name, "substance");
        assert_eq!(model.unit_definition(0).unwrap().units[0].kind, UnitKind::Mole);
        assert_eq!(model.unit_definition(0).unwrap().units[0].exponent, 1);
        assert_eq!(model.unit_definition(0).unwrap().units[0].scale, -3);
        assert_eq!(model.compartment(0).unwrap().name, "cell");
        assert_eq!(model.get_species(0).unwrap().compartment, "cell");
        assert!(!model.get_species(0).unwrap().boundary_condition);

        let r = model.reaction(0).unwrap();
        assert!(r.reversible);
        assert!(!r.fast);
        assert_eq!(r.reactant(0).unwrap().species, "s1");
        assert_eq!(r.reactant(0).unwrap().stoichiometry, 1);
        assert_eq!(r.reactant(0).unwrap().denominator, 1);
        assert_eq!(
            r.kinetic_law.as_ref().unwrap().formula,
            "(vm * s1)/(km + s1)"
        );
    }

    /// Tests that child creators return None when no parent entity exists
    #[test]
    fn test_create_without_parent_returns_none() {
        let mut model = Model::default();
        assert!(model.create_unit().is_none());
        assert!(model.create_reactant().is_none());
        assert!(model.create_product().is_none());
        assert!(model.create_kinetic_law().is_none());
    }

    /// Tests that duplicate names are accepted and lookups return the first
    /// match
    #[test]
    fn test_duplicate_names_first_match_wins() {
        let mut model = Model::default();
        let c = model.create_compartment();
        c.name = "cell".to_string();
        c.volume = Some(1.0);
        let c = model.create_compartment();
        c.name = "cell".to_string();
        c.volume = Some(2.0);

        assert_eq!(model.compartments.len(), 2);
        assert_eq!(model.compartment_by_name("cell").unwrap().volume, Some(1.0));
    }

    /// Tests that a model-less document is reported as such while a
    /// populated one hands out its model
    #[test]
    fn test_require_model() {
        let mut document = SbmlDocument::new(1, 1);
        assert!(matches!(
            document.require_model(),
            Err(SbmlError::MissingModel)
        ));

        document.model = Some(Model::default());
        assert!(document.require_model().is_ok());
    }

    /// Tests whole-struct construction through the generated builders
    #[test]
    fn test_builder_construction() {
        let doc = SbmlDocumentBuilder::default()
            .level(1)
            .version(2)
            .model(
                ModelBuilder::default()
                    .name("example")
                    .to_species(
                        SpeciesBuilder::default()
                            .name("x0")
                            .compartment("cell")
                            .initial_amount(1.0)
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert!(doc.is_supported());
        let model = doc.model.unwrap();
        assert_eq!(model.name.as_deref(), Some("example"));
        assert_eq!(model.species[0].initial_amount, Some(1.0));
        assert_eq!(model.species[0].initial_concentration, None);
    }
}

//! Reads tests/data/l1v1-units.xml into memory and checks it field by
//! field, then cross-checks the loader against the programmatic
//! construction path and the writer.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use sbmldoc::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from("tests/data/l1v1-units.xml")
}

/// Builds the same document the fixture describes through the create-then-
/// mutate path, with the kinetic-law formulas the loader is expected to
/// produce after normalization.
fn build_l1v1_units() -> SbmlDocument {
    let mut m = Model::default();

    let ud = m.create_unit_definition();
    ud.name = "substance".to_string();
    let u = m.create_unit().unwrap();
    u.kind = UnitKind::Mole;
    u.scale = -3;

    let ud = m.create_unit_definition();
    ud.name = "mls".to_string();
    let u = m.create_unit().unwrap();
    u.kind = UnitKind::Mole;
    u.scale = -3;
    let u = m.create_unit().unwrap();
    u.kind = UnitKind::Liter;
    u.exponent = -1;
    let u = m.create_unit().unwrap();
    u.kind = UnitKind::Second;
    u.exponent = -1;

    let c = m.create_compartment();
    c.name = "cell".to_string();

    for name in ["x0", "x1", "s1", "s2"] {
        let s = m.create_species();
        s.name = name.to_string();
        s.compartment = "cell".to_string();
        s.initial_amount = Some(1.0);
    }

    let p = m.create_parameter();
    p.name = "vm".to_string();
    p.units = Some("mls".to_string());
    p.value = Some(2.0);

    let p = m.create_parameter();
    p.name = "km".to_string();
    p.value = Some(2.0);

    for (name, reactant, product, formula) in [
        ("v1", "x0", "s1", "cell * (vm * s1)/(km + s1)"),
        ("v2", "s1", "s2", "cell * (vm * s2)/(km + s2)"),
        ("v3", "s2", "x1", "cell * (vm * s1)/(km + s1)"),
    ] {
        let r = m.create_reaction();
        r.name = name.to_string();
        let sr = m.create_reactant().unwrap();
        sr.species = reactant.to_string();
        let sr = m.create_product().unwrap();
        sr.species = product.to_string();
        let kl = m.create_kinetic_law().unwrap();
        kl.formula = formula.to_string();
    }

    let mut d = SbmlDocument::new(1, 1);
    d.model = Some(m);
    d
}

#[test]
fn test_read_l1v1_units() {
    let d = load_sbml(fixture_path()).unwrap();

    assert_eq!(d.level, 1);
    assert_eq!(d.version, 1);

    let m = d.model.as_ref().unwrap();

    assert_eq!(m.unit_definitions.len(), 2);
    let ud = m.unit_definition(0).unwrap();
    assert_eq!(ud.name, "substance");
    assert_eq!(ud.units.len(), 1);
    let u = &ud.units[0];
    assert_eq!(u.kind, UnitKind::Mole);
    assert_eq!(u.exponent, 1);
    assert_eq!(u.scale, -3);

    let ud = m.unit_definition(1).unwrap();
    assert_eq!(ud.name, "mls");
    assert_eq!(ud.units.len(), 3);
    let u = &ud.units[0];
    assert_eq!(u.kind, UnitKind::Mole);
    assert_eq!(u.exponent, 1);
    assert_eq!(u.scale, -3);
    let u = &ud.units[1];
    assert_eq!(u.kind, UnitKind::Liter);
    assert_eq!(u.exponent, -1);
    assert_eq!(u.scale, 0);
    let u = &ud.units[2];
    assert_eq!(u.kind, UnitKind::Second);
    assert_eq!(u.exponent, -1);
    assert_eq!(u.scale, 0);

    assert_eq!(m.compartments.len(), 1);
    assert_eq!(m.compartment(0).unwrap().name, "cell");

    assert_eq!(m.species.len(), 4);
    for (index, name) in ["x0", "x1", "s1", "s2"].iter().enumerate() {
        let s = m.get_species(index).unwrap();
        assert_eq!(s.name, *name);
        assert_eq!(s.compartment, "cell");
        assert_eq!(s.initial_amount, Some(1.0));
        assert!(!s.boundary_condition);
    }

    assert_eq!(m.parameters.len(), 2);
    let p = m.parameter(0).unwrap();
    assert_eq!(p.name, "vm");
    assert_eq!(p.units.as_deref(), Some("mls"));
    assert_eq!(p.value, Some(2.0));
    let p = m.parameter(1).unwrap();
    assert_eq!(p.name, "km");
    assert_eq!(p.value, Some(2.0));

    assert_eq!(m.reactions.len(), 3);
    for (index, name) in ["v1", "v2", "v3"].iter().enumerate() {
        let r = m.reaction(index).unwrap();
        assert_eq!(r.name, *name);
        assert!(r.reversible);
        assert!(!r.fast);
        assert_eq!(r.reactants.len(), 1);
        assert_eq!(r.products.len(), 1);
    }

    let expected = [
        ("x0", "s1", "cell * (vm * s1)/(km + s1)"),
        ("s1", "s2", "cell * (vm * s2)/(km + s2)"),
        ("s2", "x1", "cell * (vm * s1)/(km + s1)"),
    ];
    for (index, (reactant, product, formula)) in expected.iter().enumerate() {
        let r = m.reaction(index).unwrap();
        let sr = r.reactant(0).unwrap();
        assert_eq!(sr.species, *reactant);
        assert_eq!(sr.stoichiometry, 1);
        assert_eq!(sr.denominator, 1);
        let sr = r.product(0).unwrap();
        assert_eq!(sr.species, *product);
        assert_eq!(sr.stoichiometry, 1);
        assert_eq!(sr.denominator, 1);
        assert_eq!(r.kinetic_law.as_ref().unwrap().formula, *formula);
    }
}

/// The loader must produce, field for field, the same document shape the
/// programmatic builder produces for equivalent content.
#[test]
fn test_loader_matches_builder() {
    let loaded = load_sbml(fixture_path()).unwrap();
    let built = build_l1v1_units();

    assert_eq!(loaded, built);
}

/// Every reference in the fixture resolves.
#[test]
fn test_fixture_references_resolve() {
    let d = load_sbml(fixture_path()).unwrap();
    let report = validate_references(d.model.as_ref().unwrap());
    assert!(report.is_ok(), "{report}");
}

/// Writing the loaded document and reading it back yields an equal
/// document; the normalization prefix survives unchanged.
#[test]
fn test_write_read_round_trip() {
    let d = load_sbml(fixture_path()).unwrap();
    let xml = write_sbml(&d).unwrap();
    let reloaded = read_sbml(&xml).unwrap();

    assert_eq!(reloaded, d);
}

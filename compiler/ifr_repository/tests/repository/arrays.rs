//! Boxed arrays.

use ifr_core::{DefinitionKind, PrimitiveKind, TcKind, TypeCode};
use pretty_assertions::assert_eq;

use crate::common::{banking, builder, catalog, find, scoped_name};

#[test]
fn each_dimension_gets_a_box() {
    let catalog = catalog();
    let (mut builder, _) = builder(&catalog);

    let seq2 = builder.map_class("[[I").unwrap().unwrap();
    let count = builder.node_count();
    let seq1 = builder.map_class("[I").unwrap().unwrap();
    assert_ne!(seq1, seq2);
    assert_eq!(builder.node_count(), count);

    let repository = builder.finish_build().unwrap();
    assert_eq!(scoped_name(&repository, seq2), "::org::omg::boxedRMI::seq2_long");
    assert_eq!(scoped_name(&repository, seq1), "::org::omg::boxedRMI::seq1_long");
    assert_eq!(
        repository.node(seq2).unwrap().repository_id(),
        Some("RMI:[[I:0000000000000000")
    );

    // seq2_long boxes sequence<seq1_long>, which boxes sequence<long>.
    let outer = repository.node(seq2).unwrap().type_def().unwrap();
    let outer = repository.node(outer).unwrap();
    assert_eq!(outer.kind(), DefinitionKind::Sequence);
    assert_eq!(outer.type_def(), Some(seq1));

    let inner = repository.node(seq1).unwrap().type_def().unwrap();
    let inner = repository.node(inner).unwrap();
    assert_eq!(
        inner.type_code(),
        Some(TypeCode::sequence_of(TypeCode::Basic(TcKind::Long)))
    );
    assert_eq!(inner.type_def(), repository.get_primitive(PrimitiveKind::Long));
    assert!(inner.is_exported());
}

#[test]
fn class_arrays_follow_the_element_package() {
    let (repository, _) = banking();
    let entries = find(&repository, "::com::acme::Ledger::entries");
    let seq1 = find(&repository, "::org::omg::boxedRMI::com::acme::seq1_Money");

    assert_eq!(repository.node(entries).unwrap().type_def(), Some(seq1));
    assert_eq!(
        repository.lookup_id("RMI:[Lcom.acme.Money;:1111111111111111:2222222222222222"),
        Some(seq1)
    );
    assert_eq!(repository.node(seq1).unwrap().kind(), DefinitionKind::ValueBox);
}

#[test]
fn string_arrays_live_next_to_wstring_value() {
    let (repository, _) = banking();
    let tags = find(&repository, "::com::acme::Ledger::tags");
    let seq1 = find(&repository, "::org::omg::boxedRMI::CORBA::seq1_WStringValue");
    assert_eq!(repository.node(tags).unwrap().type_def(), Some(seq1));

    let sequence = repository.node(seq1).unwrap().type_def().unwrap();
    assert_eq!(
        repository.node(sequence).unwrap().type_def(),
        repository.lookup("::org::omg::CORBA::WStringValue")
    );
}

#[test]
fn arrays_of_one_element_type_share_lower_dimensions() {
    let (repository, _) = banking();
    let totals = find(&repository, "::com::acme::Ledger::totals");
    let seq2 = find(&repository, "::org::omg::boxedRMI::seq2_long");
    assert_eq!(repository.node(totals).unwrap().type_def(), Some(seq2));

    let seq1s = repository
        .nodes()
        .filter(|node| node.name() == Some("seq1_long"))
        .count();
    assert_eq!(seq1s, 1);
}

#[test]
fn exception_arrays_are_named_after_the_boxed_value() {
    let catalog = catalog();
    let (mut builder, _) = builder(&catalog);
    let seq1 = builder
        .map_class("[Lcom.acme.OverdraftException;")
        .unwrap()
        .unwrap();
    let repository = builder.finish_build().unwrap();

    assert_eq!(
        scoped_name(&repository, seq1),
        "::org::omg::boxedRMI::com::acme::seq1_OverdraftException"
    );
    assert_eq!(
        repository.lookup_id("RMI:[Lcom.acme.OverdraftException;:1234567890ABCDEF:0000000000000001"),
        Some(seq1)
    );

    // The sequence holds the value, not the exception.
    let sequence = repository.node(seq1).unwrap().type_def().unwrap();
    let element = repository.node(sequence).unwrap().type_def().unwrap();
    assert_eq!(
        repository.node(element).unwrap().kind(),
        DefinitionKind::Value
    );
    assert_eq!(
        scoped_name(&repository, element),
        "::com::acme::OverdraftException"
    );
    assert!(repository.lookup("::com::acme::OverdraftEx").is_some());
}

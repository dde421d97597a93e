//! ID and name lookup over a finished repository.

use ifr_core::ids::{CORBA_OBJECT_ID, CORBA_VALUE_BASE_ID};
use ifr_core::DefinitionKind;
use pretty_assertions::assert_eq;

use crate::common::{banking, find};

#[test]
fn every_contained_node_round_trips() {
    let (repository, _) = banking();
    let mut checked = 0;

    for node in repository.nodes() {
        let Some(contained) = node.as_contained() else {
            continue;
        };
        assert_eq!(
            repository.lookup_id(contained.repository_id()),
            Some(node.id()),
            "{}",
            contained.repository_id()
        );
        assert_eq!(
            repository.lookup(&contained.absolute_name().to_string()),
            Some(node.id())
        );
        checked += 1;
    }
    assert!(checked > 20, "only {checked} contained nodes");
}

#[test]
fn reserved_and_unknown_ids_find_nothing() {
    let (repository, _) = banking();

    assert_eq!(repository.lookup_id(CORBA_OBJECT_ID), None);
    assert_eq!(repository.lookup_id(CORBA_VALUE_BASE_ID), None);
    assert_eq!(repository.lookup_id("IDL:com/acme/Nothing:1.0"), None);
    assert_eq!(repository.lookup_id("RMI:[Lcom.acme.Nothing;:0000000000000000"), None);
    assert_eq!(repository.lookup_id("DCE:1234:1"), None);
    assert_eq!(repository.lookup_id(""), None);
}

#[test]
fn scoped_names_resolve_from_any_container() {
    let (repository, _) = banking();
    let acme = find(&repository, "com::acme");
    let money = find(&repository, "::com::acme::Money");

    let container = repository.node(acme).unwrap().as_container().unwrap();
    assert_eq!(container.lookup("Money"), Some(money));
    assert_eq!(container.lookup("::com::acme::Money"), Some(money));
    assert_eq!(container.lookup("Money::amount"), repository.lookup("com::acme::Money::amount"));
    assert_eq!(container.lookup("Money::SCALE::x"), None);
    assert_eq!(container.lookup(""), None);
}

#[test]
fn root_contents_are_the_top_modules() {
    let (repository, _) = banking();
    let mut modules: Vec<&str> = repository
        .contents(DefinitionKind::Module, false)
        .into_iter()
        .filter_map(|id| repository.node(id).and_then(|node| node.name()))
        .collect();
    modules.sort_unstable();
    assert_eq!(modules, vec!["com", "java", "javax", "org"]);

    assert!(repository.contents(DefinitionKind::Interface, false).is_empty());
    assert_eq!(
        repository.contents(DefinitionKind::All, true).len(),
        repository.contents(DefinitionKind::All, false).len()
    );
}

#[test]
fn name_search_descends_levels() {
    let (repository, _) = banking();
    let amount = find(&repository, "::com::acme::Money::amount");

    assert_eq!(
        repository.lookup_name("amount", -1, DefinitionKind::All, false),
        vec![amount]
    );
    assert_eq!(
        repository.lookup_name("amount", -1, DefinitionKind::Attribute, false),
        Vec::new()
    );
    // ::com::acme::Money::amount is four levels below the root.
    assert!(repository
        .lookup_name("amount", 3, DefinitionKind::All, false)
        .is_empty());
    assert_eq!(
        repository.lookup_name("amount", 4, DefinitionKind::All, false),
        vec![amount]
    );
}

#[test]
fn describe_contents_honours_the_limit() {
    let (repository, _) = banking();
    let account = find(&repository, "::com::acme::Account");
    let container = repository.node(account).unwrap().as_container().unwrap();

    let all = container.describe_contents(DefinitionKind::All, false, -1);
    let names: Vec<&str> = all.iter().map(|d| d.value.name()).collect();
    assert_eq!(names, vec!["balance", "deposit", "owner"]);
    assert_eq!(container.describe_contents(DefinitionKind::All, false, 2).len(), 2);
    assert_eq!(
        container
            .describe_contents(DefinitionKind::Operation, false, -1)
            .len(),
        2
    );
}

//! What each kind of Java class maps to.

use ifr_core::ids::{CORBA_OBJECT_ID, WSTRING_VALUE_ID};
use ifr_core::{
    AnalysisError, ClassCatalog, ClassFlavor, DefinitionKind, OperationAnalysis, PrimitiveKind,
    TcKind, TypeCode,
};
use ifr_repository::{AttributeMode, DescriptionValue, IrError, Visibility};
use pretty_assertions::assert_eq;

use crate::common::{
    banking, build, builder, catalog, class, find, scoped_name, ACCOUNT_ID, CLASSES, MONEY_ID,
};

#[test]
fn remote_interfaces_become_interfaces() {
    let (repository, _) = banking();
    let account = find(&repository, "::com::acme::Account");
    let teller = find(&repository, "::com::acme::Teller");

    let view = repository.node(teller).unwrap();
    assert_eq!(view.kind(), DefinitionKind::Interface);
    assert_eq!(view.repository_id(), Some("RMI:com.acme.Teller:0000000000000000"));
    assert_eq!(view.base_interfaces(), vec![account]);
    assert!(view.is_a(ACCOUNT_ID));
    assert!(view.is_a(CORBA_OBJECT_ID));
    assert!(!view.is_a(MONEY_ID));

    let full = view.describe_interface().unwrap();
    assert_eq!(full.base_interfaces, vec![ACCOUNT_ID.to_owned()]);
    assert_eq!(full.defined_in, "IDL:com/acme:1.0");
    let operations: Vec<&str> = full.operations.iter().map(|op| op.name.as_str()).collect();
    assert_eq!(operations, vec!["transfer"]);
    assert!(full.attributes.is_empty());
}

#[test]
fn interface_members_carry_types_and_exceptions() {
    let (repository, _) = banking();
    let full = repository
        .node(find(&repository, "::com::acme::Account"))
        .unwrap()
        .describe_interface()
        .unwrap();

    assert_eq!(full.attributes.len(), 1);
    assert_eq!(full.attributes[0].name, "balance");
    assert_eq!(full.attributes[0].mode, AttributeMode::ReadOnly);
    assert_eq!(full.attributes[0].type_code, TypeCode::Basic(TcKind::Double));

    let deposit = &full.operations[0];
    assert_eq!(deposit.id, "IDL:com/acme/Account/deposit:1.0");
    assert_eq!(deposit.result, TypeCode::VOID);
    assert_eq!(deposit.parameters.len(), 1);
    assert_eq!(deposit.parameters[0].name, "amount");
    assert_eq!(deposit.parameters[0].type_code.id(), Some(MONEY_ID));
    assert!(deposit.parameters[0].type_def.is_some());
    assert_eq!(deposit.exceptions.len(), 1);
    assert_eq!(deposit.exceptions[0].name, "OverdraftEx");
    assert_eq!(deposit.exceptions[0].id, "IDL:com/acme/OverdraftEx:1.0");

    let owner = &full.operations[1];
    assert_eq!(owner.result.id(), Some(WSTRING_VALUE_ID));
}

#[test]
fn exceptions_wrap_their_value() {
    let (repository, _) = banking();
    let exception = find(&repository, "::com::acme::OverdraftEx");
    let view = repository.node(exception).unwrap();
    assert_eq!(view.kind(), DefinitionKind::Exception);

    let value = view.exception_value().unwrap();
    assert_eq!(scoped_name(&repository, value), "::com::acme::OverdraftException");

    // The value chain follows the Java superclass chain.
    let base = repository.node(value).unwrap().base_value().unwrap();
    assert_eq!(scoped_name(&repository, base), "::java::lang::Exception");
    let root = repository.node(base).unwrap().base_value().unwrap();
    assert_eq!(scoped_name(&repository, root), "::java::lang::Throwable");
    assert_eq!(repository.node(root).unwrap().base_value(), None);

    let Some(DescriptionValue::Exception(description)) =
        repository.describe(exception).map(|d| d.value)
    else {
        panic!("expected an exception description");
    };
    assert_eq!(description.type_code.kind(), TcKind::Except);
}

#[test]
fn values_and_abstract_values() {
    let (repository, _) = banking();
    let money = find(&repository, "::com::acme::Money");
    let named = find(&repository, "::com::acme::Named");

    let view = repository.node(money).unwrap();
    assert_eq!(view.kind(), DefinitionKind::Value);
    assert!(!view.is_abstract());
    assert_eq!(view.abstract_base_values(), vec![named]);
    assert!(repository.node(named).unwrap().is_abstract());

    let full = view.describe_value().unwrap();
    let members: Vec<(&str, Visibility)> = full
        .members
        .iter()
        .map(|m| (m.name.as_str(), m.access))
        .collect();
    assert_eq!(
        members,
        vec![("amount", Visibility::Private), ("currency", Visibility::Private)]
    );
    assert_eq!(full.members[0].type_code, TypeCode::Basic(TcKind::LongLong));

    let amount = find(&repository, "::com::acme::Money::amount");
    assert_eq!(
        repository.node(amount).unwrap().type_def(),
        repository.get_primitive(PrimitiveKind::LongLong)
    );
    let scale = find(&repository, "::com::acme::Money::SCALE");
    assert_eq!(repository.node(scale).unwrap().kind(), DefinitionKind::Constant);
}

#[test]
fn special_classes_map_once() {
    let (repository, _) = banking();
    let wstring = find(&repository, "::org::omg::CORBA::WStringValue");
    let currency = find(&repository, "::com::acme::Money::currency");
    let memo = find(&repository, "::com::acme::Ledger::memo");

    assert_eq!(repository.node(currency).unwrap().type_def(), Some(wstring));
    assert_eq!(repository.node(memo).unwrap().type_def(), Some(wstring));
    let boxes = repository
        .nodes()
        .filter(|node| node.name() == Some("WStringValue"))
        .count();
    assert_eq!(boxes, 1);

    let kind = find(&repository, "::com::acme::Ledger::kind");
    let class_desc = find(&repository, "::javax::rmi::CORBA::ClassDesc");
    assert_eq!(repository.node(kind).unwrap().type_def(), Some(class_desc));

    let payload = find(&repository, "::com::acme::Ledger::payload");
    let object = find(&repository, "::java::lang::_Object");
    assert_eq!(repository.node(payload).unwrap().type_def(), Some(object));
    assert_eq!(repository.node(object).unwrap().kind(), DefinitionKind::Alias);
    assert_eq!(
        repository.node(object).unwrap().type_def(),
        repository.get_primitive(PrimitiveKind::Any)
    );

    // Serializable is only an abstract base of Money, and is skipped there.
    assert_eq!(repository.lookup("::java::io::Serializable"), None);
}

#[test]
fn values_list_supported_interfaces() {
    let (repository, _) = banking();
    let ledger = repository
        .node(find(&repository, "::com::acme::Ledger"))
        .unwrap();
    assert_eq!(
        ledger.supported_interfaces(),
        vec![find(&repository, "::com::acme::Account")]
    );
    assert!(ledger.is_a(ACCOUNT_ID));
}

#[test]
fn mapping_is_idempotent() {
    let catalog = catalog();
    let (mut builder, _) = builder(&catalog);

    let first: Vec<_> = CLASSES
        .iter()
        .map(|class| builder.map_class(class).unwrap())
        .collect();
    let count = builder.node_count();
    let second: Vec<_> = CLASSES
        .iter()
        .map(|class| builder.map_class(class).unwrap())
        .collect();

    assert_eq!(first, second);
    assert_eq!(builder.node_count(), count);
}

#[test]
fn unknown_classes_are_violations() {
    let catalog = catalog();
    let (mut builder, _) = builder(&catalog);

    assert_eq!(
        builder.map_class("com.acme.Missing"),
        Err(IrError::Violation(AnalysisError::UnknownClass(
            "com.acme.Missing".to_owned()
        )))
    );
    assert!(matches!(
        builder.map_class("com.acme."),
        Err(IrError::Violation(AnalysisError::MalformedTypeName(_)))
    ));
}

const BASE_ID: &str = "RMI:com.acme.graph.Base:0000000000000000";
const NODE_ID: &str = "RMI:com.acme.graph.Node:0000000000000000";
const HOLDER_ID: &str = "RMI:com.acme.graph.Holder:5555555555555555:6666666666666666";

/// Types that reach themselves again while being mapped:
///
/// - `Node` extends `Base`, and `Base.accept` takes a `Node`
/// - `Holder` supports `Node`, and `Node.next` takes a `Holder`
fn cyclic_catalog() -> ClassCatalog {
    let mut catalog = ClassCatalog::with_jdk_classes();

    let mut base = class("com.acme.graph.Base", ClassFlavor::RemoteInterface, BASE_ID);
    base.operations = vec![OperationAnalysis::new(
        "accept",
        "void",
        &[("node", "com.acme.graph.Node")],
        &[],
    )];

    let mut node = class("com.acme.graph.Node", ClassFlavor::RemoteInterface, NODE_ID);
    node.base_interfaces = vec!["com.acme.graph.Base".to_owned()];
    node.operations = vec![OperationAnalysis::new(
        "next",
        "com.acme.graph.Node",
        &[("holder", "com.acme.graph.Holder")],
        &[],
    )];

    let mut holder = class("com.acme.graph.Holder", ClassFlavor::Class, HOLDER_ID);
    holder.supported_interfaces = vec!["com.acme.graph.Node".to_owned()];

    catalog.extend([base, node, holder]);
    catalog
}

#[test]
fn cyclic_references_map_each_class_once() {
    let catalog = cyclic_catalog();
    let orders = [
        ["com.acme.graph.Holder", "com.acme.graph.Node", "com.acme.graph.Base"],
        ["com.acme.graph.Node", "com.acme.graph.Holder", "com.acme.graph.Base"],
        ["com.acme.graph.Base", "com.acme.graph.Holder", "com.acme.graph.Node"],
    ];

    let mut sizes = Vec::new();
    for order in orders {
        let (repository, _) = build(&catalog, &order);
        assert!(repository.is_resolved(), "{order:?}");

        for name in ["Base", "Node", "Holder"] {
            let count = repository
                .nodes()
                .filter(|node| node.name() == Some(name))
                .count();
            assert_eq!(count, 1, "{name} in {order:?}");
        }

        let node = repository.node(find(&repository, "::com::acme::graph::Node")).unwrap();
        assert_eq!(
            node.base_interfaces(),
            vec![find(&repository, "::com::acme::graph::Base")]
        );
        let holder = repository.node(find(&repository, "::com::acme::graph::Holder")).unwrap();
        assert!(holder.is_a(NODE_ID));
        assert!(holder.is_a(BASE_ID));
        assert_eq!(
            repository.node(find(&repository, "::com::acme::graph::Node::next")).unwrap().type_def(),
            Some(node.id())
        );
        sizes.push(repository.len());
    }
    assert!(sizes.windows(2).all(|pair| pair[0] == pair[1]), "{sizes:?}");
}

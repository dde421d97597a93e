//! Finishing, export, read-only rejection and shutdown.

use std::sync::Arc;

use ifr_core::{ConstantValue, DefinitionKind};
use ifr_repository::{
    ExportError, IrError, LocalAdapter, ObjectAdapter, ObjectId, ObjectRef, RepositoryBuilder,
    RepositoryConfig,
};
use pretty_assertions::assert_eq;

use crate::common::{banking, builder, catalog, find, CLASSES, MONEY_ID};

/// Refuses to activate one key; delegates everything else.
struct Refusing {
    inner: LocalAdapter,
    refused: ObjectId,
}

impl ObjectAdapter for Refusing {
    fn activate(&self, key: &ObjectId, type_id: &str) -> Result<ObjectRef, ExportError> {
        if *key == self.refused {
            return Err(ExportError::Refused {
                key: key.clone(),
                reason: "test adapter".to_owned(),
            });
        }
        self.inner.activate(key, type_id)
    }

    fn deactivate(&self, key: &ObjectId) -> Result<(), ExportError> {
        self.inner.deactivate(key)
    }

    fn is_active(&self, key: &ObjectId) -> bool {
        self.inner.is_active(key)
    }
}

#[test]
fn finished_repository_is_resolved_and_exported() {
    let (repository, adapter) = banking();

    assert!(repository.is_resolved());
    assert!(repository.nodes().all(|node| node.is_exported()));
    assert_eq!(adapter.active_count(), repository.len());

    let root = repository.reference().unwrap();
    assert_eq!(root.type_id, "IDL:omg.org/CORBA/Repository:1.0");
    assert_eq!(root.url, "corbaloc:iiop:127.0.0.1:3528/IR/IR:Repository");

    let money = repository.node(find(&repository, "::com::acme::Money")).unwrap();
    assert_eq!(
        money.object_id(),
        &ObjectId::contained("IR:", MONEY_ID)
    );
    assert_eq!(
        money.reference().map(|r| r.type_id.as_str()),
        Some("IDL:omg.org/CORBA/ValueDef:1.0")
    );
}

#[test]
fn object_keys_use_the_configured_prefix() {
    let catalog = catalog();
    let config = RepositoryConfig::default()
        .with_prefix("Bank/")
        .with_endpoint("bank.example", 9000)
        .with_poa_name("Bank");
    let adapter = Arc::new(LocalAdapter::new(&config));
    let mut builder = RepositoryBuilder::new(config, &catalog, adapter.clone());
    builder.map_class("com.acme.Money").unwrap();
    let repository = builder.finish_build().unwrap();

    let money = repository.node(find(&repository, "::com::acme::Money")).unwrap();
    assert_eq!(
        money.reference().map(|r| r.url.as_str()),
        Some(format!("corbaloc:iiop:bank.example:9000/Bank/Bank/{MONEY_ID}").as_str())
    );
    assert_eq!(
        adapter.reference(&ObjectId::root("Bank/")).map(|r| r.type_id),
        Some("IDL:omg.org/CORBA/Repository:1.0".to_owned())
    );
}

#[test]
fn export_failures_leave_the_node_unexported() {
    let catalog = catalog();
    let config = RepositoryConfig::default();
    let adapter = Arc::new(Refusing {
        inner: LocalAdapter::new(&config),
        refused: ObjectId::contained(&config.object_id_prefix, MONEY_ID),
    });
    let mut builder = RepositoryBuilder::new(config, &catalog, adapter);
    for class in CLASSES {
        builder.map_class(class).unwrap();
    }
    let repository = builder.finish_build().unwrap();

    let money = repository.node(find(&repository, "::com::acme::Money")).unwrap();
    assert!(!money.is_exported());
    assert_eq!(money.reference(), None);

    // Neighbours and children still export.
    let amount = repository
        .node(find(&repository, "::com::acme::Money::amount"))
        .unwrap();
    assert!(amount.is_exported());
    assert!(repository.is_resolved());
    assert_eq!(repository.nodes().filter(|node| !node.is_exported()).count(), 1);
}

#[test]
fn shutdown_unexports_everything() {
    let (mut repository, adapter) = banking();
    assert!(adapter.active_count() > 0);

    repository.shutdown();
    assert!(repository.is_shut_down());
    assert_eq!(adapter.active_count(), 0);
    assert!(repository.nodes().all(|node| !node.is_exported()));
    assert_eq!(repository.reference(), None);

    // Queries keep working on a shut-down repository.
    assert!(repository.lookup("::com::acme::Money").is_some());

    repository.shutdown();
    assert_eq!(adapter.active_count(), 0);
}

#[test]
fn live_mutators_are_rejected() {
    let (repository, _) = banking();
    let before = repository.len();
    let account = find(&repository, "::com::acme::Account");
    let node = repository.node(account).unwrap();
    let contained = node.as_contained().unwrap();
    let container = node.as_container().unwrap();

    assert_eq!(contained.set_name("Vault"), Err(IrError::ReadOnly("rename a definition")));
    assert!(contained.set_id("IDL:x:1.0").unwrap_err().is_read_only());
    assert!(node.destroy().unwrap_err().is_read_only());
    assert!(node.set_base_interfaces(&[]).unwrap_err().is_read_only());
    assert!(container
        .create_constant("IDL:x:1.0", "x", "1.0", ConstantValue::Int(1))
        .unwrap_err()
        .is_read_only());
    assert!(repository
        .as_container()
        .create_module("IDL:x:1.0", "x", "1.0")
        .unwrap_err()
        .is_read_only());
    let long = repository.get_primitive(ifr_core::PrimitiveKind::Long).unwrap();
    assert!(repository.create_sequence(0, long).unwrap_err().is_read_only());
    assert!(repository.create_string(10).unwrap_err().is_read_only());
    assert!(repository.create_wstring(10).unwrap_err().is_read_only());
    assert!(repository.create_array(4, long).unwrap_err().is_read_only());
    assert!(repository.create_fixed(10, 2).unwrap_err().is_read_only());

    assert_eq!(repository.len(), before);
    assert_eq!(contained.name(), "Account");
    assert_eq!(repository.lookup("::com::acme::Account"), Some(account));
}

#[test]
fn add_checks_ownership_and_placement() {
    let catalog = catalog();
    let (mut first, _) = builder(&catalog);
    let (mut second, _) = builder(&catalog);
    let account = first.map_class("com.acme.Account").unwrap().unwrap();
    let foreign = second.map_class("com.acme.Account").unwrap().unwrap();
    let module = first
        .node(account)
        .and_then(|node| node.as_contained())
        .map(|contained| contained.defined_in())
        .unwrap();
    let root = first.root();

    assert_eq!(first.add(root, "Stray", foreign), Err(IrError::ForeignRepository));
    assert!(matches!(
        first.add(module, "Account", account),
        Err(IrError::DuplicateName { .. })
    ));
    assert!(matches!(
        first.add(root, "Account", account),
        Err(IrError::NotDefinedIn { .. })
    ));
    assert_eq!(
        first
            .node(root)
            .and_then(|node| node.as_container())
            .map(|container| container.contents(DefinitionKind::Interface, false)),
        Some(Vec::new())
    );
}

//! Fixture catalog and build helpers.

use std::sync::Arc;

use ifr_core::{
    AttributeAnalysis, ClassAnalysis, ClassCatalog, ClassFlavor, ConstantAnalysis, ConstantValue,
    OperationAnalysis, ValueMemberAnalysis,
};
use ifr_repository::{
    LocalAdapter, NodeId, ObjectAdapter, Repository, RepositoryBuilder, RepositoryConfig,
};

pub const ACCOUNT_ID: &str = "RMI:com.acme.Account:0000000000000000";
pub const TELLER_ID: &str = "RMI:com.acme.Teller:0000000000000000";
pub const MONEY_ID: &str = "RMI:com.acme.Money:1111111111111111:2222222222222222";

/// Every application class of the fixture.
pub const CLASSES: [&str; 6] = [
    "com.acme.Account",
    "com.acme.Teller",
    "com.acme.OverdraftException",
    "com.acme.Named",
    "com.acme.Money",
    "com.acme.Ledger",
];

pub fn class(java_name: &str, flavor: ClassFlavor, id: &str) -> ClassAnalysis {
    let idl_name = java_name.rsplit('.').next().unwrap_or(java_name);
    let mut analysis = ClassAnalysis::new(java_name, flavor, idl_name, id);
    if flavor == ClassFlavor::Class {
        analysis.superclass = Some("java.lang.Object".to_owned());
    }
    analysis
}

/// The JDK classes plus a small banking model:
///
/// - `Account`, a remote interface with an attribute and two operations
/// - `Teller`, a remote interface extending `Account`
/// - `OverdraftException`, raised by `Account.deposit`
/// - `Named`, an abstract value, and `Money`, a value implementing it
/// - `Ledger`, a value with array and string members
pub fn catalog() -> ClassCatalog {
    let mut catalog = ClassCatalog::with_jdk_classes();

    let mut account = class("com.acme.Account", ClassFlavor::RemoteInterface, ACCOUNT_ID);
    account.attributes = vec![AttributeAnalysis {
        idl_name: "balance".to_owned(),
        java_type: "double".to_owned(),
        read_only: true,
    }];
    account.operations = vec![
        OperationAnalysis::new(
            "deposit",
            "void",
            &[("amount", "com.acme.Money")],
            &["com.acme.OverdraftException"],
        ),
        OperationAnalysis::new("owner", "java.lang.String", &[], &[]),
    ];

    let mut teller = class("com.acme.Teller", ClassFlavor::RemoteInterface, TELLER_ID);
    teller.base_interfaces = vec!["com.acme.Account".to_owned()];
    teller.operations = vec![OperationAnalysis::new(
        "transfer",
        "void",
        &[("to", "com.acme.Account"), ("amount", "com.acme.Money")],
        &["com.acme.OverdraftException"],
    )];

    let mut overdraft = class(
        "com.acme.OverdraftException",
        ClassFlavor::Class,
        "RMI:com.acme.OverdraftException:1234567890ABCDEF:0000000000000001",
    );
    overdraft.superclass = Some("java.lang.Exception".to_owned());
    overdraft.members = vec![ValueMemberAnalysis::new(
        "shortfall",
        "com.acme.Money",
        false,
    )];

    let mut named = class(
        "com.acme.Named",
        ClassFlavor::AbstractInterface,
        "RMI:com.acme.Named:0000000000000000",
    );
    named.operations = vec![OperationAnalysis::new("name", "java.lang.String", &[], &[])];

    let mut money = class("com.acme.Money", ClassFlavor::Class, MONEY_ID);
    money.abstract_base_values = vec![
        "com.acme.Named".to_owned(),
        "java.io.Serializable".to_owned(),
    ];
    money.constants = vec![ConstantAnalysis {
        idl_name: "SCALE".to_owned(),
        value: ConstantValue::Int(2),
    }];
    money.members = vec![
        ValueMemberAnalysis::new("amount", "long", false),
        ValueMemberAnalysis::new("currency", "java.lang.String", false),
    ];

    let mut ledger = class(
        "com.acme.Ledger",
        ClassFlavor::Class,
        "RMI:com.acme.Ledger:3333333333333333:4444444444444444",
    );
    ledger.supported_interfaces = vec!["com.acme.Account".to_owned()];
    ledger.members = vec![
        ValueMemberAnalysis::new("entries", "[Lcom.acme.Money;", false),
        ValueMemberAnalysis::new("totals", "[[I", false),
        ValueMemberAnalysis::new("memo", "java.lang.String", false),
        ValueMemberAnalysis::new("tags", "[Ljava.lang.String;", false),
        ValueMemberAnalysis::new("kind", "java.lang.Class", false),
        ValueMemberAnalysis::new("payload", "java.lang.Object", false),
    ];

    catalog.extend([account, teller, overdraft, named, money, ledger]);
    catalog
}

/// A builder over `catalog` exporting through a fresh local adapter.
pub fn builder(catalog: &ClassCatalog) -> (RepositoryBuilder<&ClassCatalog>, Arc<LocalAdapter>) {
    let config = RepositoryConfig::default();
    let adapter = Arc::new(LocalAdapter::new(&config));
    let builder = RepositoryBuilder::new(config, catalog, adapter.clone() as Arc<dyn ObjectAdapter>);
    (builder, adapter)
}

/// Map `classes` and finish.
pub fn build(catalog: &ClassCatalog, classes: &[&str]) -> (Repository, Arc<LocalAdapter>) {
    let (mut builder, adapter) = builder(catalog);
    for class in classes {
        builder.map_class(class).unwrap();
    }
    (builder.finish_build().unwrap(), adapter)
}

/// The finished fixture with every application class mapped.
pub fn banking() -> (Repository, Arc<LocalAdapter>) {
    build(&catalog(), &CLASSES)
}

/// Absolute scoped name of a contained node.
pub fn scoped_name(repository: &Repository, id: NodeId) -> String {
    repository
        .node(id)
        .and_then(|node| node.as_contained())
        .map(|contained| contained.absolute_name().to_string())
        .unwrap()
}

/// The node at `name`, which must exist.
pub fn find(repository: &Repository, name: &str) -> NodeId {
    repository
        .lookup(name)
        .unwrap_or_else(|| panic!("`{name}` is not in the repository"))
}

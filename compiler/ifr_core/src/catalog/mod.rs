//! In-memory class analyzer.
//!
//! A `ClassCatalog` holds pre-computed analyses keyed by Java class name.
//! The command-line host fills one from JSON; tests build them by hand.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{
    AnalysisError, ClassAnalysis, ClassAnalyzer, ClassFlavor, ValueMemberAnalysis,
};

/// Repository ID the Java-to-IDL mapping documents for `javax.rmi.CORBA.ClassDesc`.
pub const CLASS_DESC_REPOSITORY_ID: &str =
    "RMI:javax.rmi.CORBA.ClassDesc:B7C4E3FC9EBDC311:CFBF02CF5294176B";

/// Class analyses keyed by fully qualified Java name.
#[derive(Clone, Debug, Default)]
pub struct ClassCatalog {
    classes: FxHashMap<String, Arc<ClassAnalysis>>,
}

impl ClassCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-seeded with the JDK classes the mapping relies on.
    pub fn with_jdk_classes() -> Self {
        let mut catalog = Self::new();
        for analysis in jdk_classes() {
            catalog.insert(analysis);
        }
        catalog
    }

    /// Add or replace an analysis. Returns the replaced one, if any.
    pub fn insert(&mut self, analysis: ClassAnalysis) -> Option<Arc<ClassAnalysis>> {
        self.classes
            .insert(analysis.java_name.clone(), Arc::new(analysis))
    }

    #[inline]
    pub fn get(&self, class: &str) -> Option<&ClassAnalysis> {
        self.classes.get(class).map(Arc::as_ref)
    }

    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class names in sorted order.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Extend<ClassAnalysis> for ClassCatalog {
    fn extend<I: IntoIterator<Item = ClassAnalysis>>(&mut self, iter: I) {
        for analysis in iter {
            self.insert(analysis);
        }
    }
}

impl ClassAnalyzer for ClassCatalog {
    fn analyze(&self, class: &str) -> Result<Arc<ClassAnalysis>, AnalysisError> {
        let analysis = self
            .classes
            .get(class)
            .ok_or_else(|| AnalysisError::UnknownClass(class.to_owned()))?;
        analysis.check()?;
        Ok(Arc::clone(analysis))
    }
}

fn private_member(idl_name: &str, java_type: &str) -> ValueMemberAnalysis {
    ValueMemberAnalysis::new(idl_name, java_type, false)
}

fn jdk_classes() -> Vec<ClassAnalysis> {
    let object = ClassAnalysis::new(
        "java.lang.Object",
        ClassFlavor::Class,
        "_Object",
        "RMI:java.lang.Object:0000000000000000",
    );

    let mut string = ClassAnalysis::new(
        "java.lang.String",
        ClassFlavor::Class,
        "String",
        "RMI:java.lang.String:071DA8BE7F971128:A0F0A4387A3BB342",
    );
    string.superclass = Some("java.lang.Object".to_owned());

    let mut class = ClassAnalysis::new(
        "java.lang.Class",
        ClassFlavor::Class,
        "Class",
        "RMI:java.lang.Class:0000000000000000:2C7E5503D9BF9553",
    );
    class.superclass = Some("java.lang.Object".to_owned());

    let serializable = ClassAnalysis::new(
        "java.io.Serializable",
        ClassFlavor::AbstractInterface,
        "Serializable",
        "RMI:java.io.Serializable:0000000000000000",
    );

    let externalizable = ClassAnalysis::new(
        "java.io.Externalizable",
        ClassFlavor::AbstractInterface,
        "Externalizable",
        "RMI:java.io.Externalizable:0000000000000000",
    );

    let remote = ClassAnalysis::new(
        "java.rmi.Remote",
        ClassFlavor::RemoteInterface,
        "Remote",
        "RMI:java.rmi.Remote:0000000000000000",
    );

    let mut throwable = ClassAnalysis::new(
        "java.lang.Throwable",
        ClassFlavor::Class,
        "Throwable",
        "RMI:java.lang.Throwable:7C2B1A8A8E4AB7D5:D5C6353927776AB8",
    );
    throwable.superclass = Some("java.lang.Object".to_owned());
    throwable.is_custom = true;
    throwable.members = vec![
        private_member("detailMessage", "java.lang.String"),
        private_member("cause", "java.lang.Throwable"),
    ];

    let mut exception = ClassAnalysis::new(
        "java.lang.Exception",
        ClassFlavor::Class,
        "Exception",
        "RMI:java.lang.Exception:BF3BA7D1A9D1B17B:D0FD1F3E1A3B1CC4",
    );
    exception.superclass = Some("java.lang.Throwable".to_owned());

    let mut class_desc = ClassAnalysis::new(
        "javax.rmi.CORBA.ClassDesc",
        ClassFlavor::Class,
        "ClassDesc",
        CLASS_DESC_REPOSITORY_ID,
    );
    class_desc.superclass = Some("java.lang.Object".to_owned());
    class_desc.members = vec![
        private_member("repid", "java.lang.String"),
        private_member("codebase", "java.lang.String"),
    ];

    vec![
        object,
        string,
        class,
        serializable,
        externalizable,
        remote,
        throwable,
        exception,
        class_desc,
    ]
}

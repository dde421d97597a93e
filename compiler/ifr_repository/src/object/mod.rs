//! The export seam between repository nodes and the ORB.
//!
//! Every node is activated under a stable [`ObjectId`] and receives an
//! [`ObjectRef`] that remote clients use to reach it. Activation goes
//! through the [`ObjectAdapter`] trait; [`LocalAdapter`] is an in-process
//! adapter that renders `corbaloc:` URLs.
//!
//! # Design
//!
//! - Keys are opaque bytes built from the configured prefix
//! - The adapter owns its own locking, so export only needs `&self`
//! - Export failures are reported to the caller, never panicked on

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::RepositoryConfig;

/// The key a node is activated under.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(Vec<u8>);

impl ObjectId {
    /// Key of a contained node: prefix followed by its repository ID.
    pub fn contained(prefix: &str, repository_id: &str) -> Self {
        ObjectId(format!("{prefix}{repository_id}").into_bytes())
    }

    /// Key of an anonymous node: prefix, `#` and its sequence number.
    pub fn anonymous(prefix: &str, number: u32) -> Self {
        ObjectId(format!("{prefix}#{number}").into_bytes())
    }

    /// Key of the repository root.
    pub fn root(prefix: &str) -> Self {
        ObjectId(format!("{prefix}Repository").into_bytes())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(key: &str) -> Self {
        ObjectId(key.as_bytes().to_vec())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// A remote reference to an exported node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Repository ID of the IR interface the object implements.
    pub type_id: String,
    pub key: ObjectId,
    /// Stringified form handed to clients.
    pub url: String,
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Failure to activate or deactivate an object.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("object `{0}` is already active")]
    AlreadyActive(ObjectId),
    #[error("object `{0}` is not active")]
    NotActive(ObjectId),
    #[error("adapter `{0}` has been destroyed")]
    Destroyed(String),
    #[error("adapter refused `{key}`: {reason}")]
    Refused { key: ObjectId, reason: String },
}

/// Activates repository nodes as remote objects.
pub trait ObjectAdapter: Send + Sync {
    /// Activate `key`, implementing the IR interface `type_id`.
    fn activate(&self, key: &ObjectId, type_id: &str) -> Result<ObjectRef, ExportError>;

    fn deactivate(&self, key: &ObjectId) -> Result<(), ExportError>;

    fn is_active(&self, key: &ObjectId) -> bool;
}

/// An in-process adapter.
///
/// Keeps the active object table in memory and hands out
/// `corbaloc:iiop:<host>:<port>/<poa>/<key>` references.
#[derive(Debug)]
pub struct LocalAdapter {
    orb_name: String,
    endpoint: String,
    poa_name: String,
    active: Mutex<FxHashMap<ObjectId, ObjectRef>>,
    destroyed: AtomicBool,
}

impl LocalAdapter {
    pub fn new(config: &RepositoryConfig) -> Self {
        LocalAdapter {
            orb_name: config.orb_name.clone(),
            endpoint: format!("{}:{}", config.host, config.port),
            poa_name: config.poa_name.clone(),
            active: Mutex::new(FxHashMap::default()),
            destroyed: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn orb_name(&self) -> &str {
        &self.orb_name
    }

    /// Number of currently active objects.
    pub fn active_count(&self) -> usize {
        self.active.lock().len()
    }

    /// The reference `key` is active under, if any.
    pub fn reference(&self, key: &ObjectId) -> Option<ObjectRef> {
        self.active.lock().get(key).cloned()
    }

    /// Drop every active object and refuse further activations.
    pub fn destroy(&self) {
        self.destroyed.store(true, Ordering::Release);
        let dropped = {
            let mut active = self.active.lock();
            let n = active.len();
            active.clear();
            n
        };
        tracing::debug!(poa = %self.poa_name, dropped, "object adapter destroyed");
    }

    fn url(&self, key: &ObjectId) -> String {
        format!("corbaloc:iiop:{}/{}/{key}", self.endpoint, self.poa_name)
    }
}

impl ObjectAdapter for LocalAdapter {
    fn activate(&self, key: &ObjectId, type_id: &str) -> Result<ObjectRef, ExportError> {
        if self.destroyed.load(Ordering::Acquire) {
            return Err(ExportError::Destroyed(self.poa_name.clone()));
        }
        let mut active = self.active.lock();
        if active.contains_key(key) {
            return Err(ExportError::AlreadyActive(key.clone()));
        }
        let reference = ObjectRef {
            type_id: type_id.to_owned(),
            key: key.clone(),
            url: self.url(key),
        };
        active.insert(key.clone(), reference.clone());
        Ok(reference)
    }

    fn deactivate(&self, key: &ObjectId) -> Result<(), ExportError> {
        if self.destroyed.load(Ordering::Acquire) {
            return Err(ExportError::Destroyed(self.poa_name.clone()));
        }
        match self.active.lock().remove(key) {
            Some(_) => Ok(()),
            None => Err(ExportError::NotActive(key.clone())),
        }
    }

    fn is_active(&self, key: &ObjectId) -> bool {
        self.active.lock().contains_key(key)
    }
}

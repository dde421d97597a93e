//! Repository configuration.

/// Settings shared by a repository and the adapter its nodes are exported
/// through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Prepended to every object key, so that several repositories can share
    /// one adapter.
    pub object_id_prefix: String,
    pub orb_name: String,
    pub host: String,
    pub port: u16,
    /// Name of the object adapter nodes are activated in.
    pub poa_name: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            object_id_prefix: "IR:".to_owned(),
            orb_name: "ifr".to_owned(),
            host: "127.0.0.1".to_owned(),
            port: 3528,
            poa_name: "IR".to_owned(),
        }
    }
}

impl RepositoryConfig {
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.object_id_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_poa_name(mut self, poa_name: impl Into<String>) -> Self {
        self.poa_name = poa_name.into();
        self
    }

    #[must_use]
    pub fn with_orb_name(mut self, orb_name: impl Into<String>) -> Self {
        self.orb_name = orb_name.into();
        self
    }
}

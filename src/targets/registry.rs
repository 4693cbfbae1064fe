use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::builtin::BuiltinTarget;
use super::traits::ClientGenerator;
use super::types::{ClientInfo, TargetInfo, TargetSummary};

/// Client keys that would collide with target metadata in listings.
pub const RESERVED_CLIENT_KEYS: &[&str] = &["info", "index"];

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("target info is missing required field '{0}'")]
    MissingTargetInfo(&'static str),
    #[error("client info is missing required field '{0}'")]
    MissingClientInfo(&'static str),
    #[error("target '{0}' already exists")]
    DuplicateTarget(String),
    #[error("client '{client}' already exists on target '{target}'")]
    DuplicateClient { target: String, client: String },
    #[error("target '{0}' must define at least one client")]
    NoClients(String),
    #[error("default client '{client}' is not defined on target '{target}'")]
    MissingDefaultClient { target: String, client: String },
    #[error("no '{0}' target exists to add clients to")]
    TargetNotFound(String),
    #[error("client key '{0}' is reserved")]
    ReservedClientKey(String),
}

/// A target and its clients, keyed by client key.
#[derive(Clone)]
pub struct Target {
    pub info: TargetInfo,
    clients: IndexMap<String, Arc<dyn ClientGenerator>>,
}

impl Target {
    pub fn new(info: TargetInfo) -> Self {
        Self {
            info,
            clients: IndexMap::new(),
        }
    }

    /// Attach a client. A second client with the same key replaces the first;
    /// use [`TargetRegistry::add_target_client`] for checked insertion.
    pub fn with_client(mut self, client: impl ClientGenerator + 'static) -> Self {
        let client: Arc<dyn ClientGenerator> = Arc::new(client);
        self.clients.insert(client.info().key.clone(), client);
        self
    }

    pub fn client(&self, key: &str) -> Option<Arc<dyn ClientGenerator>> {
        self.clients.get(key).cloned()
    }

    pub fn default_client(&self) -> Option<Arc<dyn ClientGenerator>> {
        self.client(&self.info.default)
    }

    pub fn clients(&self) -> impl Iterator<Item = &ClientInfo> {
        self.clients.values().map(|client| client.info())
    }

    pub fn has_client(&self, key: &str) -> bool {
        self.clients.contains_key(key)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("info", &self.info)
            .field("clients", &self.clients.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Registry mapping target keys to their clients
#[derive(Clone, Debug)]
pub struct TargetRegistry {
    targets: IndexMap<String, Target>,
}

impl TargetRegistry {
    /// Empty registry without the built-in targets.
    pub fn new() -> Self {
        Self {
            targets: IndexMap::new(),
        }
    }

    /// Registry seeded with every [`BuiltinTarget`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for builtin in BuiltinTarget::ALL {
            let target = builtin.target();
            registry.targets.insert(target.info.key.clone(), target);
        }
        registry
    }

    pub fn add_target(&mut self, target: Target) -> Result<(), RegistrationError> {
        check_target_info(&target.info)?;

        if self.targets.contains_key(&target.info.key) {
            return Err(RegistrationError::DuplicateTarget(target.info.key.clone()));
        }

        if target.clients.is_empty() {
            return Err(RegistrationError::NoClients(target.info.key.clone()));
        }

        for client in target.clients() {
            check_client_info(client)?;
        }

        if !target.has_client(&target.info.default) {
            return Err(RegistrationError::MissingDefaultClient {
                target: target.info.key.clone(),
                client: target.info.default.clone(),
            });
        }

        info!(target_key = %target.info.key, "registered target");
        self.targets.insert(target.info.key.clone(), target);
        Ok(())
    }

    pub fn add_target_client(
        &mut self,
        target_key: &str,
        client: impl ClientGenerator + 'static,
    ) -> Result<(), RegistrationError> {
        let target = self
            .targets
            .get_mut(target_key)
            .ok_or_else(|| RegistrationError::TargetNotFound(target_key.to_string()))?;

        check_client_info(client.info())?;

        let key = client.info().key.clone();
        if target.clients.contains_key(&key) {
            return Err(RegistrationError::DuplicateClient {
                target: target_key.to_string(),
                client: key,
            });
        }

        info!(target_key = %target_key, client = %key, "registered client");
        target.clients.insert(key, Arc::new(client));
        Ok(())
    }

    pub fn available_targets(&self) -> Vec<TargetSummary> {
        self.targets
            .values()
            .map(|target| {
                let clients: Vec<ClientInfo> = target
                    .clients()
                    .filter(|client| !RESERVED_CLIENT_KEYS.contains(&client.key.as_str()))
                    .cloned()
                    .collect();

                TargetSummary {
                    key: target.info.key.clone(),
                    title: target.info.title.clone(),
                    extname: target.info.extname.clone(),
                    default: target.info.default.clone(),
                    clients: (!clients.is_empty()).then_some(clients),
                }
            })
            .collect()
    }

    /// File extension for a target, empty when the target is unknown.
    pub fn extname(&self, target_key: &str) -> &str {
        self.targets
            .get(target_key)
            .map(|target| target.info.extname.as_str())
            .unwrap_or("")
    }

    pub fn get(&self, target_key: &str) -> Option<&Target> {
        self.targets.get(target_key)
    }

    pub fn has_target(&self, target_key: &str) -> bool {
        self.targets.contains_key(target_key)
    }

    /// Pick the generator for a target: the named client when it exists,
    /// otherwise the target's default client. `None` for an unknown target.
    pub fn resolve(
        &self,
        target_key: &str,
        client_key: Option<&str>,
    ) -> Option<Arc<dyn ClientGenerator>> {
        let Some(target) = self.targets.get(target_key) else {
            warn!(target_key = %target_key, "unknown target");
            return None;
        };

        if let Some(client) = client_key.and_then(|key| target.client(key)) {
            return Some(client);
        }

        if let Some(key) = client_key {
            debug!(target_key = %target_key, client = %key, "unknown client, using default");
        }

        target.default_client()
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn check_target_info(info: &TargetInfo) -> Result<(), RegistrationError> {
    if info.key.is_empty() {
        return Err(RegistrationError::MissingTargetInfo("key"));
    }
    if info.title.is_empty() {
        return Err(RegistrationError::MissingTargetInfo("title"));
    }
    // extname may legitimately be empty, as for raw HTTP
    if info.default.is_empty() {
        return Err(RegistrationError::MissingTargetInfo("default"));
    }
    Ok(())
}

fn check_client_info(info: &ClientInfo) -> Result<(), RegistrationError> {
    if info.key.is_empty() {
        return Err(RegistrationError::MissingClientInfo("key"));
    }
    if info.title.is_empty() {
        return Err(RegistrationError::MissingClientInfo("title"));
    }
    if RESERVED_CLIENT_KEYS.contains(&info.key.as_str()) {
        return Err(RegistrationError::ReservedClientKey(info.key.clone()));
    }
    Ok(())
}

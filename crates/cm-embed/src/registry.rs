//! Mode → builder registry.
//!
//! The registry is an ordinary value: hosts create one, keep it for the life of the process and
//! pass it to whatever needs a builder. Builders are created the first time a mode is requested
//! and reused afterwards.

use crate::builder::CmBuilder;
use crate::error::RegistryError;
use crate::feature::ModeProfile;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Settings shared by every builder a registry creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// URL that asset paths are resolved against.
    pub base_url: String,
    /// Render read-only documents.
    pub run_mode: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            base_url: ".".to_string(),
            run_mode: false,
        }
    }
}

/// Memoizing lookup from mode id to builder.
///
/// Not synchronized; wrap it in a [`SharedRegistry`] to share it between threads.
#[derive(Debug, Default)]
pub struct BuilderRegistry {
    config: BuilderConfig,
    profiles: HashMap<String, ModeProfile>,
    builders: HashMap<String, CmBuilder>,
}

/// A registry shared between threads.
pub type SharedRegistry = Arc<Mutex<BuilderRegistry>>;

impl BuilderRegistry {
    /// Create an empty registry.
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            profiles: HashMap::new(),
            builders: HashMap::new(),
        }
    }

    /// Settings used for new builders.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Register the profile used to build the mode's builder.
    ///
    /// Only affects builders created afterwards. Returns the replaced profile.
    pub fn register_profile(&mut self, profile: ModeProfile) -> Option<ModeProfile> {
        let id = profile.mode().id().to_string();
        self.profiles.insert(id, profile)
    }

    /// Registered profile for a mode id.
    pub fn profile(&self, mode_id: &str) -> Option<&ModeProfile> {
        self.profiles.get(mode_id)
    }

    /// Get the builder for `mode`, creating it on first use.
    ///
    /// A registered profile for the mode id is used when present; otherwise the builder has no
    /// extra features.
    pub fn get_builder(&mut self, mode: &Mode) -> &mut CmBuilder {
        let profiles = &self.profiles;
        let config = &self.config;
        self.builders
            .entry(mode.id().to_string())
            .or_insert_with(|| {
                log::debug!("creating builder for mode {}", mode.id());
                match profiles.get(mode.id()) {
                    Some(profile) => profile.build(&config.base_url, config.run_mode),
                    None => ModeProfile::new(mode.clone()).build(&config.base_url, config.run_mode),
                }
            })
    }

    /// Get the builder for a mode id that has a registered profile, creating it on first use.
    pub fn get_builder_by_id(&mut self, mode_id: &str) -> Option<&mut CmBuilder> {
        let mode = match self.builders.get(mode_id) {
            Some(builder) => builder.mode().clone(),
            None => self.profiles.get(mode_id)?.mode().clone(),
        };
        Some(self.get_builder(&mode))
    }

    /// Builder for a mode id, if it was already created.
    pub fn get(&self, mode_id: &str) -> Option<&CmBuilder> {
        self.builders.get(mode_id)
    }

    /// Returns `true` if a builder exists for the mode id.
    pub fn contains(&self, mode_id: &str) -> bool {
        self.builders.contains_key(mode_id)
    }

    /// Number of builders created so far.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Returns `true` if no builder was created yet.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Wrap the registry for sharing between threads.
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(Mutex::new(self))
    }
}

/// Run `f` against the builder for `mode` inside a shared registry.
pub fn with_shared_builder<R>(
    registry: &SharedRegistry,
    mode: &Mode,
    f: impl FnOnce(&mut CmBuilder) -> R,
) -> Result<R, RegistryError> {
    let mut guard = registry.lock().map_err(|_| RegistryError::Poisoned)?;
    Ok(f(guard.get_builder(mode)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Feature;
    use std::thread;

    fn xml() -> Mode {
        Mode::new("xml", "application/xml")
    }

    #[test]
    fn test_builder_is_memoized() {
        let mut registry = BuilderRegistry::new(BuilderConfig::default());
        assert!(registry.is_empty());

        registry
            .get_builder(&xml())
            .set_command("save", "CMEclipse.save();");
        let builder = registry.get_builder(&xml());
        assert_eq!(builder.command("save"), Some("CMEclipse.save();"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_profile_is_used_for_new_builders() {
        let mut registry = BuilderRegistry::new(BuilderConfig {
            base_url: "http://host/app".to_string(),
            run_mode: true,
        });
        registry.register_profile(ModeProfile::new(xml()).with_feature(Feature::LineNumbers));

        let builder = registry.get_builder(&xml());
        assert_eq!(builder.base_url(), "http://host/app");
        assert!(builder.is_run_mode());
        assert_eq!(builder.options().gutters(), vec!["CodeMirror-linenumbers"]);
    }

    #[test]
    fn test_unknown_mode_gets_plain_builder() {
        let mut registry = BuilderRegistry::default();
        let mode = Mode::new("plain", "text/plain");
        let builder = registry.get_builder(&mode);
        assert!(builder.options().gutters().is_empty());
        assert!(registry.contains("plain"));
        assert!(registry.get_builder_by_id("nope").is_none());
    }

    #[test]
    fn test_get_builder_by_id() {
        let mut registry = BuilderRegistry::default();
        registry.register_profile(ModeProfile::new(xml()));
        assert!(!registry.contains("xml"));
        assert!(registry.get_builder_by_id("xml").is_some());
        assert!(registry.contains("xml"));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: BuilderConfig = serde_json::from_str(r#"{"run_mode":true}"#).unwrap();
        assert_eq!(config.base_url, ".");
        assert!(config.run_mode);
    }

    #[test]
    fn test_shared_registry_creates_once() {
        let shared = BuilderRegistry::default().into_shared();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    with_shared_builder(&shared, &xml(), |b| {
                        b.set_command(format!("cmd{i}"), "return true;");
                    })
                    .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let guard = shared.lock().unwrap();
        assert_eq!(guard.len(), 1);
        assert_eq!(guard.get("xml").unwrap().commands().count(), 4);
    }
}

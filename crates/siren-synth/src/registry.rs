//! Preset registry.
//!
//! An explicit, owned registry of named presets. There is deliberately no
//! process-global registry: construct one with [`PresetRegistry::with_builtins`]
//! at startup and pass it to whoever needs lookups. Tests get isolation by
//! constructing fresh instances.

use crate::error::{SirenError, SirenResult};
use crate::preset::{builtins, PresetSpec, SirenPreset};

/// Ordered collection of named siren presets.
///
/// Insertion order is preserved: built-ins first (in their canonical
/// order), then custom registrations. Re-registering an existing name
/// replaces the preset in place (last writer wins) without changing its
/// position.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    entries: Vec<(String, SirenPreset)>,
}

impl PresetRegistry {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in presets
    /// (`police`, `firefighter`, `samu`, `hi_lo`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for (name, preset) in builtins() {
            registry.insert(name, preset);
        }
        registry
    }

    /// Looks up a preset by name.
    ///
    /// # Errors
    /// Returns [`SirenError::UnknownPreset`] listing the registered names
    /// when no preset with `name` exists.
    pub fn get(&self, name: &str) -> SirenResult<&SirenPreset> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
            .ok_or_else(|| SirenError::UnknownPreset {
                name: name.to_string(),
                available: self
                    .entries
                    .iter()
                    .map(|(n, _)| n.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Validates raw preset fields and registers the result under `name`.
    ///
    /// # Errors
    /// Returns [`SirenError::Validation`] when the fields are missing or
    /// malformed; the registry is left unchanged in that case.
    pub fn register(&mut self, name: impl Into<String>, spec: &PresetSpec) -> SirenResult<()> {
        let name = name.into();
        let preset = spec.build(&name)?;
        self.insert(name, preset);
        Ok(())
    }

    /// Inserts an already-validated preset.
    pub fn insert(&mut self, name: impl Into<String>, preset: SirenPreset) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = preset,
            None => self.entries.push((name, preset)),
        }
    }

    /// Iterates `(name, description)` pairs in insertion order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(n, p)| (n.as_str(), p.description.as_str()))
    }

    /// Number of registered presets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no presets are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Custom preset file loading.
//!
//! A preset file is a JSON object mapping preset names to raw preset
//! fields, e.g.:
//!
//! ```json
//! {
//!     "harbor": {
//!         "freqs": [500, 600],
//!         "tone_duration": 0.5,
//!         "attack": 0.05,
//!         "decay": 0.05,
//!         "volume": 0.9,
//!         "max_db": 115,
//!         "description": "Harbor drill siren"
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use siren_synth::{PresetRegistry, PresetSpec};

/// Loads a JSON preset file and registers every entry.
///
/// Each entry is validated before registration; the first invalid entry
/// aborts the load with an error naming the preset and field.
///
/// # Returns
/// The number of presets registered
pub fn load_preset_file(path: &Path, registry: &mut PresetRegistry) -> Result<usize> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset file: {}", path.display()))?;

    let specs: BTreeMap<String, PresetSpec> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse preset file: {}", path.display()))?;

    let count = specs.len();
    for (name, spec) in &specs {
        registry
            .register(name.clone(), spec)
            .with_context(|| format!("Invalid preset '{name}' in {}", path.display()))?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_temp(
            r#"{
                "harbor": {
                    "freqs": [500, 600],
                    "tone_duration": 0.5,
                    "attack": 0.05,
                    "decay": 0.05,
                    "volume": 0.9,
                    "max_db": 115
                }
            }"#,
        );

        let mut registry = PresetRegistry::with_builtins();
        let count = load_preset_file(file.path(), &mut registry).unwrap();
        assert_eq!(count, 1);
        assert!(registry.get("harbor").is_ok());
    }

    #[test]
    fn test_invalid_entry_reports_name() {
        let file = write_temp(
            r#"{
                "broken": {
                    "freqs": [500],
                    "tone_duration": 0.5,
                    "attack": 0.05,
                    "decay": 0.05,
                    "volume": 0.9,
                    "max_db": 115
                }
            }"#,
        );

        let mut registry = PresetRegistry::with_builtins();
        let err = load_preset_file(file.path(), &mut registry).unwrap_err();
        assert!(format!("{err:#}").contains("broken"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let file = write_temp("not json");
        let mut registry = PresetRegistry::with_builtins();
        assert!(load_preset_file(file.path(), &mut registry).is_err());
    }
}

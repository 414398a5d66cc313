//! File-backed settings.

use super::Settings;
use crate::client::RouterError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A [`Settings`] source read from a JSON object on disk.
///
/// The file is read exactly once, at construction; lookups are served from
/// memory afterwards. Changing the file has no effect on an existing
/// instance.
#[derive(Debug, Clone)]
pub struct JsonFileSettings {
    entries: Map<String, Value>,
}

impl JsonFileSettings {
    /// Loads the settings object from `path`.
    ///
    /// Fails with [`RouterError::InvalidRouterConfig`] when the file cannot
    /// be read, is not valid JSON, or does not contain a JSON object at the
    /// top level.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RouterError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            RouterError::InvalidRouterConfig(format!(
                "could not read settings file '{}': {err}",
                path.display()
            ))
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|err| {
            RouterError::InvalidRouterConfig(format!(
                "settings file '{}' is not valid JSON: {err}",
                path.display()
            ))
        })?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(RouterError::InvalidRouterConfig(format!(
                "settings file '{}' must contain a JSON object at the top level",
                path.display()
            ))),
        }
    }
}

impl Settings for JsonFileSettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    struct TempFile(PathBuf);

    impl TempFile {
        fn with_content(name: &str, content: &str) -> Self {
            let path = env::temp_dir().join(format!("router-fetcher-{}-{name}", std::process::id()));
            let mut file = File::create(&path).unwrap();
            file.write_all(content.as_bytes()).unwrap();
            TempFile(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn serves_entries_from_a_json_object() {
        let file = TempFile::with_content(
            "valid.json",
            r#"{"routerConfig": {"endpoint": "http://router/api/endpoint"}}"#,
        );

        let settings = JsonFileSettings::load(&file.0).unwrap();

        let entry = settings.get("routerConfig").unwrap();
        assert_eq!(entry["endpoint"], "http://router/api/endpoint");
        assert_eq!(settings.get("somethingElse"), None);
    }

    #[test]
    fn rejects_a_missing_file() {
        let err = JsonFileSettings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, RouterError::InvalidRouterConfig(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        let file = TempFile::with_content("invalid.json", "not json at all");
        let err = JsonFileSettings::load(&file.0).unwrap_err();
        assert!(matches!(err, RouterError::InvalidRouterConfig(_)));
    }

    #[test]
    fn rejects_a_non_object_top_level() {
        let file = TempFile::with_content("array.json", "[1, 2, 3]");
        let err = JsonFileSettings::load(&file.0).unwrap_err();
        assert!(matches!(err, RouterError::InvalidRouterConfig(_)));
    }
}

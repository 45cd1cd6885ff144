//! Test fixture loader for regcost golden datasets, plus a deterministic
//! synthetic driver source for benches and property tests.

mod synthetic;

pub use synthetic::SyntheticDriverSource;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().join("golden").exists(), "golden directory not found");
    }

    #[test]
    fn all_golden_estimate_files_exist() {
        let files = [
            "golden/estimates/training_hr_default.json",
            "golden/estimates/mature_multi_jurisdiction.json",
            "golden/estimates/unknown_department.json",
            "golden/estimates/empty_drivers.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn all_golden_health_files_exist() {
        let files = [
            "golden/health/documented_example.json",
            "golden/health/sparse_customer.json",
            "golden/health/saturated_exposure.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn every_golden_file_parses_as_json() {
        let mut total = 0;
        for dir in ["golden/estimates", "golden/health"] {
            for file in list_fixtures(dir) {
                let content = std::fs::read_to_string(&file)
                    .unwrap_or_else(|e| panic!("Failed to read {}: {}", file.display(), e));
                let value: serde_json::Value = serde_json::from_str(&content)
                    .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e));
                assert!(
                    value.get("expected").is_some(),
                    "{} has no expected block",
                    file.display()
                );
                total += 1;
            }
        }
        assert_eq!(total, 7, "Expected 7 golden files, found {}", total);
    }

    #[test]
    fn list_fixtures_of_missing_dir_is_empty() {
        assert!(list_fixtures("golden/nope").is_empty());
    }
}

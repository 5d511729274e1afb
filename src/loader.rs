use std::path::PathBuf;

use tracing::debug;

use crate::record::PreviewRecord;

/// Slug-addressed store of preview records on disk, one `{slug}.json` per
/// prospect. Lookup is exact-match and case-sensitive.
#[derive(Clone, Debug)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load one record. Missing and malformed are indistinguishable to the
    /// caller: both are `None`, both end up as the not-found page.
    pub async fn load(&self, slug: &str) -> Option<PreviewRecord> {
        if !is_safe_slug(slug) {
            return None;
        }
        let path = self.data_dir.join(format!("{slug}.json"));
        let raw = tokio::fs::read_to_string(&path).await.ok()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(slug = %slug, ?err, "record failed to parse, treating as absent");
                None
            }
        }
    }
}

// Slugs never leave the data directory.
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.contains(['/', '\\'])
        && !slug.contains("..")
        && !slug.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        for (name, contents) in files {
            std::fs::write(dir.path().join(name), contents).expect("fixture");
        }
        let store = RecordStore::new(dir.path());
        (dir, store)
    }

    const VALID: &str = r#"{
        "slug": "smith-plumbing",
        "businessName": "Smith Plumbing",
        "tagline": "t",
        "description": "d",
        "category": "Plumbing",
        "location": "Austin, TX",
        "services": [],
        "stats": []
    }"#;

    #[tokio::test]
    async fn loads_matching_record() {
        let (_dir, store) = store_with(&[("smith-plumbing.json", VALID)]);
        let record = store.load("smith-plumbing").await.expect("record");
        assert_eq!(record.business_name, "Smith Plumbing");
    }

    #[tokio::test]
    async fn missing_record_is_absent() {
        let (_dir, store) = store_with(&[]);
        assert!(store.load("nowhere").await.is_none());
    }

    #[tokio::test]
    async fn malformed_record_is_treated_as_absent() {
        let (_dir, store) = store_with(&[
            ("broken.json", "{ not json"),
            ("wrong-shape.json", r#"{"slug": 42}"#),
        ]);
        assert!(store.load("broken").await.is_none());
        assert!(store.load("wrong-shape").await.is_none());
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive_and_exact() {
        let (_dir, store) = store_with(&[("smith-plumbing.json", VALID)]);
        assert!(store.load("Smith-Plumbing").await.is_none());
        assert!(store.load("smith-plumbin").await.is_none());
    }

    #[tokio::test]
    async fn traversal_slugs_never_resolve() {
        let (_dir, store) = store_with(&[("smith-plumbing.json", VALID)]);
        assert!(store.load("../smith-plumbing").await.is_none());
        assert!(store.load("a/b").await.is_none());
        assert!(store.load("").await.is_none());
        assert!(store.load(".hidden").await.is_none());
    }
}

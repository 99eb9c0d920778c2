//! Change gate between model building and synthesis.

use crate::error::SinkError;
use enumclass_schema::prelude::*;
use std::{collections::HashMap, fs, path::Path};
use xxhash_rust::xxh3::Xxh3;

/// File name of the persisted cache inside the output directory.
pub const CACHE_FILE: &str = "enumclass-cache.json";

// unchanged
// structural equality over every field, members included
#[must_use]
pub fn unchanged(previous: &GenerationModel, next: &GenerationModel) -> bool {
    previous == next
}

#[inline]
fn feed_u8(h: &mut Xxh3, x: u8) {
    h.update(&[x]);
}

#[inline]
fn feed_u64(h: &mut Xxh3, x: u64) {
    h.update(&x.to_be_bytes());
}

#[inline]
fn feed_str(h: &mut Xxh3, s: &str) {
    feed_u64(h, s.len() as u64);
    h.update(s.as_bytes());
}

fn feed_opt(h: &mut Xxh3, s: Option<&str>) {
    match s {
        Some(s) => {
            feed_u8(h, 0x01);
            feed_str(h, s);
        }
        None => feed_u8(h, 0x00),
    }
}

///
/// Stable 128-bit fingerprint of a model.
///
/// Every string is length-prefixed and every optional field tagged, so two
/// models share a fingerprint only if they agree field by field. The cache
/// compares fingerprints first and falls back to full equality on a match.
///
#[must_use]
pub fn fingerprint(model: &GenerationModel) -> u128 {
    const VERSION: u8 = 1;

    let mut h = Xxh3::with_seed(0);
    feed_u8(&mut h, VERSION);

    feed_str(&mut h, &model.target_type_name);
    feed_str(&mut h, &model.target_namespace);
    feed_str(&mut h, &model.target_kind.to_string());
    feed_str(&mut h, &model.target_visibility);
    feed_u64(&mut h, model.target_attributes.len() as u64);
    for attr in &model.target_attributes {
        feed_str(&mut h, attr);
    }
    feed_str(&mut h, &model.enumerate_type_full_name);
    feed_str(&mut h, &model.enumerate_underlying_numeric_type.to_string());
    feed_opt(&mut h, model.default_member.as_deref());
    feed_u8(&mut h, u8::from(model.with_description));

    feed_u64(&mut h, model.members.len() as u64);
    for member in &model.members {
        feed_str(&mut h, &member.name);
        feed_str(&mut h, &member.qualified_ref);
        feed_opt(&mut h, member.raw_annotation_description.as_deref());
        feed_opt(&mut h, member.raw_documentation.as_deref());
        feed_opt(&mut h, member.raw_comment.as_deref());
        feed_str(&mut h, &member.description);
        feed_str(&mut h, &member.constant);
    }

    h.digest128()
}

///
/// CachedGeneration
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CachedGeneration {
    pub model: GenerationModel,
    pub fingerprint: u128,
    pub artifacts: Artifacts,
}

impl CachedGeneration {
    #[must_use]
    pub fn new(model: GenerationModel, artifacts: Artifacts) -> Self {
        Self {
            fingerprint: fingerprint(&model),
            model,
            artifacts,
        }
    }

    /// The cached artifacts, if `next` would render exactly the same text.
    #[must_use]
    pub fn reuse(&self, next: &GenerationModel, next_fingerprint: u128) -> Option<&Artifacts> {
        (self.fingerprint == next_fingerprint && unchanged(&self.model, next))
            .then_some(&self.artifacts)
    }
}

///
/// GenerationCache
///
/// Last successful generation per target path. Lives across passes; a pass
/// reads it immutably and updates it once all declarations are merged.
///

#[derive(Clone, Debug, Default)]
pub struct GenerationCache {
    entries: HashMap<String, CachedGeneration>,
}

impl GenerationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, target: &str) -> Option<&CachedGeneration> {
        self.entries.get(target)
    }

    pub fn insert(&mut self, target: String, entry: CachedGeneration) {
        self.entries.insert(target, entry);
    }

    /// Drop every target not accepted by `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|target, _| keep(target));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read a cache written by `save`. A missing, unreadable or stale file
    /// gives an empty cache; fingerprints are recomputed on load.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::new();
        };

        match serde_json::from_str::<StoredCache>(&contents) {
            Ok(stored) if stored.version == env!("CARGO_PKG_VERSION") => Self {
                entries: stored
                    .entries
                    .into_iter()
                    .map(|entry| (entry.target, CachedGeneration::new(entry.model, entry.artifacts)))
                    .collect(),
            },
            Ok(stored) => {
                tracing::debug!(version = %stored.version, "discarding cache from another generator version");
                Self::new()
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "discarding unreadable cache");
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SinkError> {
        let mut entries: Vec<StoredEntry> = self
            .entries
            .iter()
            .map(|(target, entry)| StoredEntry {
                target: target.clone(),
                model: entry.model.clone(),
                artifacts: entry.artifacts.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.target.cmp(&b.target));

        let json = serde_json::to_string(&StoredCache {
            version: env!("CARGO_PKG_VERSION").to_string(),
            entries,
        })?;

        fs::write(path, json).map_err(|source| SinkError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

///
/// StoredCache
///
/// On-disk form of a `GenerationCache`. Generated text depends on the
/// generator itself, so entries from another version are never reused.
///

#[derive(Deserialize, Serialize)]
struct StoredCache {
    version: String,
    entries: Vec<StoredEntry>,
}

#[derive(Deserialize, Serialize)]
struct StoredEntry {
    target: String,
    model: GenerationModel,
    artifacts: Artifacts,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::synthesize;

    fn model() -> GenerationModel {
        GenerationModel {
            target_type_name: "StatusClass".into(),
            target_namespace: "crate::targets".into(),
            target_kind: TargetKind::ValueClass,
            target_visibility: "pub".into(),
            target_attributes: Vec::new(),
            enumerate_type_full_name: "crate::Status".into(),
            enumerate_underlying_numeric_type: Repr::I32,
            default_member: None,
            with_description: false,
            members: vec![ResolvedMember::new(
                EnumMember::new("Active", "crate::Status::Active"),
                "Active".into(),
                "ACTIVE".into(),
            )],
        }
    }

    #[test]
    fn identical_models_are_unchanged() {
        assert!(unchanged(&model(), &model()));
        assert_eq!(fingerprint(&model()), fingerprint(&model()));
    }

    #[test]
    fn any_field_change_is_detected() {
        let base = model();

        let mut described = base.clone();
        described.with_description = true;

        let mut renamed = base.clone();
        renamed.members[0].description = "Currently active".into();

        let mut moved = base.clone();
        moved.target_namespace = "crate::other".into();

        for next in [described, renamed, moved] {
            assert!(!unchanged(&base, &next));
            assert_ne!(fingerprint(&base), fingerprint(&next));
        }
    }

    #[test]
    fn cache_reuses_only_matching_models() {
        let model = model();
        let artifacts = synthesize(&model).expect("synthesizes");
        let mut cache = GenerationCache::new();
        cache.insert(
            model.target_path(),
            CachedGeneration::new(model.clone(), artifacts.clone()),
        );

        let entry = cache.get("crate::targets::StatusClass").expect("cached");
        assert_eq!(entry.reuse(&model, fingerprint(&model)), Some(&artifacts));

        let mut next = model;
        next.default_member = Some("Active".into());
        assert_eq!(entry.reuse(&next, fingerprint(&next)), None);
    }

    #[test]
    fn retain_drops_stale_targets() {
        let model = model();
        let artifacts = synthesize(&model).expect("synthesizes");
        let mut cache = GenerationCache::new();
        cache.insert("a".into(), CachedGeneration::new(model.clone(), artifacts.clone()));
        cache.insert("b".into(), CachedGeneration::new(model, artifacts));

        cache.retain(|target| target == "a");

        assert_eq!(cache.len(), 1);
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn cache_survives_a_save_and_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CACHE_FILE);
        let model = model();
        let artifacts = synthesize(&model).expect("synthesizes");

        let mut cache = GenerationCache::new();
        cache.insert(
            model.target_path(),
            CachedGeneration::new(model.clone(), artifacts.clone()),
        );
        cache.save(&path).expect("saves");

        let loaded = GenerationCache::load(&path);
        let entry = loaded.get("crate::targets::StatusClass").expect("cached");
        assert_eq!(entry.fingerprint, fingerprint(&model));
        assert_eq!(entry.reuse(&model, fingerprint(&model)), Some(&artifacts));
    }

    #[test]
    fn unusable_cache_files_load_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CACHE_FILE);

        assert!(GenerationCache::load(&path).is_empty());

        fs::write(&path, "not json").expect("write");
        assert!(GenerationCache::load(&path).is_empty());

        fs::write(&path, r#"{"version":"0.0.0-old","entries":[]}"#).expect("write");
        assert!(GenerationCache::load(&path).is_empty());
    }
}

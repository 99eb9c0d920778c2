use crate::{error::SinkError, pass::PassOutput};
use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

///
/// ArtifactSink
///
/// Receives generated sources. A hint name may be added once per pass.
///

pub trait ArtifactSink {
    fn add(&mut self, hint_name: &str, source_text: &str) -> Result<(), SinkError>;
}

// emit
// forwards every artifact of a pass, returning how many were added
pub fn emit<S>(output: &PassOutput, sink: &mut S) -> Result<usize, SinkError>
where
    S: ArtifactSink + ?Sized,
{
    let mut count = 0;
    for artifact in output.iter_artifacts() {
        sink.add(&artifact.hint_name, &artifact.source_text)?;
        count += 1;
    }

    Ok(count)
}

fn check_hint(hint_name: &str) -> Result<(), SinkError> {
    let plain = !hint_name.is_empty()
        && hint_name != "."
        && hint_name != ".."
        && !hint_name.contains(['/', '\\']);

    if plain {
        Ok(())
    } else {
        Err(SinkError::InvalidHint(hint_name.to_string()))
    }
}

///
/// MemorySink
///

#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, hint_name: &str) -> Option<&str> {
        self.files.get(hint_name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.files
    }
}

impl ArtifactSink for MemorySink {
    fn add(&mut self, hint_name: &str, source_text: &str) -> Result<(), SinkError> {
        check_hint(hint_name)?;
        if self.files.contains_key(hint_name) {
            return Err(SinkError::DuplicateArtifactName(hint_name.to_string()));
        }
        self.files
            .insert(hint_name.to_string(), source_text.to_string());

        Ok(())
    }
}

///
/// DirectorySink
///
/// Writes each artifact as `<root>/<hint_name>`. Files whose content is
/// already current are left untouched so their timestamps do not move.
///

#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    added: HashSet<String>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| SinkError::Io {
            path: root.clone(),
            source,
        })?;

        Ok(Self {
            root,
            added: HashSet::new(),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirectorySink {
    fn add(&mut self, hint_name: &str, source_text: &str) -> Result<(), SinkError> {
        check_hint(hint_name)?;
        if !self.added.insert(hint_name.to_string()) {
            return Err(SinkError::DuplicateArtifactName(hint_name.to_string()));
        }

        let path = self.root.join(hint_name);
        if fs::read_to_string(&path).is_ok_and(|existing| existing == source_text) {
            tracing::debug!(path = %path.display(), "artifact already current");
            return Ok(());
        }

        fs::write(&path, source_text).map_err(|source| SinkError::Io { path, source })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_rejects_duplicate_hints() {
        let mut sink = MemorySink::new();
        sink.add("a_lookup.rs", "// a").expect("first add");

        let err = sink.add("a_lookup.rs", "// again").expect_err("duplicate");

        assert!(matches!(err, SinkError::DuplicateArtifactName(hint) if hint == "a_lookup.rs"));
        assert_eq!(sink.get("a_lookup.rs"), Some("// a"));
    }

    #[test]
    fn hints_must_be_plain_file_names() {
        let mut sink = MemorySink::new();

        for hint in ["", "..", "../escape.rs", "nested/file.rs"] {
            assert!(matches!(sink.add(hint, ""), Err(SinkError::InvalidHint(_))), "{hint}");
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn directory_sink_writes_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut sink = DirectorySink::new(dir.path().join("out")).expect("sink");

        sink.add("status_lookup.rs", "// lookup").expect("write");

        let written = fs::read_to_string(sink.root().join("status_lookup.rs")).expect("read back");
        assert_eq!(written, "// lookup");
        assert!(matches!(
            sink.add("status_lookup.rs", "// lookup"),
            Err(SinkError::DuplicateArtifactName(_))
        ));
    }

    #[test]
    fn directory_sink_overwrites_stale_content() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("a.rs"), "// old").expect("seed");

        let mut sink = DirectorySink::new(dir.path()).expect("sink");
        sink.add("a.rs", "// new").expect("write");

        assert_eq!(fs::read_to_string(dir.path().join("a.rs")).expect("read"), "// new");
    }
}

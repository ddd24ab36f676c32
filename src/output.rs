use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::index::CharIndex;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode index: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serializes as a JSON object keyed by character, in target order.
impl Serialize for CharIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        let mut buf = [0u8; 4];
        for (c, words) in self.iter() {
            let key: &str = c.encode_utf8(&mut buf);
            map.serialize_entry(key, words)?;
        }
        map.end()
    }
}

/// Minified JSON with non-ASCII text written literally.
pub fn to_json(index: &CharIndex) -> Result<String, OutputError> {
    Ok(serde_json::to_string(index)?)
}

/// Write the index to `path` atomically; on failure nothing is left behind.
pub fn write_index(index: &CharIndex, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(io_err)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer(&mut writer, index)?;
        writer.flush().map_err(io_err)?;
    }
    temp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::TargetChars;
    use crate::index::IndexBuilder;
    use wordfreq_types::FrequencyRecord;

    fn sample() -> CharIndex {
        let targets: TargetChars = "爱龘心".chars().collect();
        IndexBuilder::new(2).unwrap().build(
            &targets,
            vec![
                FrequencyRecord::new("爱", 10),
                FrequencyRecord::new("爱心", 5),
                FrequencyRecord::new("恋爱", 8),
            ],
        )
    }

    #[test]
    fn writes_compact_unescaped_json_in_target_order() {
        let json = to_json(&sample()).unwrap();
        assert_eq!(json, r#"{"爱":["爱","恋爱"],"龘":[],"心":["爱心"]}"#);
    }

    #[test]
    fn writes_file_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("char_index.json");
        write_index(&sample(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json(&sample()).unwrap());
        let leftovers = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        write_index(&sample(), &a).unwrap();
        write_index(&sample(), &b).unwrap();
        assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
    }
}

//! A collection persisted as a single JSON file.

use std::{
    fmt,
    io::{self, BufWriter, Write},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::storage::{Store, StoreError};

/// Stores a collection as a pretty-printed JSON array in one file.
///
/// A missing or blank file loads as an empty collection. Saves write a sibling
/// temporary file and rename it over the target, so a failed save leaves the
/// previous contents in place.
pub struct JsonStore<T> {
    path: PathBuf,
    item: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T> {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is not touched until the first load or save.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            item: PhantomData,
        }
    }

    /// The file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> StoreError {
        StoreError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl<T> fmt::Debug for JsonStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonStore").field("path", &self.path).finish()
    }
}

impl<T> Store<T> for JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&mut self) -> Result<Vec<T>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No data at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Vec<T> = serde_json::from_str(&content).map_err(|e| self.json_error(e))?;
        tracing::trace!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn save(&mut self, items: &[T]) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;

        let file = NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, items).map_err(|e| self.json_error(e))?;
        writer.write_all(b"\n").map_err(|e| self.io_error(e))?;

        let file = writer.into_inner().map_err(|e| self.io_error(e.into_error()))?;
        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::trace!("Saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{Book, Id, Person};

    #[test]
    fn missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonStore::<Book>::new(tmp.path().join("books.json"));

        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn blank_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("books.json");
        std::fs::write(&path, "\n").unwrap();

        let mut store = JsonStore::<Book>::new(path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("people.json");
        let people = vec![
            Person::teacher(Id::new(3), 52, Some("History".to_string()), "Marc"),
            Person::student(Id::new(1), 17, "Zoe"),
            Person::teacher(Id::new(2), 40, None, "Ines"),
        ];

        JsonStore::<Person>::new(path.clone()).save(&people).unwrap();
        let loaded = JsonStore::<Person>::new(path).load().unwrap();

        assert_eq!(loaded, people);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonStore::<Book>::new(tmp.path().join("books.json"));

        store
            .save(&[
                Book::new(Id::new(1), "Dune", "Herbert"),
                Book::new(Id::new(2), "Emma", "Austen"),
            ])
            .unwrap();
        store.save(&[Book::new(Id::new(3), "Ulysses", "Joyce")]).unwrap();

        assert_eq!(
            store.load().unwrap(),
            vec![Book::new(Id::new(3), "Ulysses", "Joyce")]
        );
    }

    /// Serializes as its number, refusing to serialize zero.
    #[derive(Debug, PartialEq, serde::Deserialize)]
    #[serde(transparent)]
    struct Entry(u32);

    impl Serialize for Entry {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.0 == 0 {
                return Err(serde::ser::Error::custom("zero is not storable"));
            }
            serializer.serialize_u32(self.0)
        }
    }

    #[test]
    fn failed_save_keeps_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("entries.json");
        let mut store = JsonStore::<Entry>::new(path.clone());
        store.save(&[Entry(1), Entry(2)]).unwrap();

        let error = store.save(&[Entry(1), Entry(2), Entry(0)]).unwrap_err();

        assert!(matches!(error, StoreError::Json { .. }));
        assert_eq!(store.load().unwrap(), vec![Entry(1), Entry(2)]);
        let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|entry| entry != &path)
            .collect();
        assert!(leftovers.is_empty(), "temporary files left behind: {leftovers:?}");
    }

    #[test]
    fn corrupt_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("books.json");
        std::fs::write(&path, "{ not json").unwrap();

        let error = JsonStore::<Book>::new(path.clone()).load().unwrap_err();

        assert!(matches!(error, StoreError::Json { .. }));
        assert_eq!(error.to_string(), format!("invalid data in {}", path.display()));
    }
}

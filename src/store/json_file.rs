use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::{ProfileRecord, ProfileStore, StoreError};

const STORE_VERSION: u32 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    records: BTreeMap<String, ProfileRecord>,
}

/// Whole-collection JSON document. Every save rewrites the file through a
/// temporary sibling and a rename, so readers never see a partial write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: BTreeMap<String, ProfileRecord>,
}

impl JsonFileStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let records = if path.exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                let file: StoreFile = serde_json::from_str(&content)?;
                if file.version != STORE_VERSION {
                    tracing::warn!(
                        path = %path.display(),
                        version = file.version,
                        "unexpected store version, reading anyway"
                    );
                }
                file.records
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), records = records.len(), "profile store opened");
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = StoreFile {
            version: STORE_VERSION,
            records: self.records.clone(),
        };
        let tmp_path = tmp_path_for(&self.path);
        {
            let mut w = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut w, &file)?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl ProfileStore for JsonFileStore {
    fn load(&self, user_id: &str) -> Result<Option<ProfileRecord>, StoreError> {
        Ok(self.records.get(user_id).cloned())
    }

    fn save(&mut self, record: ProfileRecord) -> Result<(), StoreError> {
        let user_id = record.user_id.clone();
        let previous = self.records.insert(user_id.clone(), record);
        if let Err(err) = self.persist() {
            // keep memory in step with what is on disk
            match previous {
                Some(old) => self.records.insert(user_id, old),
                None => self.records.remove(&user_id),
            };
            return Err(err);
        }
        Ok(())
    }
}

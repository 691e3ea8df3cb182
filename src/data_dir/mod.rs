//! Layout of a data directory: one transcript in, two tables out.

pub mod reader;
pub mod writer;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use reader::read_sub_utterances;
pub use writer::{write_tables, TableRow};

/// File names inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableFiles {
    pub text: String,
    pub utt2spk: String,
    pub segments: String,
}

impl Default for TableFiles {
    fn default() -> Self {
        Self {
            text: "text".into(),
            utt2spk: "utt2spk".into(),
            segments: "segments".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
    files: TableFiles,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>, files: TableFiles) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn text_path(&self) -> PathBuf {
        self.root.join(&self.files.text)
    }

    pub fn utt2spk_path(&self) -> PathBuf {
        self.root.join(&self.files.utt2spk)
    }

    pub fn segments_path(&self) -> PathBuf {
        self.root.join(&self.files.segments)
    }
}

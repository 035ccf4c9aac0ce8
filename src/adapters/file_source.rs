use crate::domain::ports::MassSource;
use crate::utils::error::{FuelError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MassSource for FileSource {
    type Reader = BufReader<File>;

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Self::Reader> {
        let file = File::open(&self.path).map_err(|source| FuelError::SourceUnavailable {
            path: self.describe(),
            source,
        })?;
        Ok(BufReader::new(file))
    }
}

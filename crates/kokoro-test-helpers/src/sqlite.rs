use crate::TestDb;
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// A throwaway file-backed sqlite database. File-backed rather than
/// in-memory so a pool can hand out more than one real connection.
pub struct SqliteDb {
    // The directory must outlive every connection to the file
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("kokoro-test-db")?;
        let uri = temp_dir
            .path()
            .to_path_buf()
            .join("db.sqlite")
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?
            .to_owned();
        let uri = format!("sqlite://{uri}?mode=rwc");

        tracing::info!(uri = ?uri, "created throwaway sqlite db");
        Ok(Self { temp_dir, uri })
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_uri_points_into_the_temp_dir() {
        let db = SqliteDb::new().unwrap();
        assert!(db.db_uri().starts_with("sqlite://"));
        assert!(db.db_uri().ends_with("db.sqlite?mode=rwc"));
        drop(db);
    }
}

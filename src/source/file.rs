//! Local file dataset loading.

use crate::model::{SourceError, UserRecord};
use std::path::Path;

/// Read and decode a roster dataset from a local JSON file.
///
/// The file must contain a JSON array of record objects with at least the
/// `id`, `name`, `email` and `role` string fields.
///
/// # Errors
///
/// Returns `SourceError::FileRead` when the file cannot be read and
/// `SourceError::FileDecode` when its contents are not a valid record
/// array.
pub fn load_file(path: &Path) -> Result<Vec<UserRecord>, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SourceError::FileDecode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_file_reads_record_array() {
        let temp_dir = std::env::temp_dir();
        let test_file = temp_dir.join("roster_load_file_valid.json");
        let content = r#"[
            {"id":"1","name":"Aaron","email":"aaron@example.com","role":"member"},
            {"id":"2","name":"Beth","email":"beth@example.com","role":"admin"}
        ]"#;
        fs::write(&test_file, content).unwrap();

        let records = load_file(&test_file).unwrap();

        let _ = fs::remove_file(&test_file);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "1");
        assert_eq!(records[1].role, "admin");
    }

    #[test]
    fn load_file_missing_path_is_read_error() {
        let result = load_file(Path::new("/no/such/dir/roster.json"));
        assert!(matches!(result, Err(SourceError::FileRead { .. })));
    }

    #[test]
    fn load_file_invalid_json_is_decode_error() {
        let temp_dir = std::env::temp_dir();
        let test_file = temp_dir.join("roster_load_file_invalid.json");
        fs::write(&test_file, "not json at all").unwrap();

        let result = load_file(&test_file);

        let _ = fs::remove_file(&test_file);

        assert!(matches!(result, Err(SourceError::FileDecode { .. })));
    }

    #[test]
    fn load_file_object_instead_of_array_is_decode_error() {
        let temp_dir = std::env::temp_dir();
        let test_file = temp_dir.join("roster_load_file_object.json");
        fs::write(
            &test_file,
            r#"{"id":"1","name":"A","email":"a@b.c","role":"member"}"#,
        )
        .unwrap();

        let result = load_file(&test_file);

        let _ = fs::remove_file(&test_file);

        assert!(matches!(result, Err(SourceError::FileDecode { .. })));
    }
}

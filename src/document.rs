use crate::error::{QaError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads and shape-checks a JSON document. `kind` names the document in errors.
pub fn read_json<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| QaError::File {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), kind, "read document");
    parse_json(&content, path, kind)
}

pub(crate) fn parse_json<T: DeserializeOwned>(
    content: &str,
    path: &Path,
    kind: &'static str,
) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
        QaError::MalformedDocument {
            kind,
            path: path.to_path_buf(),
            source,
        }
    })?;
    deserializer.end()?;
    Ok(value)
}

/// Shape-checks an already parsed document against `T`.
pub(crate) fn check_shape<T: DeserializeOwned>(
    value: &Value,
    path: &Path,
    kind: &'static str,
) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|source| QaError::MalformedDocument {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `value` as JSON indented by two spaces, with a trailing newline.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    fs::write(path, rendered.as_bytes()).map_err(|source| QaError::File {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = rendered.len(), "wrote document");
    Ok(())
}

/// Fails with [`QaError::OutputExists`] when `path` exists and `force` is not set.
pub fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(QaError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize)]
    struct Outer {
        #[allow(dead_code)]
        items: Vec<Inner>,
    }

    #[derive(Debug, Deserialize)]
    struct Inner {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn parse_json_reports_path_of_missing_key() {
        let content = r#"{"items":[{"name":"a"},{}]}"#;
        let err = parse_json::<Outer>(content, Path::new("in.json"), "test")
            .expect_err("missing key should fail");
        let message = err.to_string();
        assert!(message.contains("malformed test document in.json"), "{message}");
        assert!(message.contains("items[1]"), "{message}");
    }

    #[test]
    fn parse_json_rejects_invalid_json() {
        let result = parse_json::<Outer>("{not json", Path::new("in.json"), "test");
        assert!(matches!(result, Err(QaError::MalformedDocument { .. })));
    }

    #[test]
    fn parse_json_rejects_trailing_data() {
        let result = parse_json::<Outer>(r#"{"items":[]} []"#, Path::new("in.json"), "test");
        assert!(matches!(result, Err(QaError::Json(_))));
    }

    #[test]
    fn check_shape_reports_path_inside_parsed_value() {
        let value = json!({"items": [{"name": "a"}, {"name": 3}]});
        let err = check_shape::<Outer>(&value, Path::new("in.json"), "test")
            .expect_err("wrong type should fail");
        assert!(err.to_string().contains("items[1].name"), "{err}");
    }

    #[test]
    fn write_json_uses_two_space_indent() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("out.json");
        write_json(&path, &json!({"a": {"b": 1}})).expect("write should succeed");

        let written = fs::read_to_string(&path).expect("output should read");
        assert_eq!(written, "{\n  \"a\": {\n    \"b\": 1\n  }\n}\n");
    }

    #[test]
    fn ensure_writable_refuses_existing_file_without_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("out.sarif");
        assert!(ensure_writable(&path, false).is_ok());

        fs::write(&path, "{}").expect("existing file should write");
        assert!(matches!(
            ensure_writable(&path, false),
            Err(QaError::OutputExists(_))
        ));
        assert!(ensure_writable(&path, true).is_ok());
    }

    #[test]
    fn read_json_missing_file_is_io_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let result = read_json::<Outer>(&dir.path().join("missing.json"), "test");
        assert!(matches!(result, Err(QaError::File { .. })));
    }
}

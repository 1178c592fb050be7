pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Resolve a typed request from `--input <file>`, then piped stdin.
/// Returns `None` when neither is present so the caller can fall back to flags.
pub fn read_request<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_json(path)?));
    }
    stdin::read_stdin()
}

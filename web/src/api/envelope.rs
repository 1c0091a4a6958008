//! The canonical response contract for the sheet backend, plus
//! normalization of the legacy bare-array read shape.

use serde::Deserialize;
use serde_json::Value;
use taskboard_core::Task;

use super::StoreError;

/// The `{ok, data, error}` wrapper the backend settled on.
#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Read-path response shapes seen across backend revisions.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListResponse {
    Enveloped(Envelope),
    // One legacy revision serves the raw array with no wrapper.
    Bare(Vec<Task>),
}

/// Parses a read response, normalizing both shapes to a task list.
/// A successful envelope with no `data` means an empty board.
pub fn parse_task_list(body: &str) -> Result<Vec<Task>, StoreError> {
    match serde_json::from_str::<ListResponse>(body)? {
        ListResponse::Bare(tasks) => Ok(tasks),
        ListResponse::Enveloped(env) => match unwrap_envelope(env, "List failed")? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        },
    }
}

/// Parses a write acknowledgement. `data` may be the affected record,
/// a bare boolean, or absent; only a record is propagated to callers.
pub fn parse_ack(body: &str, fallback: &str) -> Result<Option<Task>, StoreError> {
    let env: Envelope = serde_json::from_str(body)?;
    let data = unwrap_envelope(env, fallback)?;
    Ok(data.and_then(|value| serde_json::from_value::<Task>(value).ok()))
}

fn unwrap_envelope(env: Envelope, fallback: &str) -> Result<Option<Value>, StoreError> {
    if env.ok {
        Ok(env.data)
    } else {
        Err(StoreError::Application(
            env.error.unwrap_or_else(|| fallback.to_string()),
        ))
    }
}

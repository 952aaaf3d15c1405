use crate::core::errors::Result;
use crate::core::models::key_record::KeyRecord;
use crate::core::traits::key_tool::KeyTool;

const SECRET_KEY_MARKER: &str = "sec";
const USER_ID_MARKER: &str = "uid";

/// Ask the key tool for all keys with secret parts available and parse
/// the listing. Sorted; empty when there is nothing to export.
pub fn get_key_list<T: KeyTool>(tool: &T) -> Result<Vec<KeyRecord>> {
    let output = tool.list_secret_keys()?;
    Ok(parse_key_list(&output.stdout))
}

/// Parse a secret key listing into sorted records.
///
/// A `sec` line opens a new record, each following `uid` line adds an
/// identity to it. All other lines are ignored.
pub fn parse_key_list(listing: &[u8]) -> Vec<KeyRecord> {
    let text = String::from_utf8_lossy(listing);
    let mut keys = Vec::new();
    let mut current: Option<KeyRecord> = None;

    for line in text.lines() {
        if line.starts_with(SECRET_KEY_MARKER) {
            keys.extend(current.take());
            current = short_id(line).map(|short_id| KeyRecord {
                identities: Vec::new(),
                summary_line: line.trim_end().to_string(),
                short_id,
            });
            if current.is_none() {
                tracing::debug!(line, "secret key line without key id, skipping block");
            }
        } else if let Some(uid) = line.strip_prefix(USER_ID_MARKER) {
            if let Some(record) = current.as_mut() {
                record.identities.push(uid.trim().to_string());
            }
        }
    }
    keys.extend(current);

    keys.sort();
    keys
}

/// `sec   2048R/DAA011C5 2015-01-06` -> `DAA011C5`
fn short_id(line: &str) -> Option<String> {
    let (_, rest) = line.split_once('/')?;
    let id = rest.split([' ', '/']).next()?;
    (!id.is_empty()).then(|| id.to_string())
}

/// Render the numbered list shown to the operator.
///
/// ```text
/// [  1] sec   2048R/DAA011C5 2015-01-06
///       Bob Tester <bob@example.org>
/// ```
pub fn format_key_list(keys: &[KeyRecord]) -> String {
    let mut out = String::new();
    for (num, key) in keys.iter().enumerate() {
        out.push_str(&format!("[{:>3}] {}\n", num + 1, key.summary_line));
        for name in &key.identities {
            out.push_str(&format!("      {name}\n"));
        }
    }
    out
}

//! Offline decoding of a saved stats response

use std::{fs, path::Path};

use serde_json::Value;
use tracing::debug;

use super::common::{policy_for, print_json};
use crate::{
    stats::{DecodePolicy, GroupedStats},
    Result,
};

/// Read and decode a `{"stats": [...]}` response saved to disk.
pub fn decode_file(path: &Path, policy: DecodePolicy) -> Result<GroupedStats> {
    let text = fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&text)?;
    debug!(path = %path.display(), ?policy, "decoding saved response");
    Ok(GroupedStats::from_response(&raw, policy)?)
}

/// Handle the decode command
pub fn handle_decode(path: &Path, lenient: bool) -> Result<()> {
    let stats = decode_file(path, policy_for(lenient))?;
    print_json(&stats)
}

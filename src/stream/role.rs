//! Stream-id composition and role resolution for stereo camera pairs.
//!
//! Stream ids follow the producer convention `"{base}_{role}"` with a
//! lowercase role suffix (`left`/`right`). Resolution inspects the first
//! [`ROLE_TAG_LEN`] characters after the separator, case-folded to uppercase,
//! and reports an explicit three-way tag instead of guessing: callers decide
//! what an unrecognized suffix should map to.

use serde::{Deserialize, Serialize};

/// Width of the role tag inspected after the separator.
pub const ROLE_TAG_LEN: usize = 4;

/// Logical camera identity in a stereo pair, independent of physical device
/// ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraRole {
    Left,
    Right,
}

impl CameraRole {
    /// Lowercase stream-id suffix for this role.
    pub fn suffix(self) -> &'static str {
        match self {
            CameraRole::Left => "left",
            CameraRole::Right => "right",
        }
    }
}

/// Outcome of parsing the role tag of a stream id whose base matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleTag {
    Left,
    Right,
    /// Tag present but neither `LEFT` nor `RIGH`; the fallback policy is a
    /// caller decision.
    Unrecognized,
}

impl RoleTag {
    pub fn role(self) -> Option<CameraRole> {
        match self {
            RoleTag::Left => Some(CameraRole::Left),
            RoleTag::Right => Some(CameraRole::Right),
            RoleTag::Unrecognized => None,
        }
    }
}

/// Composes the stream id for `role` under `base`, the inverse of
/// [`resolve_role`].
pub fn stream_id_for_role(base: &str, role: CameraRole) -> String {
    format!("{base}_{}", role.suffix())
}

/// Resolves which camera role produced `stream_id`.
///
/// Returns `None` when `stream_id` does not start with `base_id` (unknown
/// origin; downstream must skip the result). Otherwise one separator
/// character is skipped (its value is not validated) and up to
/// [`ROLE_TAG_LEN`] characters are case-folded and matched: `LEFT`/`RIGH`
/// map to their roles, anything else is [`RoleTag::Unrecognized`].
pub fn resolve_role(stream_id: &str, base_id: &str) -> Option<RoleTag> {
    let rest = stream_id.strip_prefix(base_id)?;
    let tag: String = rest.chars().skip(1).take(ROLE_TAG_LEN).collect();
    Some(match tag.to_ascii_uppercase().as_str() {
        "LEFT" => RoleTag::Left,
        "RIGH" => RoleTag::Right,
        _ => RoleTag::Unrecognized,
    })
}

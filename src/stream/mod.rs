//! Stream identity and the producer-side ingest path.
//!
//! `role` parses composite stream ids back to camera roles; `router` wires
//! resolution, score filtering and camera-params lookup in front of the
//! handoff slot.

pub mod role;
pub mod router;

pub use role::{resolve_role, stream_id_for_role, CameraRole, RoleTag, ROLE_TAG_LEN};
pub use router::{ResultRouter, RoutedResult, RouterParams};

pub mod dom;
pub mod sidecar;

pub use dom::{Document, NodeId, StyleId};
pub use sidecar::SidecarClient;

//! External collaborator interfaces.
//!
//! The interpreter treats its data sources as black boxes behind small
//! traits: a project store for the live-mounted `~/projects` subtree and a
//! network probe for the simulation-only networking verbs. Canned
//! implementations ship with the crate so the demo shell works offline.

mod probe;
mod projects;

pub use probe::{NetworkProbe, ProbeDelivery, ProbeKind, ProbeReport, SimulatedProbe};
pub use projects::{PROJECTS_MOUNT, ProjectEntry, ProjectStore, StaticProjectStore};

//! # Label Kernel
//!
//! An organization's resource-naming convention as a pure function:
//! workspace-scoped naming facts plus a per-call resource descriptor in,
//! a joined identifier and a tag map out.
//!
//! ```text
//! LabelConfig ──┐
//!               ├─► segment(workspace) ─► domain segments
//! ResourceDescriptor ─┤
//!               ├─► generate_id   ─► "dpl-ane2-sg-dev-emr-sales-api"
//!               └─► generate_tags ─► {Name, Tenant, Environment, Stage,
//!                                     Namespace?, Attributes?}
//! ```
//!
//! Nothing here performs I/O or reads ambient state. Callers resolve the
//! configuration, run [`LabelConfig::ensure_complete`], then call the
//! generators as often as they like, concurrently if needed.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod label;
pub mod segment;

pub use config::{DEFAULT_DELIMITER, LabelConfig, REQUIRED_FIELDS};
pub use descriptor::ResourceDescriptor;
pub use error::LabelError;
pub use label::{Label, Tags, generate_id, generate_tags, label};
pub use segment::{SegmentPolicy, WORKSPACE_SEPARATOR, segment};

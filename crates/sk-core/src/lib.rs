pub mod emit;
pub mod id;
pub mod lint;
pub mod model;
pub mod naming;
pub mod transform;

pub use emit::emit_svg;
pub use id::ElementId;
pub use lint::{LintDiagnostic, LintSeverity, lint_document};
pub use model::*;
pub use naming::{ButtonState, FrameSide, frame_piece_id, frame_piece_ids, interior_id};
pub use transform::Transform;

// Re-export the petgraph handle type so downstream crates don't need a direct dependency
pub use petgraph::graph::NodeIndex;

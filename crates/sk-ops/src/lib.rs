pub mod duplicate;
pub mod effects;
pub mod frame;
pub mod interior;
pub mod options;

pub use duplicate::{Axis, Offset, copy_frame, copy_interior, duplicate_as, duplicate_set};
pub use effects::{
    copy_frames, copy_interiors, generate_frame_states, generate_frames,
    generate_interior_states, generate_interiors,
};
pub use frame::{FrameBorders, draw_frame};
pub use interior::draw_interior;
pub use options::{FrameOptions, InteriorOptions, RebaseOptions, StateFlags, StateVariantOptions};

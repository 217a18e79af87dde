pub mod animator;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod morpher;
pub mod shapes;
pub mod time;

// Re-export key types at crate root for convenience
pub use animator::{AnimatorEvent, CursorState, PathAnimator, PathSample};
pub use easing::{ease, ease_vec2, lerp, lerp_vec2, remap, Easing};
pub use error::GlideError;
pub use morpher::{morph_points, PointSetMorpher};
pub use shapes::{ShapeDef, ShapeManifest};
pub use time::FrameClock;

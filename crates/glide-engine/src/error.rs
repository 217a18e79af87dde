use thiserror::Error;

/// Malformed-input errors. These are the only hard failures in the crate;
/// recoverable runtime conditions are reported through [`AnimatorEvent`]
/// instead so a running animation loop never aborts.
///
/// [`AnimatorEvent`]: crate::animator::AnimatorEvent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlideError {
    #[error("a path needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },
    #[error("origin and target point sets differ in length: {origin} vs {target}")]
    PointCountMismatch { origin: usize, target: usize },
    #[error("morph duration must be positive, got {duration}")]
    NonPositiveDuration { duration: f32 },
}

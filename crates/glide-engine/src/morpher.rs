// morpher.rs
//
// Point-set morpher — interpolates one point set into another of the same
// length over time, with a configurable easing curve. Once a pass completes
// it can bounce back, either indefinitely or for a counted number of passes.
//
// Usage:
//   let mut morpher = PointSetMorpher::new(origin, target)?;
//   morpher.duration = 8.0;
//   morpher.passes = 0;                 // bounce forever
//   morpher.easing = Easing::Smoothstep;
//   morpher.start(clock.now())?;
//   morpher.update(clock.now());        // once per frame
//   draw(morpher.current());

use glam::Vec2;

use crate::easing::{ease_vec2, Easing};
use crate::error::GlideError;

/// Morphs between two point sets of equal length.
#[derive(Debug, Clone)]
pub struct PointSetMorpher {
    origin: Vec<Vec2>,
    target: Vec<Vec2>,
    current: Vec<Vec2>,
    /// Time for one pass, in the caller's time unit.
    pub duration: f32,
    /// Easing curve applied independently to both axes of every point.
    pub easing: Easing,
    /// Number of passes before stopping. 0 bounces forever; a pass is one
    /// half-traversal (origin→target or target→origin).
    pub passes: u32,
    forward: bool,
    running: bool,
    complete: bool,
    passes_current: u32,
    epoch: f32,
    elapsed: f32,
    progress: f32,
}

impl PointSetMorpher {
    /// Create a morpher between `origin` and `target`. Fails with
    /// [`GlideError::PointCountMismatch`] when the set lengths differ.
    pub fn new(origin: Vec<Vec2>, target: Vec<Vec2>) -> Result<Self, GlideError> {
        if origin.len() != target.len() {
            return Err(GlideError::PointCountMismatch {
                origin: origin.len(),
                target: target.len(),
            });
        }
        Ok(Self {
            current: origin.clone(),
            origin,
            target,
            duration: 1000.0,
            easing: Easing::Linear,
            passes: 1,
            forward: true,
            running: false,
            complete: false,
            passes_current: 0,
            epoch: 0.0,
            elapsed: 0.0,
            progress: 0.0,
        })
    }

    // -- Builder methods --

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_passes(mut self, passes: u32) -> Self {
        self.passes = passes;
        self
    }

    // -- Accessors --

    /// The interpolated point set, recomputed on every running update.
    pub fn current(&self) -> &[Vec2] {
        &self.current
    }

    pub fn origin(&self) -> &[Vec2] {
        &self.origin
    }

    pub fn target(&self) -> &[Vec2] {
        &self.target
    }

    /// Whether the morph is progressing (false before `start` and after the
    /// pass budget is spent).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True for the update that finishes a pass, and permanently once the
    /// pass budget is spent.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Current direction: true is origin→target.
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Completed half-traversals.
    pub fn passes_completed(&self) -> u32 {
        self.passes_current
    }

    /// Time into the current pass as of the last update.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Fraction of the current pass, clamped to 0..1.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Replace both point sets. The sets must be of equal length; the next
    /// running update rewrites `current` from them. Swapping sets when a
    /// pass completes chains several shapes into a sequence.
    pub fn set_points(&mut self, origin: Vec<Vec2>, target: Vec<Vec2>) -> Result<(), GlideError> {
        if origin.len() != target.len() {
            return Err(GlideError::PointCountMismatch {
                origin: origin.len(),
                target: target.len(),
            });
        }
        self.origin = origin;
        self.target = target;
        Ok(())
    }

    /// Start (or restart) the morph with `now` as the epoch. Snapshots
    /// `current` from the origin set.
    pub fn start(&mut self, now: f32) -> Result<(), GlideError> {
        if self.duration <= 0.0 {
            return Err(GlideError::NonPositiveDuration {
                duration: self.duration,
            });
        }
        self.epoch = now;
        self.running = true;
        self.complete = false;
        self.current.clear();
        self.current.extend_from_slice(&self.origin);
        Ok(())
    }

    /// Advance the morph to the absolute time `now` (same monotonic clock as
    /// `start`).
    ///
    /// Finishing a pass clamps the progress, counts the pass and flips the
    /// direction for the next one; when the pass budget is spent the morpher
    /// halts and further updates are no-ops. The final update of a pass does
    /// not rewrite `current`.
    pub fn update(&mut self, now: f32) {
        if !self.running && !self.complete {
            // Idle until start().
            return;
        }
        if self.complete && self.passes != 0 && self.passes_current >= self.passes {
            return;
        }

        self.complete = false;
        self.running = true;
        self.elapsed = now - self.epoch;
        self.progress = self.elapsed / self.duration;

        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.passes_current += 1;
            self.complete = true;
            if self.passes > 0 && self.passes_current >= self.passes {
                self.running = false;
            } else {
                self.epoch = now;
                self.forward = !self.forward;
            }
        } else {
            let (from, to) = if self.forward {
                (&self.origin, &self.target)
            } else {
                (&self.target, &self.origin)
            };
            self.current.clear();
            let progress = self.progress;
            let easing = self.easing;
            self.current.extend(
                from.iter()
                    .zip(to.iter())
                    .map(|(&a, &b)| ease_vec2(a, b, progress, easing)),
            );
        }
    }
}

/// Interpolate `origin` toward `target` at ratio `t` with `easing`, applied
/// to each axis independently. The sets must be of equal length.
pub fn morph_points(origin: &[Vec2], target: &[Vec2], t: f32, easing: Easing) -> Vec<Vec2> {
    origin
        .iter()
        .zip(target.iter())
        .map(|(&a, &b)| ease_vec2(a, b, t, easing))
        .collect()
}

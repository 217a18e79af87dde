// animator.rs
//
// Path animator — moves a point at constant speed along a polyline of
// unevenly spaced control points and reconstructs a smoothed tangent/normal
// field along it.
//
// There is no curve interpolation: the point travels linearly between the
// provided points. The segment lengths are precomputed and the traversal is
// parameterized by arc length, which makes the motion speed uniform even for
// outputs of spline samplers that are not evenly spaced.
//
// Usage:
//   let mut animator = PathAnimator::new(points, 5.0)?.with_closed(true);
//   animator.tick(dt)?;                 // once per frame
//   let p = animator.position();
//   let n = animator.normal_interpolated();

use std::cell::RefCell;

use glam::Vec2;

use crate::easing::{lerp_vec2, remap};
use crate::error::GlideError;

/// Recoverable edge cases, buffered for the caller to drain.
///
/// These replace fatal errors for conditions a continuously running visual
/// loop has to survive: the animator substitutes a sane value and records
/// what happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorEvent {
    /// A tangent was requested at the terminal point of an open curve, where
    /// no segment starts. The last segment's tangent was substituted.
    TerminalTangent { index: usize },
    /// A segment index outside the valid range was wrapped on an open curve.
    IndexWrapped { requested: isize, wrapped: usize },
    /// The total path length changed between ticks and the cursor was
    /// rescaled to keep its relative position.
    LengthRescaled { old: f32, new: f32 },
    /// The traversal reached the last point and restarted from the first.
    Restarted,
}

/// Cursor placement on the path, as returned by [`PathAnimator::locate`] and
/// the `seek` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    /// Index of the segment containing the cursor.
    pub segment: usize,
    /// Fractional position within that segment, 0..1.
    pub local_t: f32,
    /// Absolute distance from the path start.
    pub distance: f32,
    /// Interpolated position.
    pub position: Vec2,
}

/// One entry of the sampling API: a position on the path together with its
/// interpolated normal, for placing dependent visuals (markers, hatching,
/// text) along the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Segment the sample falls in.
    pub segment: usize,
    /// Fractional position within that segment.
    pub local_t: f32,
    /// Sample position.
    pub position: Vec2,
    /// Smoothed unit normal at the sample.
    pub normal: Vec2,
}

/// Animates a point along a sequence of provided points at constant speed.
#[derive(Debug)]
pub struct PathAnimator {
    points: Vec<Vec2>,
    /// Total time (or frames — the unit is caller-defined and must match the
    /// `tick` deltas) for one full traversal. A value ≤ 0 freezes the cursor.
    pub duration: f32,
    /// Closed topology: the overshoot past the last point carries over to the
    /// first. The caller provides the closing point (last == first).
    pub closed: bool,
    /// Width of the tangent blending window around interior waypoints, 0..1.
    /// 0 starts blending at each segment midpoint; 1 keeps hard corners.
    pub normal_sharpening: f32,
    /// Rotate tangents clockwise instead of counter-clockwise when deriving
    /// normals.
    pub flip_normals: bool,
    /// Recompute segment lengths on every tick. Only needed when the points
    /// change between ticks (e.g. when chained behind a morpher).
    pub recalculate_always: bool,
    /// When the total length changes, rescale the traveled distance so the
    /// cursor keeps its relative position on the path.
    pub adjust_on_length_change: bool,

    segment_lengths: Vec<f32>,
    accumulated_lengths: Vec<f32>,
    total_length: f32,
    segment: usize,
    local_t: f32,
    distance: f32,
    position: Vec2,
    // Interior mutability so &self queries can record diagnostics. The
    // animator is single-threaded by contract.
    events: RefCell<Vec<AnimatorEvent>>,
}

impl PathAnimator {
    /// Create an animator over `points` with a traversal `duration`.
    /// Fails with [`GlideError::TooFewPoints`] for fewer than 2 points.
    pub fn new(points: Vec<Vec2>, duration: f32) -> Result<Self, GlideError> {
        let mut animator = Self {
            points,
            duration,
            closed: false,
            normal_sharpening: 0.0,
            flip_normals: true,
            recalculate_always: true,
            adjust_on_length_change: true,
            segment_lengths: Vec::new(),
            accumulated_lengths: Vec::new(),
            total_length: 0.0,
            segment: 0,
            local_t: 0.0,
            distance: 0.0,
            position: Vec2::ZERO,
            events: RefCell::new(Vec::new()),
        };
        animator.recalculate_lengths()?;
        animator.position = animator.points[0];
        Ok(animator)
    }

    // -- Builder methods --

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_sharpening(mut self, sharpening: f32) -> Self {
        self.normal_sharpening = sharpening;
        self
    }

    pub fn with_flip_normals(mut self, flip: bool) -> Self {
        self.flip_normals = flip;
        self
    }

    // -- Accessors --

    /// The control points.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Mutable access to the control points. The length caches stay stale
    /// until the next recompute; leave `recalculate_always` on (or call
    /// [`recalculate_lengths`](Self::recalculate_lengths)) when mutating.
    pub fn points_mut(&mut self) -> &mut Vec<Vec2> {
        &mut self.points
    }

    /// Replace the control points with a copy of `points`.
    pub fn set_points(&mut self, points: &[Vec2]) -> Result<(), GlideError> {
        if points.len() < 2 {
            return Err(GlideError::TooFewPoints {
                count: points.len(),
            });
        }
        self.points.clear();
        self.points.extend_from_slice(points);
        self.recalculate_lengths()
    }

    /// Total length of the path.
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Precomputed length of each segment.
    pub fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    /// Running-sum lengths; entry `i` is the distance from the start to
    /// point `i`.
    pub fn accumulated_lengths(&self) -> &[f32] {
        &self.accumulated_lengths
    }

    /// Current interpolated position of the animated point.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Segment index the cursor is currently in.
    pub fn segment(&self) -> usize {
        self.segment
    }

    /// Fractional position within the current segment, 0..1.
    pub fn local_t(&self) -> f32 {
        self.local_t
    }

    /// Absolute distance traveled from the path start.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Fraction of the total length traveled, 0..1.
    pub fn fraction(&self) -> f32 {
        if self.total_length > 0.0 {
            self.distance / self.total_length
        } else {
            0.0
        }
    }

    /// Drain the buffered diagnostic events.
    pub fn drain_events(&self) -> Vec<AnimatorEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    // -- Length tables --

    /// Recompute the per-segment and accumulated lengths and the total.
    /// Call after changing the points via [`points_mut`](Self::points_mut)
    /// with `recalculate_always` off.
    pub fn recalculate_lengths(&mut self) -> Result<(), GlideError> {
        if self.points.len() < 2 {
            return Err(GlideError::TooFewPoints {
                count: self.points.len(),
            });
        }

        self.segment_lengths.clear();
        self.accumulated_lengths.clear();
        self.accumulated_lengths.push(0.0);
        let mut total = 0.0;
        for pair in self.points.windows(2) {
            let d = pair[0].distance(pair[1]);
            total += d;
            self.segment_lengths.push(d);
            self.accumulated_lengths.push(total);
        }
        self.total_length = total;

        // A shrinking point set can strand the cursor past the last segment.
        if self.segment + 1 >= self.accumulated_lengths.len() {
            self.segment = 0;
            self.local_t = 0.0;
            self.distance = 0.0;
        }
        Ok(())
    }

    // -- Traversal --

    /// Advance the animation by `delta` units of the caller's time base and
    /// recompute the current position.
    ///
    /// The step size is `delta * total_length / duration`, which yields
    /// constant linear speed regardless of point spacing. Reaching the last
    /// point restarts the traversal from the first — for an open curve this
    /// is a deliberate jump back to the start, not a stop.
    pub fn tick(&mut self, delta: f32) -> Result<(), GlideError> {
        if self.recalculate_always {
            let old_length = self.total_length;
            self.recalculate_lengths()?;
            if old_length != self.total_length && self.adjust_on_length_change {
                let fraction = if old_length > 0.0 {
                    self.distance / old_length
                } else {
                    0.0
                };
                self.push_event(AnimatorEvent::LengthRescaled {
                    old: old_length,
                    new: self.total_length,
                });
                log::debug!(
                    "path length changed {:.2} -> {:.2}, cursor rescaled",
                    old_length,
                    self.total_length
                );
                self.place_cursor(fraction.rem_euclid(1.0));
            }
        }

        if self.total_length <= 0.0 {
            // Fully degenerate path: every point coincides. Pin the cursor
            // instead of spinning the advance loop on zero-length segments.
            self.segment = 0;
            self.local_t = 0.0;
            self.distance = 0.0;
            self.position = self.points[0];
            return Ok(());
        }

        if self.duration > 0.0 {
            self.distance += delta * self.total_length / self.duration;
        }

        // Advance the segment index past every boundary the step crossed.
        let last = self.points.len() - 1;
        while self.distance > self.accumulated_lengths[self.segment + 1] {
            self.segment += 1;

            if self.distance > self.total_length {
                if self.closed {
                    // Carry the overshoot over to the first segment.
                    self.segment = 0;
                    self.distance -= self.total_length;
                } else {
                    // Past the end of an open curve: clamp to the final
                    // point; the restart below takes it from there.
                    self.segment = last;
                    break;
                }
            }
        }

        if self.distance <= self.total_length {
            let segment_length = self.segment_lengths[self.segment];
            self.local_t = if segment_length > 0.0 {
                (self.distance - self.accumulated_lengths[self.segment]) / segment_length
            } else {
                0.0
            };
        }

        // The second-to-last point starts the last segment; reaching the
        // last point restarts the traversal.
        if self.segment >= last {
            self.segment = 0;
            self.local_t = 0.0;
            self.distance = 0.0;
            self.push_event(AnimatorEvent::Restarted);
            log::debug!("traversal restarted from the first point");
        }

        self.local_t = self.local_t.clamp(0.0, 1.0);
        self.position = lerp_vec2(
            self.points[self.segment],
            self.points[self.segment + 1],
            self.local_t,
        );
        Ok(())
    }

    /// Resolve a global fraction of the total length into a cursor state.
    ///
    /// Linear scan of the accumulated lengths — O(n), fine for discrete
    /// sampling but not meant for per-tick use. `fraction` is clamped to
    /// [0, 1]; at exactly 1 the last segment is returned with `local_t` 1.
    pub fn locate(&self, fraction: f32) -> CursorState {
        let fraction = fraction.clamp(0.0, 1.0);

        if fraction < 1.0 {
            let distance = fraction * self.total_length;
            let mut segment = 0;
            while self.accumulated_lengths[segment] < distance {
                segment += 1;
            }
            segment = segment.saturating_sub(1);

            let segment_length = self.segment_lengths[segment];
            let local_t = if segment_length > 0.0 {
                (distance - self.accumulated_lengths[segment]) / segment_length
            } else {
                0.0
            };
            CursorState {
                segment,
                local_t,
                distance,
                position: lerp_vec2(self.points[segment], self.points[segment + 1], local_t),
            }
        } else {
            let segment = self.points.len() - 2;
            CursorState {
                segment,
                local_t: 1.0,
                distance: self.total_length,
                position: self.points[segment + 1],
            }
        }
    }

    /// Place the cursor at a global fraction of the total length. Negative
    /// fractions wrap backwards from the end; fractions ≥ 1 wrap around.
    pub fn seek(&mut self, fraction: f32) -> Result<CursorState, GlideError> {
        let mut fraction = fraction;
        while fraction < 0.0 {
            fraction += 1.0;
        }
        self.recalculate_lengths()?;
        Ok(self.place_cursor(fraction % 1.0))
    }

    /// Place the cursor at an absolute distance from the start. Negative
    /// distances wrap backwards from the end.
    pub fn seek_distance(&mut self, distance: f32) -> Result<CursorState, GlideError> {
        self.recalculate_lengths()?;
        let mut distance = distance;
        while distance < 0.0 {
            distance += self.total_length;
        }
        let fraction = if self.total_length > 0.0 {
            (distance / self.total_length) % 1.0
        } else {
            0.0
        };
        Ok(self.place_cursor(fraction))
    }

    /// Place the cursor at the start of a point index. Indices wrap modulo
    /// the segment count in both directions.
    pub fn seek_index(&mut self, index: isize) -> Result<CursorState, GlideError> {
        self.recalculate_lengths()?;
        let wrapped = self.wrap_segment(index);
        let fraction = if self.total_length > 0.0 {
            (self.accumulated_lengths[wrapped] / self.total_length) % 1.0
        } else {
            0.0
        };
        Ok(self.place_cursor(fraction))
    }

    // -- Tangents and normals --

    /// Normalized direction of segment `segment` (`points[i+1] − points[i]`).
    ///
    /// On an open curve the terminal point starts no segment; the last
    /// segment's tangent is substituted and a [`AnimatorEvent::TerminalTangent`]
    /// is recorded. On a closed curve indices wrap modulo the segment count
    /// (the duplicated closing point is not a segment of its own).
    pub fn tangent_for_segment(&self, segment: usize) -> Vec2 {
        self.tangent_signed(segment as isize)
    }

    /// Segment normal: the tangent rotated 90° per `flip_normals`.
    pub fn normal_for_segment(&self, segment: usize) -> Vec2 {
        self.rotate_to_normal(self.tangent_for_segment(segment))
    }

    /// Tangent of the segment the cursor is currently in.
    pub fn tangent(&self) -> Vec2 {
        self.tangent_for_segment(self.segment.min(self.points.len() - 2))
    }

    /// Normal of the segment the cursor is currently in.
    pub fn normal(&self) -> Vec2 {
        self.rotate_to_normal(self.tangent())
    }

    /// Three-segment blended tangent at the cursor.
    pub fn tangent_interpolated(&self) -> Vec2 {
        self.tangent_interpolated_at(self.segment, self.local_t)
    }

    /// Three-segment blended normal at the cursor.
    pub fn normal_interpolated(&self) -> Vec2 {
        self.rotate_to_normal(self.tangent_interpolated())
    }

    /// Tangent at `local_t` within `segment`, blended across the previous
    /// and next segments to avoid faceted normals at waypoints.
    ///
    /// The blending window is `k = 0.5·(1 − normal_sharpening)` on each side
    /// of the waypoint: with sharpening 0 the blend spans from each segment
    /// midpoint, with sharpening 1 the per-segment tangent is returned
    /// unblended. At open-curve boundaries the missing neighbor tangent is
    /// substituted with the boundary tangent itself.
    pub fn tangent_interpolated_at(&self, segment: usize, local_t: f32) -> Vec2 {
        let last = self.points.len() - 1;
        let (before, here, after);

        if self.closed {
            before = self.tangent_signed(segment as isize - 1);
            here = self.tangent_signed(segment as isize);
            after = self.tangent_signed(segment as isize + 1);
        } else if segment == 0 {
            // No previous segment to blend from.
            here = self.tangent_signed(0);
            before = here;
            after = self.tangent_signed(1);
        } else if segment >= last - 1 {
            // No next segment to blend into.
            before = self.tangent_signed(segment as isize - 1);
            here = self.tangent_signed(segment as isize);
            after = here;
        } else {
            before = self.tangent_signed(segment as isize - 1);
            here = self.tangent_signed(segment as isize);
            after = self.tangent_signed(segment as isize + 1);
        }

        let k = remap(self.normal_sharpening, 0.0, 1.0, 0.5, 0.0);
        if local_t < k {
            let f = remap(local_t, 0.0, k, 0.5, 1.0);
            lerp_vec2(before, here, f).normalize_or_zero()
        } else if local_t > 1.0 - k {
            let f = remap(local_t, 1.0 - k, 1.0, 0.0, 0.5);
            lerp_vec2(here, after, f).normalize_or_zero()
        } else {
            here
        }
    }

    /// Blended normal at `local_t` within `segment`.
    pub fn normal_interpolated_at(&self, segment: usize, local_t: f32) -> Vec2 {
        self.rotate_to_normal(self.tangent_interpolated_at(segment, local_t))
    }

    // -- Sampling --

    /// Sample `count` evenly spaced positions+normals over the whole path.
    /// An open curve includes both endpoints; a closed one stops short of
    /// the duplicate closing point.
    pub fn sample_spaced(&self, count: usize) -> Vec<PathSample> {
        let mut samples = Vec::with_capacity(count);
        for i in 0..count {
            let fraction = if self.closed {
                i as f32 / count as f32
            } else if count > 1 {
                i as f32 / (count as f32 - 1.0)
            } else {
                0.0
            };
            let cursor = self.locate(fraction);
            samples.push(PathSample {
                segment: cursor.segment,
                local_t: cursor.local_t,
                position: cursor.position,
                normal: self.normal_interpolated_at(cursor.segment, cursor.local_t),
            });
        }
        samples
    }

    /// Sample `per_segment` positions+normals within every segment.
    ///
    /// An odd count includes the segment endpoints (skipping each boundary's
    /// duplicate, which doubles as the next segment's first sample); an even
    /// count stays strictly inside the segment; 1 samples the midpoint.
    pub fn sample_per_segment(&self, per_segment: usize) -> Vec<PathSample> {
        if per_segment == 0 {
            return Vec::new();
        }

        let mut local_ts = Vec::with_capacity(per_segment);
        let even = per_segment % 2 == 0;
        if even {
            let step = 1.0 / (per_segment as f32 + 1.0);
            for i in 1..=per_segment {
                local_ts.push(i as f32 * step);
            }
        } else if per_segment == 1 {
            local_ts.push(0.5);
        } else {
            let step = 1.0 / (per_segment as f32 - 1.0);
            for i in 0..per_segment {
                local_ts.push(i as f32 * step);
            }
        }

        let mut samples = Vec::new();
        for segment in 0..self.points.len() - 1 {
            for (k, &local_t) in local_ts.iter().enumerate() {
                if !even && k == local_ts.len() - 1 && k != 0 {
                    // The endpoint doubles as the next segment's first sample.
                    continue;
                }
                samples.push(PathSample {
                    segment,
                    local_t,
                    position: lerp_vec2(
                        self.points[segment],
                        self.points[segment + 1],
                        local_t,
                    ),
                    normal: self.normal_interpolated_at(segment, local_t),
                });
            }
        }
        samples
    }

    // -- Internals --

    fn place_cursor(&mut self, fraction: f32) -> CursorState {
        let state = self.locate(fraction);
        self.segment = state.segment;
        self.local_t = state.local_t;
        self.distance = state.distance;
        self.position = state.position;
        state
    }

    fn tangent_signed(&self, segment: isize) -> Vec2 {
        let last = self.points.len() - 1;
        if !self.closed && segment == last as isize {
            let tangent = (self.points[last] - self.points[last - 1]).normalize_or_zero();
            self.push_event(AnimatorEvent::TerminalTangent { index: last });
            return tangent;
        }

        let wrapped = self.wrap_segment(segment);
        if wrapped as isize != segment && !self.closed {
            self.push_event(AnimatorEvent::IndexWrapped {
                requested: segment,
                wrapped,
            });
        }
        (self.points[wrapped + 1] - self.points[wrapped]).normalize_or_zero()
    }

    /// Wraps an index over the segment range. The last point does not start
    /// a segment of its own.
    fn wrap_segment(&self, index: isize) -> usize {
        index.rem_euclid(self.points.len() as isize - 1) as usize
    }

    fn rotate_to_normal(&self, tangent: Vec2) -> Vec2 {
        if self.flip_normals {
            Vec2::new(tangent.y, -tangent.x)
        } else {
            Vec2::new(-tangent.y, tangent.x)
        }
    }

    fn push_event(&self, event: AnimatorEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight_line() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
        ]
    }

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.0),
        ]
    }

    #[test]
    fn rejects_fewer_than_two_points() {
        let result = PathAnimator::new(vec![Vec2::ZERO], 1.0);
        assert_eq!(result.unwrap_err(), GlideError::TooFewPoints { count: 1 });
    }

    #[test]
    fn length_tables_are_consistent() {
        let animator = PathAnimator::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(3.0, 4.0),
                Vec2::new(3.0, 10.0),
            ],
            1.0,
        )
        .unwrap();

        let segments = animator.segment_lengths();
        let accumulated = animator.accumulated_lengths();
        assert_eq!(accumulated[0], 0.0);
        let sum: f32 = segments.iter().sum();
        assert_relative_eq!(sum, animator.total_length(), epsilon = 1e-5);
        assert_relative_eq!(
            accumulated[accumulated.len() - 1],
            animator.total_length(),
            epsilon = 1e-5
        );
        for i in 1..accumulated.len() {
            assert_relative_eq!(
                accumulated[i],
                accumulated[i - 1] + segments[i - 1],
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn half_duration_reaches_half_length() {
        let mut animator = PathAnimator::new(straight_line(), 10.0).unwrap();
        animator.tick(5.0).unwrap();
        assert_relative_eq!(animator.position().x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(animator.position().y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn closed_square_returns_to_start_after_one_duration() {
        let mut animator = PathAnimator::new(unit_square(), 8.0).unwrap().with_closed(true);
        for _ in 0..8 {
            animator.tick(1.0).unwrap();
        }
        assert_relative_eq!(animator.position().x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(animator.position().y, 0.0, epsilon = 1e-4);

        // One more tick wraps the index without error and carries the
        // overshoot into the first segment.
        animator.tick(1.0).unwrap();
        assert_eq!(animator.segment(), 0);
        assert_relative_eq!(animator.position().x, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn zero_duration_freezes_the_cursor() {
        let mut animator = PathAnimator::new(straight_line(), 0.0).unwrap();
        animator.tick(5.0).unwrap();
        assert_eq!(animator.position(), Vec2::new(0.0, 0.0));
        assert_eq!(animator.distance(), 0.0);
    }

    #[test]
    fn locate_handles_uneven_spacing() {
        // Half the total length sits deep inside the long second segment.
        let animator = PathAnimator::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(10.0, 0.0),
            ],
            1.0,
        )
        .unwrap();
        let cursor = animator.locate(0.5);
        assert_eq!(cursor.segment, 1);
        assert_relative_eq!(cursor.position.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(cursor.local_t, 4.0 / 9.0, epsilon = 1e-4);
    }

    #[test]
    fn locate_full_fraction_is_the_last_segment() {
        let animator = PathAnimator::new(unit_square(), 1.0).unwrap();
        let cursor = animator.locate(1.0);
        assert_eq!(cursor.segment, 3);
        assert_eq!(cursor.local_t, 1.0);
        assert_relative_eq!(cursor.distance, animator.total_length(), epsilon = 1e-5);
    }

    #[test]
    fn degenerate_segment_yields_local_t_zero() {
        let animator = PathAnimator::new(
            vec![Vec2::ZERO, Vec2::ZERO, Vec2::new(10.0, 0.0)],
            1.0,
        )
        .unwrap();
        let cursor = animator.locate(0.0);
        assert_eq!(cursor.local_t, 0.0);
        assert!(cursor.position.x.is_finite());
    }

    #[test]
    fn collapsed_path_pins_the_cursor() {
        let mut animator = PathAnimator::new(straight_line(), 10.0).unwrap();
        animator.tick(5.0).unwrap();
        for p in animator.points_mut() {
            *p = Vec2::new(3.0, 3.0);
        }
        animator.tick(1.0).unwrap();
        assert_eq!(animator.position(), Vec2::new(3.0, 3.0));
        assert_eq!(animator.distance(), 0.0);
    }

    #[test]
    fn open_curve_restarts_past_the_end() {
        let mut animator =
            PathAnimator::new(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)], 1.0).unwrap();
        animator.tick(2.0).unwrap();
        assert_eq!(animator.segment(), 0);
        assert_eq!(animator.distance(), 0.0);
        assert_eq!(animator.position(), Vec2::ZERO);
        assert!(animator
            .drain_events()
            .contains(&AnimatorEvent::Restarted));
    }

    #[test]
    fn terminal_tangent_is_substituted_on_open_curves() {
        let animator =
            PathAnimator::new(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)], 1.0).unwrap();
        let tangent = animator.tangent_for_segment(1);
        assert_relative_eq!(tangent.x, 1.0, epsilon = 1e-5);
        assert_eq!(
            animator.drain_events(),
            vec![AnimatorEvent::TerminalTangent { index: 1 }]
        );
    }

    #[test]
    fn closed_curve_tangent_wraps() {
        let animator = PathAnimator::new(unit_square(), 1.0).unwrap().with_closed(true);
        // Segment 4 does not exist; a closed curve wraps it onto segment 0.
        let wrapped = animator.tangent_for_segment(4);
        let first = animator.tangent_for_segment(0);
        assert_relative_eq!(wrapped.x, first.x, epsilon = 1e-5);
        assert_relative_eq!(wrapped.y, first.y, epsilon = 1e-5);
    }

    #[test]
    fn full_sharpening_disables_blending() {
        let mut animator = PathAnimator::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
            ],
            1.0,
        )
        .unwrap();
        animator.normal_sharpening = 1.0;
        let raw = animator.tangent_for_segment(0);
        for t in [0.1, 0.5, 0.9] {
            let blended = animator.tangent_interpolated_at(0, t);
            assert_relative_eq!(blended.x, raw.x, epsilon = 1e-5);
            assert_relative_eq!(blended.y, raw.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn zero_sharpening_blends_toward_the_corner() {
        let animator = PathAnimator::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
            ],
            1.0,
        )
        .unwrap();
        // Past the midpoint of the first segment the tangent starts turning
        // toward the second segment's direction.
        let blended = animator.tangent_interpolated_at(0, 0.9);
        assert!(blended.x > 0.0 && blended.y > 0.0);
        assert_relative_eq!(blended.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn flip_normals_mirrors_the_rotation() {
        let mut animator = PathAnimator::new(straight_line(), 1.0).unwrap();
        animator.flip_normals = true;
        assert_relative_eq!(animator.normal_for_segment(0).y, -1.0, epsilon = 1e-5);
        animator.flip_normals = false;
        assert_relative_eq!(animator.normal_for_segment(0).y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn length_change_keeps_relative_position() {
        let mut animator = PathAnimator::new(straight_line(), 10.0).unwrap();
        animator.tick(5.0).unwrap(); // halfway, distance 10 of 20
        for p in animator.points_mut() {
            *p *= 2.0;
        }
        animator.tick(0.0).unwrap();
        assert_relative_eq!(animator.distance(), 20.0, epsilon = 1e-4);
        assert_relative_eq!(animator.position().x, 20.0, epsilon = 1e-4);
        assert!(animator
            .drain_events()
            .iter()
            .any(|e| matches!(e, AnimatorEvent::LengthRescaled { .. })));
    }

    #[test]
    fn seek_wraps_negative_fractions() {
        let mut animator = PathAnimator::new(straight_line(), 1.0).unwrap();
        let back = animator.seek(-0.25).unwrap();
        let forward = animator.seek(0.75).unwrap();
        assert_relative_eq!(back.position.x, forward.position.x, epsilon = 1e-5);
        assert_relative_eq!(back.distance, 15.0, epsilon = 1e-4);
    }

    #[test]
    fn seek_index_lands_on_that_point() {
        let mut animator = PathAnimator::new(straight_line(), 1.0).unwrap();
        let cursor = animator.seek_index(1).unwrap();
        assert_relative_eq!(cursor.position.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(cursor.distance, 10.0, epsilon = 1e-5);

        // Negative indices wrap over the segment range: -1 is point 1 here.
        let wrapped = animator.seek_index(-1).unwrap();
        assert_relative_eq!(wrapped.position.x, 10.0, epsilon = 1e-5);
    }

    #[test]
    fn set_points_resets_a_stranded_cursor() {
        let mut animator = PathAnimator::new(unit_square(), 8.0).unwrap().with_closed(true);
        animator.tick(5.0).unwrap();
        animator
            .set_points(&[Vec2::ZERO, Vec2::new(1.0, 0.0)])
            .unwrap();
        animator.tick(0.0).unwrap();
        assert!(animator.segment() < 1);
    }

    #[test]
    fn sample_spaced_covers_open_endpoints() {
        let animator = PathAnimator::new(straight_line(), 1.0).unwrap();
        let samples = animator.sample_spaced(5);
        assert_eq!(samples.len(), 5);
        assert_relative_eq!(samples[0].position.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(samples[4].position.x, 20.0, epsilon = 1e-5);
    }

    #[test]
    fn sample_spaced_closed_skips_the_duplicate_point() {
        let animator = PathAnimator::new(unit_square(), 1.0).unwrap().with_closed(true);
        let samples = animator.sample_spaced(4);
        assert_eq!(samples.len(), 4);
        // i/n spacing: the last sample is 3/4 of the way around, not at the
        // closing point.
        assert_relative_eq!(samples[3].position.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(samples[3].position.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn sample_per_segment_counts() {
        let animator = PathAnimator::new(straight_line(), 1.0).unwrap();
        // Odd: endpoints included, boundary duplicate skipped.
        assert_eq!(animator.sample_per_segment(3).len(), 4);
        // Single: midpoint only.
        let singles = animator.sample_per_segment(1);
        assert_eq!(singles.len(), 2);
        assert_relative_eq!(singles[0].local_t, 0.5, epsilon = 1e-5);
        // Even: interior points only, nothing skipped.
        assert_eq!(animator.sample_per_segment(2).len(), 4);
        assert_eq!(animator.sample_per_segment(0).len(), 0);
    }
}

//! Point-sequence helpers: in-place transforms, shape generators and a few
//! preset polylines for feeding the animator and morpher.
//!
//! Transforms operate on `&mut [Vec2]` in place; generators return fresh
//! `Vec<Vec2>`. Closed presets duplicate their first point at the end, which
//! is what the animator expects for a closed loop.

use std::f32::consts::TAU;

use glam::Vec2;

// ── In-place transforms ──────────────────────────────────────────────────

/// Scale every point uniformly.
pub fn scale_points(points: &mut [Vec2], factor: f32) {
    for p in points.iter_mut() {
        *p *= factor;
    }
}

/// Scale every point with separate x/y factors.
pub fn scale_points_xy(points: &mut [Vec2], factor: Vec2) {
    for p in points.iter_mut() {
        *p *= factor;
    }
}

/// Translate every point.
pub fn offset_points(points: &mut [Vec2], offset: Vec2) {
    for p in points.iter_mut() {
        *p += offset;
    }
}

/// Rotate every point around the origin by `angle` radians.
pub fn rotate_points(points: &mut [Vec2], angle: f32) {
    let rotation = Vec2::from_angle(angle);
    for p in points.iter_mut() {
        *p = rotation.rotate(*p);
    }
}

/// Reflect every point through `center`.
pub fn reflect_points_about(points: &mut [Vec2], center: Vec2) {
    for p in points.iter_mut() {
        *p = 2.0 * center - *p;
    }
}

/// Normalize so the largest bounding-box dimension spans 1, centered on the
/// origin. No-op for an empty slice.
pub fn normalize_points(points: &mut [Vec2]) {
    let Some(&first) = points.first() else {
        return;
    };
    let mut min = first;
    let mut max = first;
    for &p in points.iter() {
        min = min.min(p);
        max = max.max(p);
    }

    let largest_range = (max.x - min.x).max(max.y - min.y);
    if largest_range <= 0.0 {
        return;
    }

    let center = (max + min) / largest_range / 2.0;
    for p in points.iter_mut() {
        *p = *p / largest_range - center;
    }
}

/// Geometric center: the average of all points.
pub fn center_of(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

/// Bounding-box midpoint.
pub fn midpoint_of(points: &[Vec2]) -> Vec2 {
    let Some(&first) = points.first() else {
        return Vec2::ZERO;
    };
    let mut min = first;
    let mut max = first;
    for &p in points.iter() {
        min = min.min(p);
        max = max.max(p);
    }
    (min + max) / 2.0
}

/// Translate so the bounding-box midpoint lands on `center`.
pub fn center_points_at(points: &mut [Vec2], center: Vec2) {
    let shift = center - midpoint_of(points);
    offset_points(points, shift);
}

// ── Generators ───────────────────────────────────────────────────────────

/// Regular polygon vertices. Angles are fractions of a full turn; the first
/// vertex sits at `(radius, 0)` for a zero offset. The loop is not closed.
pub fn polygon_points(n_sides: usize, radius: f32, angle_offset: f32) -> Vec<Vec2> {
    (0..n_sides)
        .map(|i| {
            let angle = (i as f32 / n_sides as f32 + angle_offset) * TAU;
            Vec2::from_angle(angle) * radius
        })
        .collect()
}

/// Points along a clockwise arc. `arc_width` is a fraction of a full turn
/// (negative for counter-clockwise), `angle_offset` the starting fraction.
pub fn arc_points(count: usize, arc_width: f32, radius: f32, angle_offset: f32) -> Vec<Vec2> {
    if count < 2 {
        return Vec::new();
    }
    let increment = arc_width * TAU / (count as f32 - 1.0);
    (0..count)
        .map(|i| {
            let angle = angle_offset * TAU + i as f32 * increment;
            Vec2::from_angle(angle) * radius
        })
        .collect()
}

/// Points forming an Archimedean spiral: radius `a + b·θ` sampled at fixed
/// angular steps.
pub fn archimedean_spiral_points(a: f32, b: f32, count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let theta = i as f32 * (TAU / 16.0);
            Vec2::from_angle(theta) * (a + b * theta)
        })
        .collect()
}

/// Unit square with extra points flanking each corner at fraction `k` of the
/// side length, for tighter local normal smoothing. Closed loop.
pub fn square_with_corner_points(k: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(k, 0.0),
        Vec2::new(1.0 - k, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, k),
        Vec2::new(1.0, 1.0 - k),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0 - k, 1.0),
        Vec2::new(k, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, 1.0 - k),
        Vec2::new(0.0, k),
        Vec2::new(0.0, 0.0),
    ]
}

// ── Presets ──────────────────────────────────────────────────────────────

/// Origin-centered unit square, closed.
pub fn square_points() -> Vec<Vec2> {
    vec![
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(-0.5, -0.5),
    ]
}

/// Origin-centered unit square with points flanking each corner at 90% of
/// the half-side, closed.
pub fn square_with_flanked_corners() -> Vec<Vec2> {
    vec![
        Vec2::new(-0.5, -0.5),
        Vec2::new(-0.4, -0.5),
        Vec2::new(0.4, -0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, -0.4),
        Vec2::new(0.5, 0.4),
        Vec2::new(0.5, 0.5),
        Vec2::new(0.4, 0.5),
        Vec2::new(-0.4, 0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(-0.5, 0.4),
        Vec2::new(-0.5, -0.4),
        Vec2::new(-0.5, -0.5),
    ]
}

/// Regular pentagon, closed.
pub fn pentagon_points() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, -1.0),
        Vec2::new(0.951, -0.309),
        Vec2::new(0.588, 0.809),
        Vec2::new(-0.588, 0.809),
        Vec2::new(-0.951, -0.309),
        Vec2::new(0.0, -1.0),
    ]
}

/// Regular hexagon, closed.
pub fn hexagon_points() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, -1.0),
        Vec2::new(0.866, -0.5),
        Vec2::new(0.866, 0.5),
        Vec2::new(0.0, 1.0),
        Vec2::new(-0.866, 0.5),
        Vec2::new(-0.866, -0.5),
        Vec2::new(0.0, -1.0),
    ]
}

/// Four-pointed star, closed.
pub fn four_star_points() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, -1.0),
        Vec2::new(0.309, -0.309),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.309, 0.309),
        Vec2::new(0.0, 1.0),
        Vec2::new(-0.309, 0.309),
        Vec2::new(-1.0, 0.0),
        Vec2::new(-0.309, -0.309),
        Vec2::new(0.0, -1.0),
    ]
}

/// Five-pointed star, closed.
pub fn five_star_points() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, -1.0),
        Vec2::new(0.2245, -0.309),
        Vec2::new(0.951, -0.309),
        Vec2::new(0.3633, 0.118),
        Vec2::new(0.5878, 0.809),
        Vec2::new(0.0, 0.382),
        Vec2::new(-0.5878, 0.809),
        Vec2::new(-0.3633, 0.118),
        Vec2::new(-0.951, -0.309),
        Vec2::new(-0.2245, -0.309),
        Vec2::new(0.0, -1.0),
    ]
}

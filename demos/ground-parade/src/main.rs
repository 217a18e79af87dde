// ground-parade
//
// Frame-driver demo: a marker rides a closed square at constant speed while
// a second path morphs between a five-pointed star and a box. The morpher
// output is fed into the second animator every frame, so its rider keeps
// constant speed on a path whose shape (and length) changes under it.
//
// Run with RUST_LOG=debug for the animators' internal notes.

use glam::Vec2;
use glide_engine::{geometry, Easing, FrameClock, GlideError, PathAnimator, PointSetMorpher};

const FRAMES: u32 = 600;
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> Result<(), GlideError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A square track, traversed once every 10 seconds.
    let mut square = geometry::square_points();
    geometry::scale_points(&mut square, 300.0);
    geometry::offset_points(&mut square, Vec2::new(400.0, 400.0));
    let mut rider = PathAnimator::new(square, 10.0)?.with_closed(true);

    // The morphing ground: five-star ↔ box, eased, bouncing forever. The
    // sets must have the same cardinality, so the box carries extra side
    // points to pair up with the star's eleven.
    let mut ground_a = geometry::five_star_points();
    let mut ground_b = eleven_point_box();
    for ground in [&mut ground_a, &mut ground_b] {
        geometry::scale_points(ground, 250.0);
        geometry::offset_points(ground, Vec2::new(400.0, 400.0));
    }
    let mut ground = PointSetMorpher::new(ground_a.clone(), ground_b)?
        .with_duration(5.0)
        .with_passes(0)
        .with_easing(Easing::Smoothstep);

    let mut walker = PathAnimator::new(ground_a, 12.0)?
        .with_closed(true)
        .with_flip_normals(false)
        .with_sharpening(0.25);

    let mut clock = FrameClock::new();
    ground.start(clock.now())?;

    for frame in 0..FRAMES {
        let dt = clock.advance(FRAME_DT);

        ground.update(clock.now());
        walker.set_points(ground.current())?;
        walker.tick(dt)?;
        rider.tick(dt)?;

        if frame % 60 == 0 {
            let n = walker.normal_interpolated();
            log::info!(
                "t={:>5.2}s rider=({:>6.1},{:>6.1}) walker=({:>6.1},{:>6.1}) normal=({:>5.2},{:>5.2}) pass={} {}",
                clock.now(),
                rider.position().x,
                rider.position().y,
                walker.position().x,
                walker.position().y,
                n.x,
                n.y,
                ground.passes_completed(),
                if ground.is_forward() { "→" } else { "←" },
            );

            // Sparse decoration placement along the morphing ground.
            for sample in walker.sample_spaced(6) {
                log::debug!(
                    "  marker seg={} t={:.2} at ({:>6.1},{:>6.1}) n=({:>5.2},{:>5.2})",
                    sample.segment,
                    sample.local_t,
                    sample.position.x,
                    sample.position.y,
                    sample.normal.x,
                    sample.normal.y,
                );
            }
        }
    }

    for event in walker.drain_events() {
        log::debug!("walker event: {:?}", event);
    }
    for event in rider.drain_events() {
        log::debug!("rider event: {:?}", event);
    }

    log::info!(
        "done: {} frames, rider at ({:.1},{:.1}), ground pass {} of ∞",
        FRAMES,
        rider.position().x,
        rider.position().y,
        ground.passes_completed(),
    );
    Ok(())
}

/// Unit box with midpoints and quarter points mixed in so it pairs up with
/// the eleven points of the five-star preset.
fn eleven_point_box() -> Vec<Vec2> {
    vec![
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.4, -0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, -0.4),
        Vec2::new(0.5, 0.0),
        Vec2::new(0.5, 0.5),
        Vec2::new(0.0, 0.5),
        Vec2::new(-0.4, 0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(-0.5, 0.0),
        Vec2::new(-0.5, -0.5),
    ]
}

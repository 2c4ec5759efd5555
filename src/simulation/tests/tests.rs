use super::*;
use crate::render::{DrawCommand, DrawList};
use crate::systems::particle::{MAX_LIFE, MIN_LIFE};

fn config(count: usize) -> FlowFieldConfig {
    FlowFieldConfig {
        particle_count: count,
        ..FlowFieldConfig::default()
    }
}

fn assert_in_bounds(field: &FlowField) {
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x < field.width(), "x out of bounds: {}", p.pos.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < field.height(), "y out of bounds: {}", p.pos.y);
        assert!(p.life > MIN_LIFE && p.life < MAX_LIFE);
        assert!(p.age as f64 <= p.life);
    }
}

#[test]
fn new_field_spawns_configured_pool() {
    let field = FlowField::with_seed(800.0, 600.0, FlowFieldConfig::default(), 1);
    assert_eq!(field.particle_count(), 600);
    assert_eq!(field.pointer(), POINTER_SENTINEL);
    assert!(!field.is_pointer_tracked());
    assert_in_bounds(&field);
    assert!(field.particles().iter().all(|p| p.age == 0));
}

#[test]
fn particles_stay_in_bounds_under_pointer_stress() {
    let mut field = FlowField::with_seed(320.0, 240.0, config(200), 42);
    for i in 0..2000u32 {
        // Sweep the pointer across the surface, including the edges
        let t = i as f64 * 0.37;
        field.on_pointer_move((t * 13.0) % 330.0 - 5.0, (t * 7.0) % 250.0 - 5.0);
        field.step();
        assert_in_bounds(&field);
    }
    assert_eq!(field.frame(), 2000);
}

#[test]
fn pointer_leave_restores_sentinel() {
    let mut field = FlowField::with_seed(100.0, 100.0, config(1), 2);
    field.on_pointer_move(50.0, 40.0);
    assert!(field.is_pointer_tracked());
    assert_eq!(field.pointer(), Vec2::new(50.0, 40.0));

    field.on_pointer_leave();
    assert_eq!(field.pointer(), POINTER_SENTINEL);

    field.on_pointer_move(f64::NAN, 3.0);
    assert_eq!(field.pointer(), POINTER_SENTINEL);
}

#[test]
fn resize_respawns_every_particle() {
    let mut field = FlowField::with_seed(800.0, 600.0, config(50), 7);
    for _ in 0..60 {
        field.step();
    }
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
    assert!(field.particles().iter().any(|p| p.age > 0));

    field.on_resize(400.0, 300.0);

    assert_eq!(field.width(), 400.0);
    assert_eq!(field.height(), 300.0);
    assert_eq!(field.particle_count(), 50);
    assert!(field.particles().iter().all(|p| p.age == 0));
    assert!(field.particles().iter().all(|p| p.vel == Vec2::ZERO));
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
    assert_ne!(before, after);
    assert_in_bounds(&field);
}

#[test]
fn degenerate_container_is_not_fatal() {
    let mut field = FlowField::with_seed(0.0, -5.0, config(10), 3);
    assert_eq!(field.width(), 0.0);
    assert_eq!(field.height(), 0.0);

    let mut surface = DrawList::new();
    for _ in 0..500 {
        field.frame_on(&mut surface);
    }
    assert!(field.particles().iter().all(|p| p.pos == Vec2::ZERO));
}

#[test]
fn frame_paints_trail_then_every_particle() {
    let mut field = FlowField::with_seed(800.0, 600.0, config(3), 5);
    let mut surface = DrawList::new();

    field.frame_on(&mut surface);

    let commands = surface.commands();
    assert_eq!(commands.len(), 4);
    assert_eq!(
        commands[0],
        DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
            color: TRAIL_COLOR.to_string(),
            alpha: 0.15,
        }
    );
    for (command, particle) in commands[1..].iter().zip(field.particles()) {
        match command {
            DrawCommand::FillRect { x, y, color, alpha, .. } => {
                assert_eq!((*x, *y), (particle.pos.x, particle.pos.y));
                assert_eq!(color, "#6366f1");
                assert_eq!(*alpha, particle.alpha());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

#[test]
fn render_does_not_advance() {
    let field = FlowField::with_seed(200.0, 200.0, config(4), 8);
    let before = field.particles().to_vec();
    let mut surface = DrawList::new();

    field.render(&mut surface);

    assert_eq!(field.particles(), &before[..]);
    assert_eq!(field.frame(), 0);
    assert_eq!(surface.fills().count(), 5);
}

#[test]
fn perf_stats_are_zero_until_enabled() {
    let mut field = FlowField::with_seed(200.0, 200.0, config(20), 9);
    field.step();
    assert_eq!(field.perf_stats(), FrameStats::default());

    field.enable_perf_metrics(true);
    field.step();
    let stats = field.perf_stats();
    assert_eq!(stats.particles_stepped(), 20);
    assert_eq!(stats.frame(), 2);
    assert!(stats.step_ms() >= 0.0);

    field.enable_perf_metrics(false);
    assert_eq!(field.perf_stats(), FrameStats::default());
}

#[test]
fn perf_stats_count_respawns() {
    let mut field = FlowField::with_seed(200.0, 200.0, config(30), 10);
    field.enable_perf_metrics(true);
    let mut respawns = 0;
    for _ in 0..(MAX_LIFE as usize + 1) {
        field.step();
        respawns += field.perf_stats().respawns();
    }
    // Every particle outlives at most MAX_LIFE frames
    assert!(respawns >= 30);
}

// === Background ===

fn background(count: usize) -> FlowFieldBackground<DrawList> {
    let field = FlowField::with_seed(800.0, 600.0, config(count), 11);
    FlowFieldBackground::with_field(DrawList::new(), field, 2.0)
}

#[test]
fn attach_sizes_surface_with_pixel_ratio() {
    let bg = background(5);
    assert_eq!(
        bg.surface().commands(),
        &[DrawCommand::Resize {
            width: 800.0,
            height: 600.0,
            device_pixel_ratio: 2.0,
        }]
    );
    assert!(bg.is_attached());
    assert!(!bg.is_running());
}

#[test]
fn invalid_pixel_ratio_falls_back_to_one() {
    let field = FlowField::with_seed(10.0, 10.0, config(1), 1);
    let bg = FlowFieldBackground::with_field(DrawList::new(), field, 0.0);
    assert_eq!(bg.device_pixel_ratio(), 1.0);
}

#[test]
fn frames_run_only_for_the_pending_token() {
    let mut bg = background(2);
    let first = bg.start().unwrap();
    assert!(bg.start().is_none());

    let second = bg.on_frame(first).unwrap();
    assert_eq!(bg.field().frame(), 1);

    // A replayed token is ignored
    assert!(bg.on_frame(first).is_none());
    assert_eq!(bg.field().frame(), 1);

    let third = bg.on_frame(second).unwrap();
    assert_eq!(bg.pending_frame(), Some(third));
    assert_eq!(bg.field().frame(), 2);
}

#[test]
fn detach_stops_all_further_painting() {
    let mut bg = background(10);
    let token = bg.start().unwrap();
    let next = bg.on_frame(token).unwrap();

    assert_eq!(bg.detach(), Some(next));
    let painted = bg.surface().len();

    // A frame callback that was already queued fires anyway
    assert!(bg.on_frame(next).is_none());
    assert_eq!(bg.surface().len(), painted);
    assert!(bg.pending_frame().is_none());
    assert!(!bg.is_running());

    // Events after teardown are dropped too
    bg.on_resize(100.0, 100.0);
    bg.on_pointer_move(1.0, 1.0);
    assert_eq!(bg.surface().len(), painted);
    assert_eq!(bg.field().pointer(), POINTER_SENTINEL);
    assert_eq!(bg.field().width(), 800.0);
}

#[test]
fn detach_without_start_is_safe() {
    let mut bg = background(1);
    assert_eq!(bg.detach(), None);
    assert_eq!(bg.detach(), None);
    assert!(bg.start().is_none());
}

#[test]
fn resize_resizes_surface_and_resets_pool() {
    let mut bg = background(25);
    let mut token = bg.start().unwrap();
    for _ in 0..30 {
        token = bg.on_frame(token).unwrap();
    }

    bg.surface_mut().clear();
    bg.on_resize(1024.0, 768.0);

    assert_eq!(
        bg.surface().commands(),
        &[DrawCommand::Resize {
            width: 1024.0,
            height: 768.0,
            device_pixel_ratio: 2.0,
        }]
    );
    assert!(bg.field().particles().iter().all(|p| p.age == 0));
    assert_in_bounds(bg.field());

    // The loop keeps going after a resize
    assert!(bg.on_frame(token).is_some());
}

#[test]
fn pointer_events_reach_the_field() {
    let mut bg = background(1);
    bg.on_pointer_move(120.0, 80.0);
    assert_eq!(bg.field().pointer(), Vec2::new(120.0, 80.0));
    bg.on_pointer_leave();
    assert_eq!(bg.field().pointer(), POINTER_SENTINEL);
}

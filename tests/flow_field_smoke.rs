use sandesh_web::simulation::POINTER_SENTINEL;
use sandesh_web::{DrawList, FieldEvents, FlowField, FlowFieldBackground, FlowFieldConfig};

#[test]
fn single_particle_stays_in_bounds_for_a_thousand_frames() {
    let config = FlowFieldConfig {
        particle_count: 1,
        speed: 1.0,
        ..FlowFieldConfig::default()
    };
    let mut bg = FlowFieldBackground::attach(DrawList::new(), 800.0, 600.0, 1.0, config);
    assert_eq!(bg.field().pointer(), POINTER_SENTINEL);

    let mut token = bg.start().expect("first frame");
    for _ in 0..1000 {
        token = bg.on_frame(token).expect("loop keeps running");
        let p = &bg.field().particles()[0];
        assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
    }
    assert_eq!(bg.field().frame(), 1000);

    assert_eq!(bg.detach(), Some(token));
    assert!(bg.on_frame(token).is_none());
}

#[test]
fn config_json_drives_pool_size() {
    let config = FlowFieldConfig::from_json(r#"{"particleCount": 32, "speed": 2}"#).unwrap();
    let mut field = FlowField::with_seed(640.0, 480.0, config, 77);
    assert_eq!(field.particle_count(), 32);
    assert!(field.particles().iter().all(|p| p.speed() == 2.0));

    field.on_resize(100.0, 50.0);
    assert_eq!(field.particle_count(), 32);
}

use egui::{Pos2, Vec2};
use gallery_nav::{GalleryConfig, GalleryEngine, NavState};

fn engine() -> GalleryEngine {
    GalleryEngine::new(GalleryConfig::builtin()).expect("builtin config is valid")
}

#[test]
fn full_walk_visits_every_slide_once() {
    let mut engine = engine();
    let order = GalleryConfig::builtin().navigation_order;

    let mut visited = Vec::new();
    for _ in 0..14 {
        let target = engine.next_slide().expect("cursor always resolves");
        assert_eq!(target.nav_state, NavState::Slide);
        visited.push(engine.selected_slide().expect("slide selected").uid());
    }

    assert_eq!(visited, order);
}

#[test]
fn navigation_targets_anchor_at_descriptor_origins() {
    let mut engine = engine();
    let config = GalleryConfig::builtin();

    for _ in 0..14 {
        let target = engine.next_slide().unwrap();
        let uid = engine.selected_slide().unwrap().uid();
        let descriptor = &config.slides[uid];
        assert_eq!(target.position, Pos2::new(descriptor.x, descriptor.y));
    }
}

#[test]
fn at_most_one_demo_stays_active_through_a_walk() {
    let mut engine = engine();

    for _ in 0..20 {
        engine.next_slide();
        engine.load_current_demo();
        let active = engine.slides().iter().filter(|s| s.loaded()).count();
        assert_eq!(active, 1);
    }

    engine.release_demos();
    assert_eq!(engine.slides().iter().filter(|s| s.loaded()).count(), 0);
}

#[test]
fn group_walk_follows_group_order() {
    let mut engine = engine();

    let mut centers = Vec::new();
    for _ in 0..6 {
        let target = engine.next_group().expect("group cursor always resolves");
        assert_eq!(target.nav_state, NavState::Group);
        centers.push(target.position);
    }

    assert_eq!(centers[0], Pos2::new(-1300., -1325.)); // Feeds
    assert_eq!(centers[5], Pos2::new(1750., 1300.)); // Particles & Shaders
}

#[test]
fn slide_selection_drags_group_cursor_along() {
    let mut engine = engine();

    // Heart Monitor (uid 3) sits in the Canvas group (gid 1)
    engine.select_target(3).expect("uid 3 exists");
    let group_target = engine.current_group().expect("group follows slide");
    assert_eq!(group_target.position, Pos2::new(600. + 850., -2000. + 500.));
}

#[test]
fn viewport_resize_refreshes_targets() {
    let mut engine = engine();
    engine.update_slide_scales(Vec2::new(1280., 800.));
    engine.update_group_scales(Vec2::new(1280., 800.));

    let slide_target = engine.next_slide().unwrap();
    // first visited slide is uid 1, device 6: demo area 691x432
    assert_eq!(
        slide_target.target_scale,
        (1280. / 691f32).min(800. / 432.)
    );

    let group_target = engine.current_group().unwrap();
    // group 0 is 2200x1150
    assert_eq!(
        group_target.target_scale,
        (1280. / 2200f32).min(800. / 1150.)
    );
}

#[cfg(feature = "events")]
mod events {
    use super::{engine, GalleryEngine};
    use gallery_nav::events::{Event, PayloadDemoLoad, PayloadSlideSelect};
    use gallery_nav::GalleryConfig;

    #[test]
    fn engine_publishes_lifecycle_events() {
        let (sender, receiver) = crossbeam::channel::unbounded();
        let mut engine = GalleryEngine::new(GalleryConfig::builtin())
            .expect("builtin config is valid")
            .with_event_sink(Box::new(sender));

        engine.next_slide();
        engine.load_current_demo();

        let events: Vec<Event> = receiver.try_iter().collect();
        assert!(events.contains(&Event::SlideSelect(PayloadSlideSelect { uid: 1 })));
        assert!(events.contains(&Event::DemoLoad(PayloadDemoLoad { uid: 1 })));
    }

    #[test]
    fn idempotent_loads_fire_once() {
        let (sender, receiver) = crossbeam::channel::unbounded();
        let mut engine = engine().with_event_sink(Box::new(sender));

        engine.next_slide();
        engine.load_current_demo();
        engine.load_current_demo();

        let loads = receiver
            .try_iter()
            .filter(|e| matches!(e, Event::DemoLoad(_)))
            .count();
        assert_eq!(loads, 1);
    }
}

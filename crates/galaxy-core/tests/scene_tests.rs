mod common;

use common::{Op, RecordingOverlay, RecordingSurface};
use galaxy_core::{default_catalog, Feature, GalaxyConfig, InteractionMode, Node, Scene, Viewport};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

fn node(label: &str, position: Vec3, line_scale: f32) -> Node {
    Node {
        position,
        feature: Rc::new(Feature::new(label, format!("{label} description"))),
        line_scale,
    }
}

fn still_config() -> GalaxyConfig {
    GalaxyConfig {
        initial_angles: (0.0, 0.0),
        ..GalaxyConfig::default()
    }
}

fn scene_with(nodes: Vec<Node>) -> Scene {
    Scene::with_nodes(
        still_config(),
        Vec::new(),
        nodes,
        Viewport::new(400.0, 300.0, 1.0),
    )
}

#[test]
fn empty_scene_still_clears_and_spins() {
    let mut scene = scene_with(Vec::new());
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    let report = scene.render_frame(&mut surface, &mut overlay);
    assert_eq!(surface.ops, vec![Op::Clear]);
    assert_eq!(report.drawn, 0);
    assert!(report.auto_rotated);
    assert!(!overlay.visible);
}

#[test]
fn radial_lines_precede_markers_and_use_line_scale() {
    let mut scene = scene_with(vec![
        node("a", Vec3::new(100.0, 0.0, 0.0), 0.5),
        node("b", Vec3::new(0.0, -80.0, 0.0), 1.0),
    ]);
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    scene.render_frame(&mut surface, &mut overlay);

    assert_eq!(surface.ops[0], Op::Clear);
    assert!(matches!(surface.ops[1], Op::Line { .. }));
    assert!(matches!(surface.ops[2], Op::Line { .. }));
    assert!(matches!(surface.ops[3], Op::Rect { .. }));
    assert!(matches!(surface.ops[4], Op::Rect { .. }));

    let center = Vec2::new(200.0, 150.0);
    let lines = surface.lines();
    assert_eq!(lines[0], (center, Vec2::new(250.0, 150.0)));
    assert_eq!(lines[1], (center, Vec2::new(200.0, 70.0)));
}

#[test]
fn markers_are_centered_and_sized_by_scale() {
    let mut scene = scene_with(vec![node("a", Vec3::new(60.0, 30.0, 0.0), 1.0)]);
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    scene.render_frame(&mut surface, &mut overlay);

    let rects = surface.rects();
    assert_eq!(rects.len(), 1);
    let (origin, size, fill) = &rects[0];
    // scale is exactly 1 on the z = 0 plane
    assert_eq!(*size, Vec2::splat(9.0));
    assert_eq!(*origin, Vec2::new(260.0 - 4.5, 180.0 - 4.5));
    assert_eq!(fill, "#bcd8ff");
}

#[test]
fn projected_points_are_sorted_by_depth() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut scene = Scene::new(
        GalaxyConfig::default(),
        default_catalog(),
        Viewport::new(640.0, 480.0, 1.0),
        &mut rng,
    );
    let mut surface = RecordingSurface::new(640.0, 480.0);
    let mut overlay = RecordingOverlay::default();
    for _ in 0..3 {
        scene.render_frame(&mut surface, &mut overlay);
        let depths: Vec<f32> = scene.projected().iter().map(|p| p.depth).collect();
        assert_eq!(depths.len(), 44);
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn hovered_node_is_highlighted_and_shown_in_tooltip() {
    let mut scene = scene_with(vec![
        node("far", Vec3::new(-120.0, 0.0, 0.0), 1.0),
        node("recon-1", Vec3::new(50.0, 0.0, 0.0), 1.0),
    ]);
    scene.pointer_move(Vec2::new(252.0, 151.0));
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    let report = scene.render_frame(&mut surface, &mut overlay);

    assert_eq!(report.hovered, Some(1));
    assert_eq!(scene.hovered().map(|n| n.feature.label.as_str()), Some("recon-1"));
    assert!(overlay.visible);
    let (at, text) = overlay.shown.clone().unwrap();
    assert_eq!(at, Vec2::new(250.0, 150.0));
    assert_eq!(text, "recon-1: recon-1 description");

    let fills: Vec<String> = surface.rects().into_iter().map(|r| r.2).collect();
    assert_eq!(fills.iter().filter(|f| f.as_str() == "#ffffff").count(), 1);
}

#[test]
fn pointer_leave_clears_hover_and_hides_tooltip() {
    let mut scene = scene_with(vec![node("a", Vec3::new(50.0, 0.0, 0.0), 1.0)]);
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    scene.pointer_move(Vec2::new(250.0, 150.0));
    scene.render_frame(&mut surface, &mut overlay);
    assert!(overlay.visible);

    scene.pointer_leave();
    assert!(scene.hovered().is_none());
    let report = scene.render_frame(&mut surface, &mut overlay);
    assert_eq!(report.hovered, None);
    assert!(!overlay.visible);
}

#[test]
fn pointer_far_from_nodes_hides_tooltip() {
    let mut scene = scene_with(vec![node("a", Vec3::new(50.0, 0.0, 0.0), 1.0)]);
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    scene.pointer_move(Vec2::new(20.0, 20.0));
    let report = scene.render_frame(&mut surface, &mut overlay);
    assert_eq!(report.hovered, None);
    assert!(!overlay.visible);
}

#[test]
fn theme_color_overrides_fallback_when_present() {
    let mut scene = scene_with(vec![node("a", Vec3::new(10.0, 0.0, 0.0), 1.0)]);
    let mut overlay = RecordingOverlay::default();

    let mut themed = RecordingSurface::new(400.0, 300.0);
    themed.theme = Some(" #ff8800 ".to_string());
    scene.render_frame(&mut themed, &mut overlay);
    assert_eq!(themed.rects()[0].2, "#ff8800");

    let mut blank = RecordingSurface::new(400.0, 300.0);
    blank.theme = Some("   ".to_string());
    scene.render_frame(&mut blank, &mut overlay);
    assert_eq!(blank.rects()[0].2, "#bcd8ff");
}

#[test]
fn idle_frames_advance_angles_by_fixed_step() {
    let mut scene = scene_with(vec![node("a", Vec3::new(10.0, 0.0, 0.0), 1.0)]);
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    for _ in 0..10 {
        scene.render_frame(&mut surface, &mut overlay);
    }
    assert!((scene.view.angle_y - 0.03).abs() < 1e-6);
    assert!((scene.view.angle_x - 0.007).abs() < 1e-6);
}

#[test]
fn dragging_suspends_auto_rotation() {
    let mut scene = scene_with(vec![node("a", Vec3::new(10.0, 0.0, 0.0), 1.0)]);
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    scene.pointer_down(Vec2::new(100.0, 100.0));
    scene.pointer_move(Vec2::new(110.0, 104.0));
    assert_eq!(scene.mode(), InteractionMode::Dragging);
    let report = scene.render_frame(&mut surface, &mut overlay);
    assert!(!report.auto_rotated);
    assert!((scene.view.angle_y - 0.05).abs() < 1e-6);
    assert!((scene.view.angle_x - 0.02).abs() < 1e-6);

    scene.pointer_up();
    assert!(scene.render_frame(&mut surface, &mut overlay).auto_rotated);
}

#[test]
fn pointer_down_outside_surface_does_not_drag() {
    let mut scene = scene_with(Vec::new());
    scene.pointer_down(Vec2::new(-5.0, 20.0));
    assert_ne!(scene.mode(), InteractionMode::Dragging);
}

#[test]
fn resize_recenters_without_moving_nodes() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut scene = Scene::new(
        GalaxyConfig::default(),
        default_catalog(),
        Viewport::new(400.0, 300.0, 1.0),
        &mut rng,
    );
    let before: Vec<Vec3> = scene.nodes().iter().map(|n| n.position).collect();
    let radius_before = scene.generation_radius();

    scene.resize(Viewport::new(1000.0, 800.0, 2.0));

    let after: Vec<Vec3> = scene.nodes().iter().map(|n| n.position).collect();
    assert_eq!(before, after);
    assert_eq!(scene.view.center, Vec2::new(500.0, 400.0));
    assert_eq!(scene.generation_radius(), radius_before);
    assert!((scene.next_generation_radius() - 320.0).abs() < 1e-3);
}

#[test]
fn regenerate_uses_current_viewport_radius() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut scene = Scene::new(
        GalaxyConfig::default(),
        default_catalog(),
        Viewport::new(400.0, 300.0, 1.0),
        &mut rng,
    );
    scene.resize(Viewport::new(1000.0, 1000.0, 1.0));
    scene.regenerate(&mut rng);
    assert_eq!(scene.nodes().len(), 44);
    let max_radius = scene.generation_radius();
    assert!((max_radius - 400.0).abs() < 1e-3);
    for n in scene.nodes() {
        let r = n.position.length();
        assert!(r >= 0.5 * max_radius - 1e-2 && r < 1.3 * max_radius + 1e-2);
    }
}

#[test]
fn regenerate_after_prebuilt_nodes_uses_the_given_catalog() {
    let mut rng = StdRng::seed_from_u64(8);
    let viewport = Viewport::new(400.0, 300.0, 1.0);
    let catalog = default_catalog();
    let prebuilt = galaxy_core::nodes::generate(&catalog, 44, viewport.max_radius(), &mut rng);
    let mut scene = Scene::with_nodes(GalaxyConfig::default(), catalog, prebuilt, viewport);
    assert_eq!(scene.nodes().len(), 44);

    scene.regenerate(&mut rng);
    assert_eq!(scene.nodes().len(), 44);
    assert_eq!(scene.nodes()[0].feature.label, "recon-1");
}

#[test]
fn non_finite_nodes_are_skipped_for_the_frame() {
    let mut scene = scene_with(vec![
        node("bad", Vec3::new(f32::NAN, 0.0, 0.0), 1.0),
        node("good", Vec3::new(10.0, 10.0, 0.0), 1.0),
    ]);
    let mut surface = RecordingSurface::new(400.0, 300.0);
    let mut overlay = RecordingOverlay::default();
    let report = scene.render_frame(&mut surface, &mut overlay);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.drawn, 1);
    assert_eq!(surface.rects().len(), 1);
    assert_eq!(scene.projected()[0].node, 1);
}

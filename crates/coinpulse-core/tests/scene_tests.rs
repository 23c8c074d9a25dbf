// Host-side tests for camera parallax, the door timeline and scene helpers.

use coinpulse_core::constants::*;
use coinpulse_core::{
    camera_target, door_pose, door_target_x, fitted_grid, flashlight_mask, lerp, vault_model,
    CameraRig, DoorParts, Flashlight, RigUpdate, SceneNode, VaultRig,
};
use glam::{Vec2, Vec3};

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn door(name: &str, x: f32) -> SceneNode {
    SceneNode::mesh(name, Vec3::new(x, 0.0, 0.0), DOOR_SIZE, DOOR_COLOR)
}

/// Run the rig long enough for the eased values to settle.
fn settle(rig: &VaultRig, root: &mut SceneNode, progress: f32) {
    for _ in 0..400 {
        rig.apply(root, progress);
    }
}

#[test]
fn lerp_moves_fraction_of_distance() {
    assert!(approx(lerp(0.0, 10.0, 0.1), 1.0));
    assert!(approx(lerp(5.0, 5.0, 0.5), 5.0));
    assert!(approx(lerp(2.0, 0.0, 1.0), 0.0));
}

#[test]
fn camera_target_follows_pointer_on_landscape() {
    let t = camera_target(Vec2::new(1.0, -1.0), 16.0 / 9.0);
    assert!(approx(t.x, 1.5));
    assert!(approx(t.y, -1.0));
    assert!(approx(t.z, CAMERA_BASE_Z));
}

#[test]
fn camera_pushes_back_on_portrait() {
    let t = camera_target(Vec2::ZERO, 0.5);
    assert!(approx(t.z, 8.0 + 2.0 * 4.0));
    let square = camera_target(Vec2::ZERO, 1.0);
    assert!(approx(square.z, CAMERA_BASE_Z));
}

#[test]
fn camera_ignores_degenerate_aspect() {
    let t = camera_target(Vec2::ZERO, 0.0);
    assert!(approx(t.z, CAMERA_BASE_Z));
    let t = camera_target(Vec2::ZERO, f32::NAN);
    assert!(t.z.is_finite());
}

#[test]
fn camera_rig_eases_toward_target() {
    let mut rig = CameraRig::default();
    let first = rig.update(Vec2::new(1.0, 0.0), 2.0);
    assert!(approx(first.x, 1.5 * CAMERA_SMOOTHING));

    for _ in 0..500 {
        rig.update(Vec2::new(1.0, 0.0), 2.0);
    }
    assert!((rig.eye.x - 1.5).abs() < 1e-3);
    let cam = rig.camera(2.0);
    assert_eq!(cam.eye, rig.eye);
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn door_timeline_phase_a_closes_doors() {
    assert!(approx(door_pose(0.0).offset, 1.0));
    assert!(approx(door_pose(0.15).offset, 0.5));
    assert!(approx(door_pose(0.0).lift, 0.0));
    assert!(approx(door_pose(0.29).lift, 0.0));
}

#[test]
fn door_timeline_phase_b_lifts_vault() {
    let at_end = door_pose(DOOR_CLOSE_END);
    assert!(approx(at_end.offset, 0.0));
    assert!(approx(at_end.lift, 0.0));

    assert!(approx(door_pose(0.65).lift, 3.5));
    let full = door_pose(1.0);
    assert!(approx(full.offset, 0.0));
    assert!(approx(full.lift, VAULT_EXIT_LIFT));
}

#[test]
fn door_timeline_clamps_out_of_range_progress() {
    assert_eq!(door_pose(-1.0), door_pose(0.0));
    assert_eq!(door_pose(2.0), door_pose(1.0));
    assert_eq!(door_pose(f32::NAN), door_pose(0.0));
}

#[test]
fn door_targets_push_away_from_center() {
    assert!(approx(door_target_x(-0.5, 1.0, -1.0), -1.5));
    assert!(approx(door_target_x(0.5, 1.0, 1.0), 1.5));
    assert!(approx(door_target_x(0.5, 0.0, 1.0), 0.5));
    assert!(approx(door_target_x(0.0, 1.0, -1.0), -1.0));
}

#[test]
fn doors_resolve_by_name_before_position() {
    let root = SceneNode::group("vault")
        .with_child(door("frame", 0.0))
        .with_child(door(DOOR_RIGHT_NAME, 0.5))
        .with_child(door(DOOR_LEFT_NAME, -0.5));
    assert_eq!(DoorParts::resolve(&root), DoorParts::Named { left: 2, right: 1 });
}

#[test]
fn doors_fall_back_to_first_two_children() {
    let root = SceneNode::group("vault")
        .with_child(door("a", -0.5))
        .with_child(door("b", 0.5))
        .with_child(door("c", 0.0));
    assert_eq!(
        DoorParts::resolve(&root),
        DoorParts::Positional { left: 0, right: 1 }
    );
}

#[test]
fn missing_doors_skip_updates_without_touching_asset() {
    let mut root = SceneNode::group("vault").with_child(door("only", 0.0));
    let rig = VaultRig::bind(&root);
    assert_eq!(rig.parts(), DoorParts::Unavailable);

    let before = root.clone();
    assert_eq!(rig.apply(&mut root, 0.8), RigUpdate::Skipped);
    assert_eq!(root, before);
}

#[test]
fn rig_opens_then_lifts_the_bundled_vault() {
    let mut root = vault_model();
    let rig = VaultRig::bind(&root);
    assert!(matches!(rig.parts(), DoorParts::Named { .. }));

    settle(&rig, &mut root, 0.0);
    assert!((root.children[0].position.x - -1.5).abs() < 1e-3);
    assert!((root.children[1].position.x - 1.5).abs() < 1e-3);
    assert!(root.position.y.abs() < 1e-3);

    settle(&rig, &mut root, 1.0);
    assert!((root.children[0].position.x - -0.5).abs() < 1e-3);
    assert!((root.children[1].position.x - 0.5).abs() < 1e-3);
    assert!((root.position.y - VAULT_EXIT_LIFT).abs() < 1e-3);
}

#[test]
fn rig_update_is_a_single_smoothing_step() {
    let mut root = vault_model();
    let rig = VaultRig::bind(&root);
    assert_eq!(rig.apply(&mut root, 0.0), RigUpdate::Applied);
    // target -1.5 from -0.5: one step moves a tenth of the way
    assert!(approx(root.children[0].position.x, -0.6));
}

#[test]
fn flatten_collects_meshes_in_world_space() {
    let mut root = vault_model();
    root.position.y = 2.0;
    let mut out = Vec::new();
    root.flatten_into(Vec3::ZERO, &mut out);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].position, Vec3::new(-0.5, 2.0, 0.0));
    assert_eq!(out[1].scale, DOOR_SIZE);
    assert_eq!(out[1].color.w, 1.0);
}

#[test]
fn grid_ends_above_canvas_overlap() {
    let fov = CAMERA_FOV_DEG.to_radians();
    let grid = fitted_grid(CAMERA_BASE_Z, fov, 16.0 / 9.0, 864.0);
    let visible_h = 2.0 * (fov * 0.5).tan() * 33.0;
    let overlap = visible_h * (64.0 / 864.0);
    assert!((grid.height - (visible_h - overlap)).abs() < 1e-3);
    assert!((grid.y - overlap * 0.5).abs() < 1e-3);
    assert_eq!(grid.z, GRID_DEPTH_Z);
    assert!(grid.width >= GRID_MIN_WIDTH);
}

#[test]
fn flashlight_mask_centers_on_pointer() {
    let mask = flashlight_mask(Vec2::ZERO, &Flashlight::default());
    assert!(mask.starts_with("radial-gradient(circle 300.0px at 50.00% 50.00%"));
    assert!(mask.contains("rgba(0,0,0,0.900) 150.0px"));
    assert!(mask.ends_with("rgba(0,0,0,0) 300.0px)"));
}

#[test]
fn disabled_flashlight_has_no_mask() {
    let off = Flashlight {
        enabled: false,
        ..Flashlight::default()
    };
    assert_eq!(flashlight_mask(Vec2::new(0.3, 0.3), &off), "none");
}

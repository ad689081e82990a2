//! Scene Graph Tests
//!
//! Tests for:
//! - Node insertion at root and under parents
//! - Name lookup: depth-first, first match, ObjectNotFound
//! - Re-parenting
//! - Transform dirty checking and Euler rotation

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec3};

use bottlescroll::errors::ShowcaseError;
use bottlescroll::scene::{Node, Scene, Transform};

const EPSILON: f32 = 1e-5;

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn finds_nested_node_by_name() {
    let mut scene = Scene::new();
    let root = scene.add_node(Node::new("Root"));
    let group = scene.build_node("BottleGroup").with_parent(root).build();
    scene.build_node("Shell").with_parent(group).build();

    assert_eq!(scene.get_object_by_name("BottleGroup"), Some(group));
    assert!(scene.get_object_by_name("Shell").is_some());
    assert_eq!(scene.root_nodes, vec![root]);
}

#[test]
fn first_match_wins_depth_first() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("A"));
    let deep = scene.build_node("Twin").with_parent(a).build();
    let _shallow = scene.add_node(Node::new("Twin"));

    assert_eq!(scene.get_object_by_name("Twin"), Some(deep));
}

#[test]
fn find_by_name_reports_missing_object() {
    let scene = Scene::new();
    let err = scene.find_by_name("BottleGroup").unwrap_err();
    match err {
        ShowcaseError::ObjectNotFound(name) => assert_eq!(name, "BottleGroup"),
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn attach_moves_node_between_parents() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("A"));
    let b = scene.add_node(Node::new("B"));
    let child = scene.build_node("Child").with_parent(a).build();

    scene.attach(child, b);

    assert!(scene.get_node(a).unwrap().children().is_empty());
    assert_eq!(scene.get_node(b).unwrap().children(), &[child]);
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(b));
}

#[test]
fn attach_root_node_leaves_root_list() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("A"));
    let b = scene.add_node(Node::new("B"));

    scene.attach(b, a);
    assert_eq!(scene.root_nodes, vec![a]);
}

#[test]
fn node_builder_sets_transform() {
    let mut scene = Scene::new();
    let h = scene
        .build_node("Bottle")
        .with_position(1.0, 2.0, 3.0)
        .with_scale(0.5)
        .build();

    let node = scene.get_node(h).unwrap();
    assert!(approx_vec3(node.transform.position, Vec3::new(1.0, 2.0, 3.0)));
    assert!(approx_vec3(node.transform.scale, Vec3::splat(0.5)));
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn update_matrices_only_rebuilds_dirty_nodes() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("A"));
    scene.add_node(Node::new("B"));

    assert_eq!(scene.update_matrices(), 2);
    assert_eq!(scene.update_matrices(), 0);

    scene.get_node_mut(a).unwrap().transform.position.x = 1.0;
    assert_eq!(scene.update_matrices(), 1);
}

#[test]
fn full_turn_keeps_euler_angle() {
    let mut t = Transform::new();
    t.set_rotation_euler(0.0, TAU, 0.0);
    t.update_local_matrix();

    assert!((t.rotation.y - TAU).abs() < EPSILON);
    // A full turn is the identity orientation.
    let q = t.quaternion();
    assert!(q.abs_diff_eq(Quat::IDENTITY, 1e-5) || q.abs_diff_eq(-Quat::IDENTITY, 1e-5));
}

#[test]
fn local_matrix_applies_rotation() {
    let mut t = Transform::new();
    t.rotation.y = FRAC_PI_2;
    t.update_local_matrix();

    let rotated = t.local_matrix().transform_vector3(Vec3::X);
    assert!(approx_vec3(rotated, Vec3::new(0.0, 0.0, -1.0)));
}

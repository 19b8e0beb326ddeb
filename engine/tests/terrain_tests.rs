//! Terrain Tests - Generation, Brushing and Normals
//!
//! End-to-end checks of the terrain mesh: reference scenarios, topology
//! invariance, brush footprint, direction symmetry and normal validity.

use glam::{Vec2, Vec3};
use terrain_sculpt_engine::config::{GenerationConfig, TerrainConfig};
use terrain_sculpt_engine::terrain::{
    BrushDirection, BrushSettings, SimplexField, TerrainMesh, falloff,
};

fn assert_normals_valid(mesh: &TerrainMesh) {
    for (i, n) in mesh.normals().iter().enumerate() {
        assert!(n.is_finite(), "normal {i} is not finite: {n:?}");
        assert!(
            (n.length() - 1.0).abs() < 1e-5,
            "normal {i} not unit length: {}",
            n.length()
        );
    }
}

fn noise_mesh(seed: u32) -> TerrainMesh {
    TerrainMesh::generated(
        &TerrainConfig::default(),
        &SimplexField::new(seed),
        &GenerationConfig::default(),
    )
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_reference_brush_center_reaches_strength() {
    // 129 x 129 grid spanning [-50, 50]^2
    let mut mesh = TerrainMesh::new(&TerrainConfig::default());
    let brush = BrushSettings::new(5.0, 0.5, BrushDirection::Raise);
    mesh.apply_brush(Vec2::ZERO, &brush);

    let center = mesh.position(64, 64);
    assert_eq!(center.x, 0.0);
    assert_eq!(center.z, 0.0);
    assert_eq!(center.y, 0.5);
}

#[test]
fn test_reference_brush_profile_on_aligned_grid() {
    // Spacing of 2.5 puts vertices exactly at d = 2.5 and d = 5
    let mut mesh = TerrainMesh::flat(40, 100.0);
    let brush = BrushSettings::new(5.0, 0.5, BrushDirection::Raise);
    mesh.apply_brush(Vec2::ZERO, &brush);

    let at = |x: f32| {
        let p = mesh.position(20, 20 + (x / 2.5) as u32);
        assert_eq!(p.x, x);
        p.y
    };
    assert_eq!(at(0.0), 0.5);
    assert!((at(2.5) - 0.25).abs() < 1e-6);
    assert_eq!(at(5.0), 0.0);
}

#[test]
fn test_falloff_reference_values() {
    assert_eq!(0.5 * falloff(0.0, 5.0), 0.5);
    assert!((0.5 * falloff(2.5, 5.0) - 0.25).abs() < 1e-6);
    assert_eq!(0.5 * falloff(5.0, 5.0), 0.0);
}

// ============================================================================
// Topology and footprint
// ============================================================================

#[test]
fn test_brush_sequence_keeps_topology() {
    let mut mesh = noise_mesh(3);
    let planar_before: Vec<Vec2> = mesh.planar_positions().collect();
    let indices_before = mesh.indices().to_vec();

    let strokes = [
        (Vec2::new(0.0, 0.0), BrushSettings::new(5.0, 0.5, BrushDirection::Raise)),
        (Vec2::new(-49.0, 12.0), BrushSettings::new(9.0, 2.0, BrushDirection::Lower)),
        (Vec2::new(30.3, -7.7), BrushSettings::new(1.2, 0.1, BrushDirection::Raise)),
        (Vec2::new(500.0, 0.0), BrushSettings::new(5.0, 1.0, BrushDirection::Raise)),
    ];
    for (center, brush) in &strokes {
        mesh.apply_brush(*center, brush);
    }

    let planar_after: Vec<Vec2> = mesh.planar_positions().collect();
    assert_eq!(planar_before, planar_after);
    assert_eq!(indices_before, mesh.indices());
}

#[test]
fn test_footprint_boundary() {
    let mut mesh = noise_mesh(8);
    let before: Vec<f32> = mesh.heights().collect();
    let radius = 6.0;
    let outcome = mesh.apply_brush(Vec2::ZERO, &BrushSettings::new(radius, 1.0, BrushDirection::Raise));

    let mut changed_inside = 0;
    for (i, p) in mesh.positions().iter().enumerate() {
        let d = Vec2::new(p.x, p.z).length();
        if d >= radius {
            assert_eq!(p.y, before[i], "vertex {i} at d={d} moved");
        } else if p.y != before[i] {
            changed_inside += 1;
        }
    }
    assert!(changed_inside > 0);
    assert_eq!(changed_inside, outcome.affected);
}

#[test]
fn test_brush_fully_off_grid_is_noop() {
    let mut mesh = noise_mesh(4);
    let before = mesh.positions().to_vec();
    let normals_before = mesh.normals().to_vec();
    let outcome = mesh.apply_brush(Vec2::new(-80.0, 80.0), &BrushSettings::default());
    assert!(outcome.is_noop());
    assert_eq!(mesh.positions(), before.as_slice());
    assert_eq!(mesh.normals(), normals_before.as_slice());
}

#[test]
fn test_non_finite_center_leaves_heights_intact() {
    let mut mesh = noise_mesh(4);
    let before = mesh.positions().to_vec();
    for center in [
        Vec2::new(f32::NAN, 0.0),
        Vec2::new(0.0, f32::INFINITY),
        Vec2::new(f32::NEG_INFINITY, f32::NAN),
    ] {
        assert!(mesh.apply_brush(center, &BrushSettings::default()).is_noop());
    }
    assert_eq!(mesh.positions(), before.as_slice());
}

// ============================================================================
// Direction symmetry and accumulation
// ============================================================================

#[test]
fn test_raise_then_lower_cancels_exactly_on_flat_grid() {
    let mut mesh = TerrainMesh::new(&TerrainConfig::default());
    let brush = BrushSettings::new(7.5, 0.8, BrushDirection::Raise);
    mesh.apply_brush(Vec2::new(3.1, -2.2), &brush);
    mesh.apply_brush(Vec2::new(3.1, -2.2), &brush.inverted());

    assert!(mesh.heights().all(|y| y == 0.0));
    assert!(mesh.normals().iter().all(|n| *n == Vec3::Y));
}

#[test]
fn test_raise_then_lower_restores_noise_terrain() {
    let mut mesh = noise_mesh(21);
    let before: Vec<f32> = mesh.heights().collect();
    let brush = BrushSettings::new(10.0, 1.5, BrushDirection::Lower);
    mesh.apply_brush(Vec2::new(-12.0, 4.0), &brush);
    mesh.apply_brush(Vec2::new(-12.0, 4.0), &brush.inverted());

    for (after, before) in mesh.heights().zip(before) {
        assert!((after - before).abs() < 1e-5);
    }
}

#[test]
fn test_repeated_dabs_accumulate() {
    let mut mesh = TerrainMesh::flat(16, 16.0);
    let brush = BrushSettings::new(3.0, 0.25, BrushDirection::Raise);
    for _ in 0..4 {
        mesh.apply_brush(Vec2::ZERO, &brush);
    }
    assert_eq!(mesh.position(8, 8).y, 1.0);
}

// ============================================================================
// Normals and determinism
// ============================================================================

#[test]
fn test_normals_valid_after_generate_and_brush() {
    let mut mesh = noise_mesh(1234);
    assert_normals_valid(&mesh);

    mesh.apply_brush(Vec2::new(10.0, 10.0), &BrushSettings::new(8.0, 4.0, BrushDirection::Raise));
    mesh.apply_brush(Vec2::new(-49.9, -49.9), &BrushSettings::new(3.0, 6.0, BrushDirection::Lower));
    assert_normals_valid(&mesh);
}

#[test]
fn test_incremental_normals_match_full_recompute() {
    let mut mesh = noise_mesh(55);
    mesh.apply_brush(Vec2::new(5.0, -3.0), &BrushSettings::new(6.0, 2.0, BrushDirection::Raise));
    mesh.apply_brush(Vec2::new(50.0, 50.0), &BrushSettings::new(4.0, 1.0, BrushDirection::Lower));
    let incremental = mesh.normals().to_vec();

    mesh.recompute_normals();
    assert_eq!(incremental, mesh.normals());
}

#[test]
fn test_same_seed_generates_identical_heights() {
    let config = TerrainConfig { segments: 4, size: 4.0 };
    let params = GenerationConfig::default();
    let a = TerrainMesh::generated(&config, &SimplexField::new(2024), &params);
    let b = TerrainMesh::generated(&config, &SimplexField::new(2024), &params);

    assert_eq!(a.vertex_count(), 25);
    let ya: Vec<u32> = a.heights().map(f32::to_bits).collect();
    let yb: Vec<u32> = b.heights().map(f32::to_bits).collect();
    assert_eq!(ya, yb);
}

#[test]
fn test_vertex_buffer_matches_mesh() {
    let mesh = noise_mesh(6);
    let vertices = mesh.vertices();
    assert_eq!(vertices.len(), mesh.vertex_count());
    for (v, (p, n)) in vertices.iter().zip(mesh.positions().iter().zip(mesh.normals())) {
        assert_eq!(v.position, p.to_array());
        assert_eq!(v.normal, n.to_array());
    }
    let max_index = *mesh.indices().iter().max().unwrap() as usize;
    assert_eq!(max_index, mesh.vertex_count() - 1);
}

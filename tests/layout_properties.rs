//! Layout properties over generated and hand-built cubes
//!
//! Verifies that:
//! 1. Pool sizes depend only on grid lengths
//! 2. Inactive cells yield zero-scale boxes and cylinders
//! 3. Layout is deterministic
//! 4. Palette changes only touch colors of the changed face

use faceted_cube::layout::CORNER_SIGNS;
use faceted_cube::{
    layout, Color, CubeConfig, FaceConfigGenerator, Palette, PaletteAssigner, StyleParameters,
    CAPACITIES,
};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Helper: cube with `face0` on face 0 and every other face empty
fn cube_with_first_face(face0: Vec<bool>) -> CubeConfig {
    let mut faces: Vec<Vec<bool>> = CAPACITIES.iter().map(|&l| vec![false; l]).collect();
    faces[0] = face0;
    CubeConfig::new(faces).unwrap()
}

fn random_cubes(seed: u64, count: usize) -> Vec<CubeConfig> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| FaceConfigGenerator::new().generate(&mut rng))
        .collect()
}

#[test]
fn test_pool_sizes_are_stable() {
    for cube in random_cubes(11, 30) {
        let out = layout(&cube, &Palette::DEFAULT, &StyleParameters::default()).unwrap();
        assert_eq!(out.boxes.len(), cube.total_cells());
        assert_eq!(out.boxes.len(), CAPACITIES.iter().sum::<usize>());
        assert_eq!(out.cylinders.len(), 4 * out.boxes.len());
    }
}

#[test]
fn test_inactive_cells_are_hidden() {
    for cube in random_cubes(12, 20) {
        let out = layout(&cube, &Palette::DEFAULT, &StyleParameters::default()).unwrap();
        let cells = cube.faces().iter().flat_map(|f| f.cells().iter().copied());
        for (id, active) in cells.enumerate() {
            assert_eq!(out.boxes[id].is_hidden(), !active, "box {id}");
            for cyl in out.corners(id).unwrap() {
                assert_eq!(cyl.is_hidden(), !active, "cylinders of box {id}");
            }
        }
    }
}

#[test]
fn test_layout_is_deterministic() {
    let style = StyleParameters {
        explosion: 1.25,
        thickness: -0.3,
        ..Default::default()
    };
    for cube in random_cubes(13, 10) {
        let a = layout(&cube, &Palette::DEFAULT, &style).unwrap();
        let b = layout(&cube, &Palette::DEFAULT, &style).unwrap();
        assert_eq!(a, b, "Layout must be deterministic");
    }
}

#[test]
fn test_palette_change_only_recolors_one_face() {
    let cube = random_cubes(14, 1).remove(0);
    let style = StyleParameters::default();

    let mut assigner = PaletteAssigner::default();
    let before = layout(&cube, assigner.palette(), &style).unwrap();

    let grey = Color::rgb(0x80, 0x80, 0x80);
    assigner.set_color(5, grey).unwrap();
    assert!(assigner.take_changed());
    let after = layout(&cube, assigner.palette(), &style).unwrap();

    let face5 = after.face_range(5).unwrap();
    for (id, (a, b)) in before.boxes.iter().zip(&after.boxes).enumerate() {
        assert_eq!(a.position, b.position);
        assert_eq!(a.rotation, b.rotation);
        assert_eq!(a.scale, b.scale);
        let expected = if face5.contains(&id) { grey } else { a.color };
        assert_eq!(b.color, expected);
        for (ca, cb) in before.corners(id).unwrap().iter().zip(after.corners(id).unwrap()) {
            assert_eq!(ca.matrix(), cb.matrix());
            assert_eq!(cb.color, expected);
        }
    }
}

#[test]
fn test_full_small_face_scenario() {
    let style = StyleParameters {
        main_cube_side: 10.0,
        thickness: 0.01,
        explosion: 0.0,
        ..Default::default()
    };
    let out = layout(&cube_with_first_face(vec![true; 9]), &Palette::DEFAULT, &style).unwrap();

    let face0: Vec<_> = out.boxes[out.face_range(0).unwrap()].to_vec();
    assert_eq!(face0.len(), 9);

    // (1/3 * 0.9) * 0.9 on the flat axes, raw thickness on the thin one
    let flat = (1.0 / 3.0) * 0.9 * 0.9;
    for b in &face0 {
        assert!((b.scale - Vec3::new(flat, flat, 0.01)).abs().max_element() < 1e-6);
        assert_eq!(b.color, Palette::DEFAULT.0[0]);
    }

    // Cell (0,0) sits on the +Z face, pushed out by the absolute thickness,
    // in the grid corner along both moving axes
    let corner = 10.0 / 2.0 - 10.0 / 6.0;
    let expected = Vec3::new(corner, corner, 5.0 + 5.0 * 0.01);
    assert!((face0[0].position - expected).abs().max_element() < 1e-5);
    assert!((face0[0].position.z - 5.0).abs() <= 5.0 * 0.01 + 1e-6);
}

#[test]
fn test_empty_face_scenario() {
    let styles = [
        StyleParameters::default(),
        StyleParameters {
            main_cube_side: 3.0,
            thickness: 0.0,
            explosion: 7.0,
            sub_squares_scale: 2.0,
            cylinder_thickness: 1.0,
            ..Default::default()
        },
    ];
    for style in styles {
        let mut faces: Vec<Vec<bool>> = CAPACITIES.iter().map(|&l| vec![true; l]).collect();
        faces[1] = vec![false; 16];
        let cube = CubeConfig::new(faces).unwrap();
        let out = layout(&cube, &Palette::DEFAULT, &style).unwrap();

        let range = out.face_range(1).unwrap();
        assert_eq!(range.len(), 16);
        for id in range {
            assert!(out.boxes[id].is_hidden());
            let corners = out.corners(id).unwrap();
            assert_eq!(corners.len(), 4);
            assert!(corners.iter().all(|c| c.scale == Vec3::ZERO));
        }
    }
}

#[test]
fn test_corner_order() {
    let style = StyleParameters::default();
    let out = layout(&cube_with_first_face(vec![true; 9]), &Palette::DEFAULT, &style).unwrap();
    let center = out.boxes[0].position;
    for (corner, (s0, s1)) in out.corners(0).unwrap().iter().zip(CORNER_SIGNS) {
        // Face 0 moves along x then y
        let d = corner.position - Vec3::new(center.x, center.y, 0.0);
        assert_eq!(d.x.signum(), s0);
        assert_eq!(d.y.signum(), s1);
        assert!(d.z.abs() < 1e-6);
    }
}

#[test]
fn test_explosion_pushes_faces_out() {
    let cube = random_cubes(15, 1).remove(0);
    let near = StyleParameters {
        explosion: 0.0,
        ..Default::default()
    };
    let far = StyleParameters {
        explosion: 2.0,
        ..Default::default()
    };
    let a = layout(&cube, &Palette::DEFAULT, &near).unwrap();
    let b = layout(&cube, &Palette::DEFAULT, &far).unwrap();
    for face in 0..6 {
        let normal = faceted_cube::FACES[face].normal();
        for id in a.face_range(face).unwrap() {
            let shift = (b.boxes[id].position - a.boxes[id].position).dot(normal);
            assert!((shift - 2.0).abs() < 1e-5);
        }
    }
}

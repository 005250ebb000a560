//! Barrel assembly from design parameters
//!
//! `build_barrel` turns a parameter snapshot into a composite mesh: body,
//! grip rings, optional scallop cut bars, thread collar, and tip. The
//! assembly is regenerated wholesale on every relevant change; nothing is
//! mutated in place.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Vec3};

use crate::constants::*;
use crate::material::{COLLAR_FINISH, CUT_FINISH, MaterialProperties, RING_FINISH};
use crate::params::{DesignParameters, GripType};
use crate::primitive::{
    MeshData, generate_box_mesh, generate_cone_mesh, generate_cylinder_mesh_with_segments,
    generate_lathe_mesh, generate_torus_mesh,
};

/// Role of a sub-shape within the assembled barrel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Body,
    GripRing,
    ScallopCut,
    ThreadCollar,
    Tip,
}

/// One renderable sub-shape of the barrel
#[derive(Debug, Clone)]
pub struct BarrelPart {
    pub kind: PartKind,
    pub vertices: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    /// Placement within the barrel; the barrel axis is X
    pub transform: Mat4,
    /// Finish color (RGBA)
    pub color: [f32; 4],
    pub metalness: f32,
    pub roughness: f32,
}

impl BarrelPart {
    fn new(kind: PartKind, mesh: MeshData, transform: Mat4, finish: MaterialProperties) -> Self {
        let (vertices, normals, indices) = mesh;
        let [r, g, b] = finish.base_color;
        Self {
            kind,
            vertices,
            normals,
            indices,
            transform,
            color: [r, g, b, 1.0],
            metalness: finish.metalness,
            roughness: finish.roughness,
        }
    }

    /// Axis-aligned bounds of the part in barrel space
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in &self.vertices {
            let p = self.transform.transform_point3(Vec3::from_array(*v));
            for (i, value) in p.to_array().into_iter().enumerate() {
                min[i] = min[i].min(value);
                max[i] = max[i].max(value);
            }
        }
        (min, max)
    }
}

/// Composite barrel mesh, fully determined by one parameter snapshot
#[derive(Debug, Clone)]
pub struct BarrelMesh {
    pub parts: Vec<BarrelPart>,
}

impl BarrelMesh {
    /// Axis-aligned bounds of the whole assembly
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for part in &self.parts {
            let (pmin, pmax) = part.bounds();
            for i in 0..3 {
                min[i] = min[i].min(pmin[i]);
                max[i] = max[i].max(pmax[i]);
            }
        }
        (min, max)
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        let (min, max) = self.bounds();
        Vec3::new(
            (min[0] + max[0]) / 2.0,
            (min[1] + max[1]) / 2.0,
            (min[2] + max[2]) / 2.0,
        )
    }

    /// Radius of a sphere around the bounding box, for camera fitting
    pub fn bounding_radius(&self) -> f32 {
        let (min, max) = self.bounds();
        let size = Vec3::new(max[0] - min[0], max[1] - min[1], max[2] - min[2]);
        size.length() / 2.0
    }

    /// Parts of one kind
    pub fn parts_of(&self, kind: PartKind) -> impl Iterator<Item = &BarrelPart> {
        self.parts.iter().filter(move |p| p.kind == kind)
    }
}

/// Build the full barrel assembly for the given parameters.
///
/// Inputs arrive pre-clamped by the control surface; no validation happens
/// here.
pub fn build_barrel(params: &DesignParameters) -> BarrelMesh {
    let length = params.length_mm;
    let radius = params.radius();
    let surface = params.material.properties();

    // Primitives are generated along Z; this turns them onto the X axis
    let axis = Mat4::from_rotation_y(FRAC_PI_2);

    let mut parts = Vec::new();

    let body = match params.grip {
        GripType::Torpedo => generate_lathe_mesh(&torpedo_profile(length, radius), BODY_SEGMENTS),
        // Scallop shares the straight cylinder; its character comes from
        // the cut overlay below
        GripType::Straight | GripType::Scallop => {
            generate_cylinder_mesh_with_segments(radius, length, BODY_SEGMENTS)
        }
    };
    parts.push(BarrelPart::new(PartKind::Body, body, axis, surface));

    // Grip rings across the middle half of the body
    for i in 0..GRIP_RING_COUNT {
        let x = -length / 4.0 + i as f32 * length / 16.0;
        let ring = generate_torus_mesh(
            radius + RING_RADIAL_OFFSET,
            RING_TUBE_RADIUS,
            RING_SEGMENTS,
            RING_TUBE_SEGMENTS,
        );
        parts.push(BarrelPart::new(
            PartKind::GripRing,
            ring,
            Mat4::from_translation(Vec3::new(x, 0.0, 0.0)) * axis,
            RING_FINISH,
        ));
    }

    if params.grip == GripType::Scallop {
        for i in 0..SCALLOP_CUT_COUNT {
            let angle = i as f32 * PI / 8.0;
            let bar = generate_box_mesh([CUT_LENGTH_FACTOR * length, CUT_THICKNESS, CUT_THICKNESS]);
            let transform = Mat4::from_rotation_x(angle)
                * Mat4::from_translation(Vec3::new(0.0, radius + CUT_RADIAL_OFFSET, 0.0));
            parts.push(BarrelPart::new(
                PartKind::ScallopCut,
                bar,
                transform,
                CUT_FINISH,
            ));
        }
    }

    // Thread collar flush against the +X end
    let collar = generate_cylinder_mesh_with_segments(
        radius - COLLAR_RADIUS_INSET,
        COLLAR_LENGTH,
        COLLAR_SEGMENTS,
    );
    parts.push(BarrelPart::new(
        PartKind::ThreadCollar,
        collar,
        Mat4::from_translation(Vec3::new(length / 2.0 + COLLAR_LENGTH / 2.0, 0.0, 0.0)) * axis,
        COLLAR_FINISH,
    ));

    // Tip cone at the -X end, apex pointing outward
    let tip = generate_cone_mesh(radius - TIP_RADIUS_INSET, TIP_HEIGHT, TIP_SEGMENTS);
    parts.push(BarrelPart::new(
        PartKind::Tip,
        tip,
        Mat4::from_translation(Vec3::new(-length / 2.0 - TIP_HEIGHT / 2.0, 0.0, 0.0))
            * Mat4::from_rotation_y(-FRAC_PI_2),
        surface,
    ));

    BarrelMesh { parts }
}

/// Torpedo lathe profile: bulges at the midpoint, nominal radius at both
/// ends
fn torpedo_profile(length: f32, radius: f32) -> Vec<(f32, f32)> {
    (0..=PROFILE_SAMPLES)
        .map(|i| {
            let t = i as f32 / PROFILE_SAMPLES as f32;
            let r = radius * (1.0 + TORPEDO_BULGE * (PI * t).sin());
            (r, (t - 0.5) * length)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    const TOLERANCE: f32 = 1e-3;

    fn params(grip: GripType) -> DesignParameters {
        DesignParameters {
            grip,
            ..DesignParameters::default()
        }
    }

    fn body_extent_x(mesh: &BarrelMesh) -> f32 {
        let body = mesh.parts_of(PartKind::Body).next().unwrap();
        let (min, max) = body.bounds();
        max[0] - min[0]
    }

    fn body_max_radius(mesh: &BarrelMesh) -> f32 {
        let body = mesh.parts_of(PartKind::Body).next().unwrap();
        body.vertices
            .iter()
            .map(|v| {
                let p = body.transform.transform_point3(Vec3::from_array(*v));
                (p.y * p.y + p.z * p.z).sqrt()
            })
            .fold(f32::MIN, f32::max)
    }

    #[test]
    fn test_body_extent_matches_length() {
        for &grip in GripType::all() {
            let p = params(grip);
            let mesh = build_barrel(&p);
            assert!(
                (body_extent_x(&mesh) - p.length_mm).abs() < TOLERANCE,
                "{:?}",
                grip
            );
        }
    }

    #[test]
    fn test_max_radius_follows_profile_factor() {
        for &grip in GripType::all() {
            let p = params(grip);
            let mesh = build_barrel(&p);
            let expected = p.radius() * grip.max_profile_factor();
            assert!(
                (body_max_radius(&mesh) - expected).abs() < TOLERANCE,
                "{:?}",
                grip
            );
        }
    }

    #[test]
    fn test_grip_ring_count_is_fixed() {
        for &grip in GripType::all() {
            let mesh = build_barrel(&params(grip));
            assert_eq!(mesh.parts_of(PartKind::GripRing).count(), 8);
        }
    }

    #[test]
    fn test_scallop_cuts_present_iff_scallop() {
        assert_eq!(
            build_barrel(&params(GripType::Scallop))
                .parts_of(PartKind::ScallopCut)
                .count(),
            16
        );
        assert_eq!(
            build_barrel(&params(GripType::Straight))
                .parts_of(PartKind::ScallopCut)
                .count(),
            0
        );
        assert_eq!(
            build_barrel(&params(GripType::Torpedo))
                .parts_of(PartKind::ScallopCut)
                .count(),
            0
        );
    }

    #[test]
    fn test_material_switch_changes_body_and_tip_only() {
        let tungsten = build_barrel(&DesignParameters {
            material: Material::Tungsten,
            ..DesignParameters::default()
        });
        let brass = build_barrel(&DesignParameters {
            material: Material::Brass,
            ..DesignParameters::default()
        });

        let color_of = |mesh: &BarrelMesh, kind| mesh.parts_of(kind).next().unwrap().color;

        let brass_color = Material::Brass.properties().base_color;
        assert_eq!(color_of(&brass, PartKind::Body)[..3], brass_color);
        assert_eq!(color_of(&brass, PartKind::Tip)[..3], brass_color);
        assert_ne!(
            color_of(&tungsten, PartKind::Body),
            color_of(&brass, PartKind::Body)
        );
        assert_eq!(
            color_of(&tungsten, PartKind::ThreadCollar),
            color_of(&brass, PartKind::ThreadCollar)
        );
        assert_eq!(
            color_of(&tungsten, PartKind::GripRing),
            color_of(&brass, PartKind::GripRing)
        );
    }

    #[test]
    fn test_torpedo_end_to_end() {
        let p = DesignParameters {
            length_mm: 40.0,
            diameter_mm: 6.0,
            weight_g: 20.0,
            grip: GripType::Torpedo,
            material: Material::Brass,
        };
        let mesh = build_barrel(&p);

        // Mid-axis bulge: 3.0 * 1.3
        assert!((body_max_radius(&mesh) - 3.9).abs() < TOLERANCE);

        // End rings taper back to the nominal radius
        let body = mesh.parts_of(PartKind::Body).next().unwrap();
        let end_radius = body
            .vertices
            .iter()
            .map(|v| body.transform.transform_point3(Vec3::from_array(*v)))
            .filter(|p| (p.x + 20.0).abs() < TOLERANCE)
            .map(|p| (p.y * p.y + p.z * p.z).sqrt())
            .fold(f32::MIN, f32::max);
        assert!((end_radius - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_collar_and_tip_placement() {
        let p = params(GripType::Straight);
        let mesh = build_barrel(&p);
        let (min, max) = mesh.bounds();

        // Collar extends COLLAR_LENGTH past the +X end, tip TIP_HEIGHT past -X
        assert!((max[0] - (p.length_mm / 2.0 + COLLAR_LENGTH)).abs() < TOLERANCE);
        assert!((min[0] + p.length_mm / 2.0 + TIP_HEIGHT).abs() < TOLERANCE);
    }
}

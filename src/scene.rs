use glam::Vec3;
use serde::Serialize;

use crate::math::{intersect_aabb, intersect_frustum, intersect_sphere, AABB};

/// Thickness given to planes when they are hit-tested
const PLANE_HIT_THICKNESS: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Swap this axis with Y. The swap is its own inverse, so the same call maps
    /// world offsets into a Y-up local frame and local normals back out.
    fn swap_with_y(self, v: Vec3) -> Vec3 {
        match self {
            Axis::X => Vec3::new(v.y, v.x, v.z),
            Axis::Y => v,
            Axis::Z => Vec3::new(v.x, v.z, v.y),
        }
    }
}

/// Primitive geometry; every shape is centred on its mesh position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Box {
        size: Vec3,
    },
    /// Capped cylinder, tapered when the two radii differ
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        length: f32,
        axis: Axis,
    },
    /// Flat rectangle in the XY plane facing +Z
    Plane {
        width: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
    },
}

impl Shape {
    /// Extent of the shape's bounding box
    pub fn extent(&self) -> Vec3 {
        match *self {
            Shape::Box { size } => size,
            Shape::Cylinder { radius_top, radius_bottom, length, axis } => {
                let diameter = 2.0 * radius_top.max(radius_bottom);
                axis.swap_with_y(Vec3::new(diameter, length, diameter))
            }
            Shape::Plane { width, height } => Vec3::new(width, height, 0.0),
            Shape::Sphere { radius } => Vec3::splat(2.0 * radius),
        }
    }
}

/// Appearance forced on a part regardless of the customer's material choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialOverride {
    /// Hardware: always light-grey metal
    Metal,
    /// Always glass, tinted with the chosen colour
    Glass,
}

/// Leaf of the scene graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    pub label: &'static str,
    pub shape: Shape,
    /// Centre, relative to the parent group
    pub position: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_override: Option<MaterialOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub label: &'static str,
    /// Offset applied to every child
    pub position: Vec3,
    pub children: Vec<SceneNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum SceneNode {
    Mesh(Mesh),
    Group(Group),
}

impl SceneNode {
    pub fn mesh(label: &'static str, shape: Shape, position: Vec3) -> Self {
        SceneNode::Mesh(Mesh {
            label,
            shape,
            position,
            material_override: None,
        })
    }

    pub fn tagged_mesh(
        label: &'static str,
        shape: Shape,
        position: Vec3,
        material_override: MaterialOverride,
    ) -> Self {
        SceneNode::Mesh(Mesh {
            label,
            shape,
            position,
            material_override: Some(material_override),
        })
    }

    pub fn group(label: &'static str, position: Vec3, children: Vec<SceneNode>) -> Self {
        SceneNode::Group(Group {
            label,
            position,
            children,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            SceneNode::Mesh(mesh) => mesh.label,
            SceneNode::Group(group) => group.label,
        }
    }

    /// Number of meshes in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            SceneNode::Mesh(_) => 1,
            SceneNode::Group(group) => group.children.iter().map(SceneNode::leaf_count).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count() == 0
    }

    /// Flatten the tree into world-space meshes, depth first
    pub fn meshes(&self) -> Vec<PlacedMesh> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_meshes(Vec3::ZERO, &mut out);
        out
    }

    fn collect_meshes(&self, offset: Vec3, out: &mut Vec<PlacedMesh>) {
        match self {
            SceneNode::Mesh(mesh) => out.push(PlacedMesh {
                label: mesh.label,
                shape: mesh.shape,
                center: offset + mesh.position,
                material_override: mesh.material_override,
            }),
            SceneNode::Group(group) => {
                for child in &group.children {
                    child.collect_meshes(offset + group.position, out);
                }
            }
        }
    }

    /// World-space meshes carrying `label`
    pub fn meshes_labelled(&self, label: &str) -> Vec<PlacedMesh> {
        self.meshes().into_iter().filter(|m| m.label == label).collect()
    }

    pub fn bounds(&self) -> Option<AABB> {
        self.meshes()
            .iter()
            .map(PlacedMesh::bounds)
            .reduce(|acc, b| acc.union(&b))
    }
}

/// A mesh resolved to world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedMesh {
    pub label: &'static str,
    pub shape: Shape,
    pub center: Vec3,
    pub material_override: Option<MaterialOverride>,
}

impl PlacedMesh {
    pub fn bounds(&self) -> AABB {
        AABB::from_center_size(self.center, self.shape.extent())
    }

    /// Closest hit along the ray, with the outward surface normal
    pub fn intersect(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<(f32, Vec3)> {
        match self.shape {
            Shape::Box { size } => {
                let bounds = AABB::from_center_size(self.center, size);
                let t = intersect_aabb(ray_origin, ray_dir, bounds.min, bounds.max)?;
                let hit = ray_origin + ray_dir * t;
                Some((t, box_normal(hit - self.center, size * 0.5)))
            }
            Shape::Plane { width, height } => {
                let size = Vec3::new(width, height, PLANE_HIT_THICKNESS);
                let bounds = AABB::from_center_size(self.center, size);
                let t = intersect_aabb(ray_origin, ray_dir, bounds.min, bounds.max)?;
                let normal = if ray_dir.z > 0.0 { Vec3::NEG_Z } else { Vec3::Z };
                Some((t, normal))
            }
            Shape::Sphere { radius } => {
                let t = intersect_sphere(ray_origin, ray_dir, self.center, radius)?;
                let hit = ray_origin + ray_dir * t;
                Some((t, (hit - self.center).normalize_or_zero()))
            }
            Shape::Cylinder { radius_top, radius_bottom, length, axis } => {
                let local_origin = axis.swap_with_y(ray_origin - self.center);
                let local_dir = axis.swap_with_y(ray_dir);
                let (t, local_normal) =
                    intersect_frustum(local_origin, local_dir, radius_top, radius_bottom, length)?;
                Some((t, axis.swap_with_y(local_normal)))
            }
        }
    }
}

/// Face normal of a box at a local hit offset: the axis where the hit sits closest to the face
fn box_normal(local: Vec3, half: Vec3) -> Vec3 {
    let scaled = local / half.max(Vec3::splat(1e-6));
    let abs = scaled.abs();
    if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::new(scaled.x.signum(), 0.0, 0.0)
    } else if abs.y >= abs.z {
        Vec3::new(0.0, scaled.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, scaled.z.signum())
    }
}

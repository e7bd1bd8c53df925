//! Builder module provides reusable parts and a fluent builder for furniture trees
//!
//! # Examples
//!
//! ```
//! use furniture_configurator::furniture::PartBuilder;
//! use furniture_configurator::scene::Axis;
//! use glam::Vec3;
//!
//! let node = PartBuilder::new("stool")
//!     .add_box("seat", Vec3::new(0.0, 0.45, 0.0), Vec3::new(0.4, 0.03, 0.4))
//!     .add_handle(Vec3::new(0.0, 0.3, 0.2), 0.1, Axis::X)
//!     .build();
//! assert_eq!(node.leaf_count(), 2);
//! ```

use glam::Vec3;

use crate::scene::{Axis, MaterialOverride, SceneNode, Shape};

// ============================================================================
// Shared dimensions (metres)
// ============================================================================

/// Thickness of shelves, side supports and frame bars
pub const PANEL_THICKNESS: f32 = 0.03;
/// Thickness of doors and drawer fronts
pub const FRONT_THICKNESS: f32 = 0.02;
pub const HANDLE_RADIUS: f32 = 0.01;
pub const KNOB_RADIUS: f32 = 0.02;

// ============================================================================
// Part Generators
// ============================================================================

/// Creates a box part centred on `center`
pub fn box_at(label: &'static str, center: Vec3, size: Vec3) -> SceneNode {
    SceneNode::mesh(label, Shape::Box { size }, center)
}

/// Creates a metal bar handle running along `axis`
pub fn handle(center: Vec3, length: f32, axis: Axis) -> SceneNode {
    SceneNode::tagged_mesh(
        "handle",
        Shape::Cylinder {
            radius_top: HANDLE_RADIUS,
            radius_bottom: HANDLE_RADIUS,
            length,
            axis,
        },
        center,
        MaterialOverride::Metal,
    )
}

/// Creates a round metal knob
pub fn knob(center: Vec3) -> SceneNode {
    SceneNode::tagged_mesh(
        "handle",
        Shape::Sphere { radius: KNOB_RADIUS },
        center,
        MaterialOverride::Metal,
    )
}

/// Centres of `count` equal slots laid end to end from `start` over `span`
pub fn slot_centers(start: f32, span: f32, count: usize) -> impl Iterator<Item = f32> {
    let step = if count == 0 { 0.0 } else { span / count as f32 };
    (0..count).map(move |i| start + (i as f32 + 0.5) * step)
}

/// Positions of `count` points spread evenly over `[from, to]`, both ends included
pub fn spread(from: f32, to: f32, count: usize) -> impl Iterator<Item = f32> {
    let step = if count > 1 { (to - from) / (count - 1) as f32 } else { 0.0 };
    (0..count).map(move |i| from + i as f32 * step)
}

// ============================================================================
// PartBuilder - Fluent API for furniture construction
// ============================================================================

/// Builder for one furniture group
pub struct PartBuilder {
    label: &'static str,
    position: Vec3,
    children: Vec<SceneNode>,
}

impl PartBuilder {
    /// Creates a new empty group builder
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            position: Vec3::ZERO,
            children: Vec::new(),
        }
    }

    /// Offsets the whole group
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Adds a box in the piece's own colour and material
    pub fn add_box(mut self, label: &'static str, center: Vec3, size: Vec3) -> Self {
        self.children.push(box_at(label, center, size));
        self
    }

    /// Adds a box with a forced material
    pub fn add_tagged_box(
        mut self,
        label: &'static str,
        center: Vec3,
        size: Vec3,
        tag: MaterialOverride,
    ) -> Self {
        self.children
            .push(SceneNode::tagged_mesh(label, Shape::Box { size }, center, tag));
        self
    }

    /// Adds a (possibly tapered) cylinder
    pub fn add_cylinder(
        mut self,
        label: &'static str,
        center: Vec3,
        radius_top: f32,
        radius_bottom: f32,
        length: f32,
        axis: Axis,
    ) -> Self {
        self.children.push(SceneNode::mesh(
            label,
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                length,
                axis,
            },
            center,
        ));
        self
    }

    /// Adds a metal bar handle
    pub fn add_handle(mut self, center: Vec3, length: f32, axis: Axis) -> Self {
        self.children.push(handle(center, length, axis));
        self
    }

    /// Adds a spherical metal knob
    pub fn add_knob(mut self, center: Vec3) -> Self {
        self.children.push(knob(center));
        self
    }

    /// Adds a flat panel facing +Z
    pub fn add_plane(mut self, label: &'static str, center: Vec3, width: f32, height: f32) -> Self {
        self.children
            .push(SceneNode::mesh(label, Shape::Plane { width, height }, center));
        self
    }

    /// Adds an already built node (usually a nested group)
    pub fn add_node(mut self, node: SceneNode) -> Self {
        self.children.push(node);
        self
    }

    /// Adds custom nodes
    pub fn add_nodes(mut self, nodes: impl IntoIterator<Item = SceneNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Gets the current number of direct children
    pub fn count(&self) -> usize {
        self.children.len()
    }

    /// Builds the final group
    pub fn build(self) -> SceneNode {
        let node = SceneNode::group(self.label, self.position, self.children);
        log::debug!("Built '{}': {} meshes", self.label, node.leaf_count());
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_centers_split_span() {
        let centers: Vec<f32> = slot_centers(-1.0, 2.0, 4).collect();
        assert_eq!(centers, vec![-0.75, -0.25, 0.25, 0.75]);
        assert_eq!(slot_centers(0.0, 1.0, 0).count(), 0);
    }

    #[test]
    fn test_spread_includes_both_ends() {
        let points: Vec<f32> = spread(0.0, 1.0, 3).collect();
        assert_eq!(points, vec![0.0, 0.5, 1.0]);
        assert_eq!(spread(0.0, 1.0, 1).collect::<Vec<_>>(), vec![0.0]);
    }

    #[test]
    fn test_builder_counts_and_tags() {
        let builder = PartBuilder::new("test")
            .add_box("body", Vec3::ZERO, Vec3::ONE)
            .add_knob(Vec3::Z)
            .add_tagged_box("top", Vec3::Y, Vec3::ONE, MaterialOverride::Glass);
        assert_eq!(builder.count(), 3);

        let node = builder.build();
        let meshes = node.meshes();
        assert_eq!(meshes[0].material_override, None);
        assert_eq!(meshes[1].material_override, Some(MaterialOverride::Metal));
        assert_eq!(meshes[2].material_override, Some(MaterialOverride::Glass));
    }

    #[test]
    fn test_builder_offset_applies_to_children() {
        let node = PartBuilder::new("moved")
            .at(Vec3::new(0.0, 1.0, 0.0))
            .add_box("a", Vec3::X, Vec3::ONE)
            .build();
        assert_eq!(node.meshes()[0].center, Vec3::new(1.0, 1.0, 0.0));
    }
}

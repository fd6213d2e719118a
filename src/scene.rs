use glam::{EulerRot, Mat4, Vec3};

/// Handle to a node stored in a [`SceneGraph`].
///
/// Handles are lightweight indices and can be copied freely; the node data
/// stays owned by the graph from insertion until teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn raw(&self) -> usize {
        self.0
    }
}

/// Renderable primitive. Unit meshes are scaled per instance from these
/// parameters by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Axis along local Y, caps at ±height/2
    Cylinder { radius: f32, height: f32 },
    Cuboid { size: Vec3 },
    /// Ring in the local XY plane
    Torus { radius: f32, tube: f32 },
}

/// A renderable object: shape, flat color, and a mutable transform.
#[derive(Debug, Clone)]
pub struct Node {
    pub shape: Shape,
    pub color: [f32; 3],
    pub position: Vec3,
    /// Intrinsic XYZ Euler angles, radians
    pub rotation: Vec3,
}

impl Node {
    pub fn new(shape: Shape, color: [f32; 3]) -> Self {
        Self {
            shape,
            color,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// World transform: translation, then intrinsic XYZ rotation.
    /// Shape scale is applied separately by the renderer.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// Single point light; color is white, only position and strength vary.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 50.0),
            intensity: 1.0,
        }
    }
}

/// Retained-mode scene graph: a flat collection of nodes plus lights.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    point_light: PointLight,
    ambient_intensity: f32,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, returning its handle. Insertion order is significant:
    /// demos use it as the phase index in their motion formulas.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn set_position(&mut self, id: NodeId, position: Vec3) {
        self.nodes[id.0].position = position;
    }

    pub fn position(&self, id: NodeId) -> Vec3 {
        self.nodes[id.0].position
    }

    pub fn set_rotation(&mut self, id: NodeId, rotation: Vec3) {
        self.nodes[id.0].rotation = rotation;
    }

    pub fn rotation(&self, id: NodeId) -> Vec3 {
        self.nodes[id.0].rotation
    }

    pub fn set_point_light(&mut self, light: PointLight) {
        self.point_light = light;
    }

    pub fn point_light(&self) -> PointLight {
        self.point_light
    }

    pub fn set_ambient(&mut self, intensity: f32) {
        self.ambient_intensity = intensity;
    }

    pub fn ambient(&self) -> f32 {
        self.ambient_intensity
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Expand a 0xRRGGBB literal into linear-ish RGB floats.
pub fn hex_color(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_index_in_insertion_order() {
        let mut scene = SceneGraph::new();
        let a = scene.add(Node::new(Shape::Sphere { radius: 1.0 }, [1.0, 0.0, 0.0]));
        let b = scene.add(Node::new(Shape::Sphere { radius: 2.0 }, [0.0, 1.0, 0.0]));

        assert_eq!(a.raw(), 0);
        assert_eq!(b.raw(), 1);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn set_position_mutates_in_place() {
        let mut scene = SceneGraph::new();
        let id = scene.add(Node::new(Shape::Sphere { radius: 1.0 }, [1.0; 3]));

        scene.set_position(id, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.position(id), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn model_matrix_translates() {
        let node = Node::new(Shape::Sphere { radius: 1.0 }, [1.0; 3])
            .with_position(Vec3::new(5.0, -2.0, 7.0));

        let p = node.model_matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(5.0, -2.0, 7.0)).length() < 1e-6);
    }

    #[test]
    fn model_matrix_applies_xyz_euler_order() {
        // X by 90° maps +Y onto +Z, which is how demos lay cylinders
        // along the shaft axis
        let node = Node::new(Shape::Cylinder { radius: 1.0, height: 1.0 }, [1.0; 3])
            .with_rotation(Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0));

        let p = node.model_matrix().transform_vector3(Vec3::Y);
        assert!((p - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn hex_color_expands_channels() {
        assert_eq!(hex_color(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_color(0x00ff00), [0.0, 1.0, 0.0]);
        let grey = hex_color(0x777777);
        assert!((grey[0] - 119.0 / 255.0).abs() < 1e-6);
        assert_eq!(grey[0], grey[1]);
        assert_eq!(grey[1], grey[2]);
    }
}

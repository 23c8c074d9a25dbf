use crate::constants::{DOOR_COLOR, DOOR_LEFT_NAME, DOOR_RIGHT_NAME, DOOR_SIZE};
use glam::{Vec3, Vec4};

/// Minimal scene-graph node: translation, box scale and flat color.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub position: Vec3,
    pub scale: Vec3,
    pub color: [f32; 3],
    pub children: Vec<SceneNode>,
}

/// Flattened world-space box ready for instanced drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxInstance {
    pub position: Vec3,
    pub scale: Vec3,
    pub color: Vec4,
}

impl SceneNode {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            scale: Vec3::ZERO,
            color: [0.0; 3],
            children: Vec::new(),
        }
    }

    pub fn mesh(name: impl Into<String>, position: Vec3, scale: Vec3, color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            position,
            scale,
            color,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn child_index(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|c| c.name == name)
    }

    /// Append every node with a non-zero scale to `out`, in world space.
    pub fn flatten_into(&self, parent: Vec3, out: &mut Vec<BoxInstance>) {
        let world = parent + self.position;
        if self.scale != Vec3::ZERO {
            out.push(BoxInstance {
                position: world,
                scale: self.scale,
                color: Vec4::from((Vec3::from(self.color), 1.0)),
            });
        }
        for c in &self.children {
            c.flatten_into(world, out);
        }
    }
}

/// The hero asset: a group holding the two vault doors.
pub fn vault_model() -> SceneNode {
    let half = DOOR_SIZE.x * 0.5;
    SceneNode::group("vault")
        .with_child(SceneNode::mesh(
            DOOR_LEFT_NAME,
            Vec3::new(-half, 0.0, 0.0),
            DOOR_SIZE,
            DOOR_COLOR,
        ))
        .with_child(SceneNode::mesh(
            DOOR_RIGHT_NAME,
            Vec3::new(half, 0.0, 0.0),
            DOOR_SIZE,
            DOOR_COLOR,
        ))
}

/// Where the two door parts live inside an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorParts {
    Named { left: usize, right: usize },
    /// Names missing; the first two children stand in for left and right.
    Positional { left: usize, right: usize },
    Unavailable,
}

impl DoorParts {
    /// Resolve by name first, then by position.
    pub fn resolve(root: &SceneNode) -> Self {
        let named = (root.child_index(DOOR_LEFT_NAME), root.child_index(DOOR_RIGHT_NAME));
        if let (Some(left), Some(right)) = named {
            if left != right {
                return DoorParts::Named { left, right };
            }
        }
        if root.children.len() >= 2 {
            return DoorParts::Positional { left: 0, right: 1 };
        }
        DoorParts::Unavailable
    }

    #[inline]
    pub fn indices(&self) -> Option<(usize, usize)> {
        match *self {
            DoorParts::Named { left, right } | DoorParts::Positional { left, right } => {
                Some((left, right))
            }
            DoorParts::Unavailable => None,
        }
    }
}

use super::{lerp, DoorParts, SceneNode};
use crate::constants::{DOOR_CLOSE_END, DOOR_OPEN_WIDTH, DOOR_SMOOTHING, VAULT_EXIT_LIFT};

/// Door opening and vertical exit derived from scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorPose {
    /// 1 = fully open, 0 = closed.
    pub offset: f32,
    /// World units added to the vault group's base Y.
    pub lift: f32,
}

/// Two-phase timeline over `progress` in [0, 1].
///
/// Phase A (`< DOOR_CLOSE_END`): doors close linearly from fully open.
/// Phase B: doors stay shut while the vault rises toward `VAULT_EXIT_LIFT`.
pub fn door_pose(progress: f32) -> DoorPose {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    if p < DOOR_CLOSE_END {
        DoorPose {
            offset: (1.0 - p / DOOR_CLOSE_END).clamp(0.0, 1.0),
            lift: 0.0,
        }
    } else {
        let span = 1.0 - DOOR_CLOSE_END;
        DoorPose {
            offset: 0.0,
            lift: ((p - DOOR_CLOSE_END) / span) * VAULT_EXIT_LIFT,
        }
    }
}

/// Target X for one door: pushed away from center along the side it started
/// on. `fallback_sign` applies when the door started exactly at center.
#[inline]
pub fn door_target_x(initial_x: f32, offset: f32, fallback_sign: f32) -> f32 {
    let sign = if initial_x > 0.0 {
        1.0
    } else if initial_x < 0.0 {
        -1.0
    } else {
        fallback_sign
    };
    initial_x + sign * offset.clamp(0.0, 1.0) * DOOR_OPEN_WIDTH
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RigUpdate {
    Applied,
    /// Door parts could not be found; nothing was written this frame.
    Skipped,
}

/// Per-frame driver for the vault asset.
///
/// Bound once to a loaded asset: records which children are the doors and
/// where they started.
#[derive(Clone, Copy, Debug)]
pub struct VaultRig {
    parts: DoorParts,
    initial_x: [f32; 2],
    base_y: f32,
}

impl VaultRig {
    pub fn bind(root: &SceneNode) -> Self {
        let parts = DoorParts::resolve(root);
        let initial_x = match parts.indices() {
            Some((l, r)) => [root.children[l].position.x, root.children[r].position.x],
            None => {
                log::warn!("[vault] door parts not found; door animation disabled");
                [0.0, 0.0]
            }
        };
        Self {
            parts,
            initial_x,
            base_y: root.position.y,
        }
    }

    #[inline]
    pub fn parts(&self) -> DoorParts {
        self.parts
    }

    /// Ease the asset one step toward the pose for `progress`.
    ///
    /// Never fails: a missing door skips the whole update.
    pub fn apply(&self, root: &mut SceneNode, progress: f32) -> RigUpdate {
        let Some((l, r)) = self.parts.indices() else {
            return RigUpdate::Skipped;
        };
        if l.max(r) >= root.children.len() {
            return RigUpdate::Skipped;
        }
        let pose = door_pose(progress);
        let targets = [
            door_target_x(self.initial_x[0], pose.offset, -1.0),
            door_target_x(self.initial_x[1], pose.offset, 1.0),
        ];
        for (idx, target) in [l, r].into_iter().zip(targets) {
            let door = &mut root.children[idx];
            door.position.x = lerp(door.position.x, target, DOOR_SMOOTHING);
        }
        root.position.y = lerp(root.position.y, self.base_y + pose.lift, DOOR_SMOOTHING);
        RigUpdate::Applied
    }
}

//! Transform composition and parent-space conversion.
//!
//! ```text
//! angle    = owner_rotation + angle_offset
//! raw      = owner_position + position_offset
//! position = raw + (cos angle, sin angle) * distance_offset
//! final    = convert(position, owner_parent -> destination_parent)
//! ```
//!
//! Angles are not normalized.

use bevy::prelude::*;

use super::overrides::ResolvedParams;

/// Where and how a new entity is placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnPlacement {
    /// In the owner-parent's space until converted.
    pub position: Vec2,
    pub angle: f32,
}

/// Rotation about z, in radians.
#[inline]
pub fn planar_angle(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::XYZ).2
}

/// Unit direction for `angle`: `(cos, sin)`.
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

pub fn compose(
    owner_position: Vec2,
    owner_rotation: f32,
    params: &ResolvedParams,
) -> SpawnPlacement {
    let angle = owner_rotation + params.angle_offset;
    let raw = owner_position + params.position_offset;
    SpawnPlacement {
        position: raw + direction(angle) * params.distance_offset,
        angle,
    }
}

/// Global transform of `entity`, composed from local `Transform`s up the
/// `ChildOf` chain.
///
/// Unlike `GlobalTransform`, this is current even before transform
/// propagation has run this frame. Entities without a `Transform` count as
/// identity.
pub fn hierarchy_global(world: &World, entity: Entity) -> GlobalTransform {
    let mut global = GlobalTransform::IDENTITY;
    let mut current = Some(entity);

    while let Some(e) = current {
        if let Some(local) = world.get::<Transform>(e) {
            global = GlobalTransform::from(*local) * global;
        }
        current = world.get::<ChildOf>(e).map(ChildOf::parent);
    }

    global
}

/// Re-express `point` (in `from`'s space) in `to`'s space.
///
/// Identity when `from == to`.
pub fn convert_point(world: &World, point: Vec2, from: Entity, to: Entity) -> Vec2 {
    if from == to {
        return point;
    }

    let world_point = hierarchy_global(world, from).transform_point(point.extend(0.0));
    hierarchy_global(world, to)
        .affine()
        .inverse()
        .transform_point3(world_point)
        .truncate()
}

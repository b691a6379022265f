use chunkforge_geom::{IVec3, Vec3};
use chunkforge_mesh_cpu::MeshStats;
use chunkforge_world::BlockAddress;

/// Result of a block edit: where it landed and the owning chunk's rebuilt mesh stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    pub address: BlockAddress,
    pub stats: MeshStats,
}

/// World block hit by a ray that struck a block face at `hit_point` with surface
/// normal `hit_normal`.
///
/// Blocks are centred on integer coordinates, so stepping half a block back
/// along the normal lands inside the hit block; the `+ 0.5` then floors to its centre.
pub fn target_block(hit_point: Vec3, hit_normal: Vec3) -> IVec3 {
    let inside = hit_point - hit_normal * 0.5;
    (inside + Vec3::new(0.5, 0.5, 0.5)).floor_to_ivec3()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_face_hit_selects_block_below() {
        let b = target_block(Vec3::new(3.2, 4.5, 7.9), Vec3::UP);
        assert_eq!(b, IVec3::new(3, 4, 8));
    }

    #[test]
    fn side_face_hits() {
        // Left face of block (0,0,0) sits at x = -0.5.
        let b = target_block(Vec3::new(-0.5, 0.1, -0.3), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(b, IVec3::new(0, 0, 0));
        // Forward face of block (5,2,9) sits at z = 9.5.
        let b = target_block(Vec3::new(5.4, 2.0, 9.5), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(b, IVec3::new(5, 2, 9));
    }
}

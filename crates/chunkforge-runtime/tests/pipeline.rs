use chunkforge_blocks::{BlockType, MaterialTable};
use chunkforge_chunk::{BlockGrid, TOTAL_BLOCK_COUNT};
use chunkforge_geom::{IVec3, Vec3};
use chunkforge_runtime::{PipelineError, WorldPipeline, target_block};
use chunkforge_world::{ChunkWorld, TOTAL_CHUNK_COUNT, WORLD_WIDTH_IN_BLOCKS, WorldError};
use proptest::prelude::*;

fn iron_pipeline(threads: usize) -> WorldPipeline {
    let mut p = WorldPipeline::with_threads(MaterialTable::builtin(), threads).unwrap();
    p.build(BlockType::IronBlock);
    p
}

#[test]
fn iron_world_meshes_every_chunk_shell() {
    let mut pipeline = WorldPipeline::with_threads(MaterialTable::builtin(), 2).unwrap();
    assert_eq!(pipeline.thread_count(), 2);
    let report = pipeline.build(BlockType::IronBlock);

    assert_eq!(report.per_chunk.len(), TOTAL_CHUNK_COUNT);
    for stats in report.per_chunk.values() {
        assert_eq!(stats.emitted_faces, 1536);
        assert_eq!(stats.vertices, 6144);
        assert_eq!(stats.indices, 9216);
    }
    assert_eq!(report.totals.emitted_faces, 1536 * TOTAL_CHUNK_COUNT);
    assert_eq!(report.totals.solid_blocks, TOTAL_BLOCK_COUNT * TOTAL_CHUNK_COUNT);
    for chunk in pipeline.world().chunks() {
        assert_eq!(chunk.mesh().vertex_count(), 6144);
        assert_eq!(chunk.mesh().validate(), Ok(()));
    }
}

#[test]
fn global_pool_matches_dedicated_pool() {
    let a = iron_pipeline(0);
    let b = iron_pipeline(3);
    for (ca, cb) in a.world().chunks().iter().zip(b.world().chunks()) {
        assert_eq!(ca.mesh(), cb.mesh());
    }
}

#[test]
fn rebuilding_twice_is_stable() {
    let mut p = iron_pipeline(2);
    let first: Vec<_> = p.world().chunks().iter().map(|c| c.mesh().clone()).collect();
    p.build(BlockType::IronBlock);
    for (c, m) in p.world().chunks().iter().zip(&first) {
        assert_eq!(c.mesh(), m);
    }
}

#[test]
fn world_removal_rebuilds_only_its_chunk() {
    let mut p = iron_pipeline(2);
    let before: Vec<_> = p.world().chunks().iter().map(|c| c.mesh().clone()).collect();

    // World (17, 0, 35) is local (1, 0, 3) of chunk (1, 2).
    let outcome = p.remove_block_at(IVec3::new(17, 0, 35)).unwrap();
    assert_eq!(outcome.address.chunk_index, ChunkWorld::chunk_index(1, 2));
    assert_eq!(outcome.address.local, IVec3::new(1, 0, 3));
    // A bottom-edge block: one shell face lost, five inner faces exposed.
    assert_eq!(outcome.stats.emitted_faces, 1536 - 1 + 5);

    for (i, (c, old)) in p.world().chunks().iter().zip(&before).enumerate() {
        if i == outcome.address.chunk_index {
            assert_ne!(c.mesh(), old);
        } else {
            assert_eq!(c.mesh(), old);
        }
    }
}

#[test]
fn removal_errors_leave_world_untouched() {
    let mut p = iron_pipeline(1);
    let err = p
        .remove_block_at(IVec3::new(WORLD_WIDTH_IN_BLOCKS as i32, 0, 0))
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::World(WorldError::WorldPositionOutOfRange { .. })
    ));
    assert!(p.remove_block(TOTAL_CHUNK_COUNT, 0).is_err());
    assert!(p.remove_block(0, TOTAL_BLOCK_COUNT).is_err());
    assert!(p.rebuild_chunk(TOTAL_CHUNK_COUNT).is_err());
    for c in p.world().chunks() {
        assert_eq!(c.grid().solid_count(), TOTAL_BLOCK_COUNT);
    }
}

#[test]
fn removing_a_removed_block_is_harmless() {
    let mut p = iron_pipeline(1);
    let i = BlockGrid::index(8, 8, 8);
    let once = p.remove_block(5, i).unwrap();
    let twice = p.remove_block(5, i).unwrap();
    assert_eq!(once, twice);
    // An interior hole exposes the six faces around it.
    assert_eq!(once.emitted_faces, 1536 + 6);
}

#[test]
fn ray_hit_then_remove() {
    let mut p = iron_pipeline(1);
    // Hit the top face of world block (40, 15, 20).
    let target = target_block(Vec3::new(40.1, 15.5, 19.8), Vec3::UP);
    assert_eq!(target, IVec3::new(40, 15, 20));
    let outcome = p.remove_block_at(target).unwrap();
    let chunk = p.world().get_chunk(outcome.address.chunk_index).unwrap();
    assert!(!chunk.get_block(outcome.address.block_index).unwrap().is_solid());
}

#[test]
fn reserved_buffers_keep_capacity() {
    let mut p = WorldPipeline::new(MaterialTable::builtin());
    p.set_reserve_worst_case(true);
    p.initialize();
    p.fill(BlockType::Stone);
    let (stats, _) = p.build_meshes();
    assert_eq!(stats.len(), TOTAL_CHUNK_COUNT);
    assert!(p.world().chunks().iter().all(|c| c.mesh().vertex_capacity() >= 4096 * 24));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    // Removing any in-world block changes only the owning chunk's solid count.
    #[test]
    fn remove_anywhere(x in 0i32..160, y in 0i32..16, z in 0i32..160) {
        let mut p = WorldPipeline::new(MaterialTable::builtin());
        p.build(BlockType::Dirt);
        let outcome = p.remove_block_at(IVec3::new(x, y, z)).unwrap();
        for (i, c) in p.world().chunks().iter().enumerate() {
            let expect = if i == outcome.address.chunk_index { TOTAL_BLOCK_COUNT - 1 } else { TOTAL_BLOCK_COUNT };
            prop_assert_eq!(c.grid().solid_count(), expect);
        }
        prop_assert_eq!(
            p.world().get_chunk(outcome.address.chunk_index).unwrap().mesh().vertex_count(),
            outcome.stats.vertices
        );
    }
}

//! Parallel world pipeline: initialize, fill and mesh every chunk, then apply edits.
#![forbid(unsafe_code)]

mod edit;

use std::time::Instant;

use chunkforge_blocks::{BlockType, MaterialTable};
use chunkforge_chunk::Chunk;
use chunkforge_geom::IVec3;
use chunkforge_mesh_cpu::{MeshStats, build_chunk_mesh};
use chunkforge_world::{ChunkWorld, WorldError};
use hashbrown::HashMap;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;

pub use edit::{EditOutcome, target_block};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to build mesh thread pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Timings and mesh counters for one full world build.
#[derive(Clone, Debug, Default)]
pub struct PipelineReport {
    pub t_init_ms: u32,
    pub t_fill_ms: u32,
    pub t_mesh_ms: u32,
    pub t_total_ms: u32,
    pub totals: MeshStats,
    /// Keyed by chunk index.
    pub per_chunk: HashMap<usize, MeshStats>,
}

#[inline]
fn elapsed_ms(t0: Instant) -> u32 {
    t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

/// Runs `op` inside `pool` when there is one, otherwise on rayon's global pool.
fn install<R, F>(pool: Option<&ThreadPool>, op: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    match pool {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

/// Owns the world and the material table and drives mesh builds over them.
pub struct WorldPipeline {
    world: ChunkWorld,
    materials: MaterialTable,
    pool: Option<ThreadPool>,
    reserve_worst_case: bool,
}

impl WorldPipeline {
    /// Uses rayon's global pool.
    pub fn new(materials: MaterialTable) -> Self {
        Self {
            world: ChunkWorld::new(),
            materials,
            pool: None,
            reserve_worst_case: false,
        }
    }

    /// Uses a dedicated pool of `threads` workers; `0` falls back to the global pool.
    pub fn with_threads(materials: MaterialTable, threads: usize) -> Result<Self, PipelineError> {
        let mut pipeline = Self::new(materials);
        if threads > 0 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("chunkforge-mesh-{i}"))
                .build()?;
            log::debug!("mesh pool started with {threads} threads");
            pipeline.pool = Some(pool);
        }
        Ok(pipeline)
    }

    /// Pre-size every chunk's mesh buffer for the densest chunk during initialization.
    pub fn set_reserve_worst_case(&mut self, reserve: bool) {
        self.reserve_worst_case = reserve;
    }

    #[inline]
    pub fn world(&self) -> &ChunkWorld {
        &self.world
    }

    #[inline]
    pub fn world_mut(&mut self) -> &mut ChunkWorld {
        &mut self.world
    }

    #[inline]
    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// Worker count of the pool phases run on.
    pub fn thread_count(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Phase 1: every block of every chunk becomes `Empty` at its own position.
    pub fn initialize(&mut self) -> u32 {
        let t0 = Instant::now();
        let reserve = self.reserve_worst_case;
        let chunks = self.world.chunks_mut();
        install(self.pool.as_ref(), || {
            chunks.par_iter_mut().for_each(|chunk| {
                chunk.grid_mut().initialize();
                if reserve {
                    chunk.reserve_mesh_worst_case();
                }
            })
        });
        let ms = elapsed_ms(t0);
        log::info!("initialized {} chunks in {ms} ms", chunks.len());
        ms
    }

    /// Phase 2: every block of every chunk gets `block_type`.
    pub fn fill(&mut self, block_type: BlockType) -> u32 {
        let t0 = Instant::now();
        let chunks = self.world.chunks_mut();
        install(self.pool.as_ref(), || {
            chunks
                .par_iter_mut()
                .for_each(|chunk| chunk.grid_mut().fill(block_type))
        });
        let ms = elapsed_ms(t0);
        log::info!("filled {} chunks with {block_type} in {ms} ms", chunks.len());
        ms
    }

    /// Phase 3: rebuild every chunk's mesh. Returns per-chunk stats in index order.
    pub fn build_meshes(&mut self) -> (Vec<MeshStats>, u32) {
        let t0 = Instant::now();
        let materials = &self.materials;
        let chunks = self.world.chunks_mut();
        let stats: Vec<MeshStats> = install(self.pool.as_ref(), || {
            chunks
                .par_iter_mut()
                .map(|chunk| build_chunk_mesh(chunk, materials))
                .collect()
        });
        let ms = elapsed_ms(t0);
        log::info!("meshed {} chunks in {ms} ms", stats.len());
        (stats, ms)
    }

    /// Runs the three phases back to back; each finishes before the next starts.
    pub fn build(&mut self, block_type: BlockType) -> PipelineReport {
        let t0 = Instant::now();
        let t_init_ms = self.initialize();
        let t_fill_ms = self.fill(block_type);
        let (stats, t_mesh_ms) = self.build_meshes();

        let mut totals = MeshStats::default();
        let mut per_chunk = HashMap::with_capacity(stats.len());
        for (index, s) in stats.into_iter().enumerate() {
            totals += s;
            per_chunk.insert(index, s);
        }
        let report = PipelineReport {
            t_init_ms,
            t_fill_ms,
            t_mesh_ms,
            t_total_ms: elapsed_ms(t0),
            totals,
            per_chunk,
        };
        log::info!(
            "world built in {} ms: {} faces, {} vertices, {} indices",
            report.t_total_ms,
            totals.emitted_faces,
            totals.vertices,
            totals.indices
        );
        report
    }

    /// Rebuilds one chunk's mesh on the calling thread.
    pub fn rebuild_chunk(&mut self, chunk_index: usize) -> Result<MeshStats, PipelineError> {
        let chunk: &mut Chunk = self.world.get_chunk_mut(chunk_index)?;
        Ok(build_chunk_mesh(chunk, &self.materials))
    }

    /// Removes a block by chunk and slot, then rebuilds that chunk.
    pub fn remove_block(
        &mut self,
        chunk_index: usize,
        block_index: usize,
    ) -> Result<MeshStats, PipelineError> {
        self.world.remove_block(chunk_index, block_index)?;
        self.rebuild_chunk(chunk_index)
    }

    /// Removes the block at a world position and rebuilds only the chunk that owns it.
    pub fn remove_block_at(&mut self, world: IVec3) -> Result<EditOutcome, PipelineError> {
        let address = self.world.remove_block_at(world)?;
        let stats = self.rebuild_chunk(address.chunk_index)?;
        log::info!(
            "removed block at ({}, {}, {}) in chunk {}; rebuilt with {} faces",
            world.x,
            world.y,
            world.z,
            address.chunk_index,
            stats.emitted_faces
        );
        Ok(EditOutcome { address, stats })
    }
}

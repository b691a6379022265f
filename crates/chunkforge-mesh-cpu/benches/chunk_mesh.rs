use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use chunkforge_blocks::{BlockType, MaterialTable};
use chunkforge_chunk::{BlockGrid, Chunk, HEIGHT, LENGTH, WIDTH};
use chunkforge_mesh_cpu::build_chunk_mesh;

fn filled_chunk(t: BlockType) -> Chunk {
    let mut chunk = Chunk::at(0, 0);
    chunk.grid_mut().fill(t);
    chunk
}

fn checkerboard_chunk() -> Chunk {
    let mut chunk = Chunk::at(0, 0);
    for y in 0..HEIGHT {
        for z in 0..LENGTH {
            for x in 0..WIDTH {
                if (x + y + z) % 2 == 0 {
                    chunk
                        .grid_mut()
                        .set_block(BlockGrid::index(x, y, z), BlockType::Stone)
                        .unwrap();
                }
            }
        }
    }
    chunk
}

fn bench_mesh_solid(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_mesh_solid");
    let table = MaterialTable::builtin();
    let mut chunk = filled_chunk(BlockType::IronBlock);
    group.bench_function("iron_16x16x16", |b| {
        b.iter(|| {
            let stats = build_chunk_mesh(&mut chunk, &table);
            black_box(stats);
        })
    });
    group.finish();
}

fn bench_mesh_checkerboard(c: &mut Criterion) {
    // Worst case: every solid block shows all six faces.
    let mut group = c.benchmark_group("chunk_mesh_checkerboard");
    let table = MaterialTable::builtin();
    let mut chunk = checkerboard_chunk();
    group.bench_function("stone_16x16x16", |b| {
        b.iter(|| {
            let stats = build_chunk_mesh(&mut chunk, &table);
            black_box(stats);
        })
    });
    group.finish();
}

fn long_config() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3))
        .sample_size(20)
}

criterion_group! {
    name = benches;
    config = long_config();
    targets =
        bench_mesh_solid,
        bench_mesh_checkerboard
}
criterion_main!(benches);

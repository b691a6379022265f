mod config;

use std::error::Error;
use std::path::PathBuf;

use chunkforge_blocks::{BlockType, MaterialTable};
use chunkforge_chunk::{BlockGrid, Chunk, VertexData};
use chunkforge_geom::IVec3;
use chunkforge_mesh_cpu::{MeshStats, build_chunk_mesh};
use chunkforge_runtime::WorldPipeline;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "chunkforge", about = "Build chunk meshes for a fixed voxel world")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Material table TOML (overrides the config)
    #[arg(long, global = true)]
    materials: Option<PathBuf>,
    /// Block type every chunk is filled with
    #[arg(long, global = true)]
    fill: Option<BlockType>,
    /// Block to remove after the first build, as x,y,z (repeatable)
    #[arg(long, global = true, value_parser = parse_position)]
    remove: Vec<IVec3>,
    /// Mesh worker threads, 0 for the global pool
    #[arg(long, global = true)]
    threads: Option<usize>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Build the whole 10x10 chunk world (default)
    World,
    /// Build a single chunk; removals are chunk-local positions
    Chunk,
}

fn parse_position(s: &str) -> Result<IVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts[..] else {
        return Err(format!("expected x,y,z but got `{s}`"));
    };
    let axis = |v: &str| v.parse::<i32>().map_err(|e| format!("bad coordinate `{v}`: {e}"));
    Ok(IVec3::new(axis(x)?, axis(y)?, axis(z)?))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::default(),
    };
    if let Some(m) = cli.materials.clone() {
        cfg.materials = Some(m);
    }
    if let Some(fill) = cli.fill {
        cfg.world.fill = fill;
    }
    if let Some(threads) = cli.threads {
        cfg.threads = threads;
    }
    if !cli.remove.is_empty() {
        cfg.world.remove = cli.remove.iter().map(|p| [p.x, p.y, p.z]).collect();
    }

    let materials = match &cfg.materials {
        Some(path) => {
            log::info!("loading materials from {}", path.display());
            MaterialTable::from_path(path)?
        }
        None => MaterialTable::builtin(),
    };

    match cli.command.unwrap_or(Command::World) {
        Command::World => run_world(&cfg, materials),
        Command::Chunk => run_chunk(&cfg, &materials),
    }
}

fn run_world(cfg: &AppConfig, materials: MaterialTable) -> Result<(), Box<dyn Error>> {
    let mut pipeline = WorldPipeline::with_threads(materials, cfg.threads)?;
    pipeline.set_reserve_worst_case(cfg.world.reserve_worst_case);
    log::info!(
        "building world with {} on {} threads",
        cfg.world.fill,
        pipeline.thread_count()
    );
    let report = pipeline.build(cfg.world.fill);
    println!(
        "world: {} chunks, init {} ms, fill {} ms, mesh {} ms, total {} ms",
        report.per_chunk.len(),
        report.t_init_ms,
        report.t_fill_ms,
        report.t_mesh_ms,
        report.t_total_ms
    );
    print_stats("world", &report.totals);

    for p in cfg.world.removals() {
        match pipeline.remove_block_at(p) {
            Ok(outcome) => {
                let chunk = pipeline.world().get_chunk(outcome.address.chunk_index)?;
                print_stats(
                    &format!(
                        "remove ({}, {}, {}) -> chunk {}",
                        p.x, p.y, p.z, outcome.address.chunk_index
                    ),
                    &outcome.stats,
                );
                print_bounds(chunk);
            }
            Err(e) => log::warn!("skipping removal at ({}, {}, {}): {e}", p.x, p.y, p.z),
        }
    }
    Ok(())
}

fn run_chunk(cfg: &AppConfig, materials: &MaterialTable) -> Result<(), Box<dyn Error>> {
    let mut chunk = Chunk::at(0, 0);
    if cfg.world.reserve_worst_case {
        chunk.reserve_mesh_worst_case();
    }
    chunk.grid_mut().initialize();
    chunk.grid_mut().fill(cfg.world.fill);
    let stats = build_chunk_mesh(&mut chunk, materials);
    print_stats("chunk", &stats);
    print_bounds(&chunk);

    for p in cfg.world.removals() {
        match BlockGrid::index_of(p) {
            Ok(index) => {
                chunk.remove_block(index)?;
                let stats = build_chunk_mesh(&mut chunk, materials);
                print_stats(&format!("remove ({}, {}, {})", p.x, p.y, p.z), &stats);
            }
            Err(e) => log::warn!("skipping removal: {e}"),
        }
    }
    Ok(())
}

fn print_stats(label: &str, s: &MeshStats) {
    println!(
        "{label}: {} solid, {} faces ({} culled), {} vertices, {} indices",
        s.solid_blocks, s.emitted_faces, s.culled_faces, s.vertices, s.indices
    );
}

fn print_bounds(chunk: &Chunk) {
    let mesh: &VertexData = chunk.mesh();
    let origin = chunk.world_origin();
    match mesh.bounds() {
        Some(b) => println!(
            "  bounds ({:.1}, {:.1}, {:.1})..({:.1}, {:.1}, {:.1}) at origin ({}, {}, {})",
            b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z, origin.x, origin.y, origin.z
        ),
        None => println!("  empty mesh"),
    }
}

//! # maplaser
//!
//! Turns a city street map into two laser-ready documents:
//! - an SVG drawing sized in inches, with water, parks, roads, and text layers
//! - an XCS laser-job project carrying per-element power, speed, and density
//!
//! ## Architecture
//!
//! maplaser is organized as a workspace with multiple crates:
//!
//! 1. **maplaser-core** - Categories, processing modes, units, id generators
//! 2. **maplaser-profiles** - Machine/material laser profiles and validation
//! 3. **maplaser-settings** - Theme inclusion flags and colors
//! 4. **maplaser-render** - Coordinate transform, flattening, extraction, export
//! 5. **maplaser** - Orchestration, atomic file output, and the CLI binary

use anyhow::Context;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub use maplaser_core::{
    CanvasSpec, FeatureCategory, IdGenerator, PhysicalSize, ProcessingMode,
    SequentialIdGenerator, UuidGenerator,
};
pub use maplaser_profiles::{LaserOperation, LaserProfile, Material, ProfileError};
pub use maplaser_render::{
    DualExport, DualFormatExporter, ExtractionStats, FeatureRecord, MapData, RenderError,
    XcsProject,
};
pub use maplaser_settings::{LaserThemeOptions, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so the CLI summary on stdout stays clean.
/// `RUST_LOG` directives are honored; INFO applies when it sets no level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(directives.as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Tracing filter from `RUST_LOG`-style directives with an INFO default
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Files written by [`generate_outputs`]
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub svg_path: PathBuf,
    pub xcs_path: PathBuf,
    pub stats: ExtractionStats,
}

/// Read a map snapshot from a JSON file
pub fn load_map(path: &Path) -> anyhow::Result<MapData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read map data {}", path.display()))?;
    let map: MapData = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse map data {}", path.display()))?;
    tracing::info!(
        "Loaded map of {}, {}: {} nodes, {} edges",
        map.city,
        map.country,
        map.roads.nodes.len(),
        map.roads.edges.len()
    );
    Ok(map)
}

/// `<stem>.svg` and `<stem>.xcs`
pub fn output_paths(stem: &Path) -> (PathBuf, PathBuf) {
    let with_suffix = |suffix: &str| {
        let mut name: OsString = stem.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    };
    (with_suffix(".svg"), with_suffix(".xcs"))
}

/// Render both documents and persist them next to `output_stem`
///
/// Size, profile, and theme are validated before any map processing. Both
/// documents are rendered in memory first; each file is then written
/// through a temporary file and renamed into place.
pub fn generate_outputs(
    map: &MapData,
    profile: &LaserProfile,
    size: &str,
    theme: &LaserThemeOptions,
    output_stem: &Path,
    ids: &mut dyn IdGenerator,
) -> anyhow::Result<GeneratedFiles> {
    let physical: PhysicalSize = size.parse()?;
    profile.validate().context("Invalid laser profile")?;
    theme.validate().context("Invalid laser theme options")?;

    let canvas = CanvasSpec::from_physical(physical);
    let export = DualFormatExporter::new(&canvas, profile, theme)
        .export(map, ids)
        .with_context(|| format!("Failed to render map of {}", map.city))?;
    let xcs_json = export.xcs_json().context("Failed to serialize XCS project")?;

    let (svg_path, xcs_path) = output_paths(output_stem);
    write_atomic(&svg_path, &export.svg)?;
    write_atomic(&xcs_path, &xcs_json)?;

    tracing::info!(
        "Wrote {} and {}",
        svg_path.display(),
        xcs_path.display()
    );

    Ok(GeneratedFiles {
        svg_path,
        xcs_path,
        stats: export.stats,
    })
}

/// Write `contents` to `path` via a temporary file in the same directory
pub fn write_atomic(path: &Path, contents: &str) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to move output into {}", path.display()))?;

    Ok(())
}

use anyhow::Context;
use maplaser::{
    generate_outputs, init_logging, load_map, LaserProfile, LaserThemeOptions, UuidGenerator,
    BUILD_DATE, VERSION,
};
use std::env;
use std::path::Path;
use std::process;

const USAGE: &str = "<map.json> <profile.toml|json> <WxH> <output-stem> [theme.json|toml]";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("maplaser");

    if args.iter().skip(1).any(|a| a == "--version" || a == "-V") {
        println!("maplaser {} (built {})", VERSION, BUILD_DATE);
        return Ok(());
    }
    if args.len() != 5 && args.len() != 6 {
        eprintln!("Usage: {} {}", program, USAGE);
        process::exit(1);
    }

    init_logging()?;

    let map_path = Path::new(&args[1]);
    let profile_path = Path::new(&args[2]);
    let size = &args[3];
    let output_stem = Path::new(&args[4]);

    let profile = LaserProfile::load_from_file(profile_path)
        .with_context(|| format!("Failed to load laser profile {}", profile_path.display()))?;
    let theme = match args.get(5) {
        Some(theme_path) => LaserThemeOptions::load_from_file(Path::new(theme_path))
            .with_context(|| format!("Failed to load theme {}", theme_path))?,
        None => LaserThemeOptions::default(),
    };
    let map = load_map(map_path)?;

    let files = generate_outputs(
        &map,
        &profile,
        size,
        &theme,
        output_stem,
        &mut UuidGenerator,
    )?;

    println!(
        "Wrote '{}' and '{}' ({} features, {} skipped)",
        files.svg_path.display(),
        files.xcs_path.display(),
        files.stats.total_emitted(),
        files.stats.total_skipped()
    );

    Ok(())
}

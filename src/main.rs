use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hex_terrain::ascii;
use hex_terrain::builder::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use hex_terrain::export::{self, DEFAULT_SVG_PATH};
use hex_terrain::{generate_map, logging, MapConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "hex_terrain")]
#[command(about = "Generate a hex terrain map for tabletop games")]
struct Args {
    /// Height of the map in hexes
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Width of the map in hexes
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Build in parallel wavefronts
    #[arg(long)]
    parallel: bool,

    /// SVG output path
    #[arg(short, long, default_value = DEFAULT_SVG_PATH)]
    output: PathBuf,

    /// Also write the text dump to this file
    #[arg(long)]
    text: Option<PathBuf>,

    /// Also write the grid as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the text dump to stdout
    #[arg(long)]
    print: bool,
}

fn run(args: &Args) -> Result<()> {
    let config = MapConfig {
        height: args.height,
        width: args.width,
        seed: args.seed,
        parallel: args.parallel,
    };
    let seeds = config.seeds();

    log::info!("Generating hex map with seed: {}", seeds.master);
    log::info!("Map size: {}x{} hexes", config.height, config.width);
    log::debug!("{}", seeds);

    let grid = generate_map(&config, &seeds)?;
    log::info!("Terrain distribution:\n{}", ascii::stats_summary(&grid).trim_end());

    if args.print {
        ascii::print_text_map(&grid);
    }
    if let Some(ref path) = args.text {
        export::export_text(&grid, path)?;
        log::info!("Text map saved to: {}", path.display());
    }
    if let Some(ref path) = args.json {
        export::export_json(&grid, path)?;
        log::info!("JSON map saved to: {}", path.display());
    }

    export::export_svg(&grid, &args.output)?;
    log::info!("Map saved to: {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to generate map: {}", e);
            ExitCode::FAILURE
        }
    }
}

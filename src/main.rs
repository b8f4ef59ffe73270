use std::error::Error;

use clap::Parser;
use sidestep::{find_path, path_length, simplify_path, GeoPoint, Obstacle, Options};

fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lon\", got {:?}", s))?;
    let lat = lat.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let lon = lon.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(GeoPoint::new(lat, lon))
}

#[derive(Parser)]
struct Cli {
    /// Latitude of the start point
    start_lat: f64,

    /// Longitude of the start point
    start_lon: f64,

    /// Latitude of the end point
    end_lat: f64,

    /// Longitude of the end point
    end_lon: f64,

    /// Position to keep clear of, as "lat,lon"; may be repeated
    #[arg(short = 'a', long = "avoid", value_parser = parse_point)]
    avoid: Vec<GeoPoint>,

    /// Minimum clearance from every avoided position, in meters
    #[arg(long, default_value_t = sidestep::DEFAULT_CLEARANCE)]
    clearance: f64,

    /// Search grid resolution, in degrees
    #[arg(long, default_value_t = sidestep::DEFAULT_CELL_SIZE)]
    cell_size: f64,

    /// Bounding box expansion, in degrees
    #[arg(long, default_value_t = sidestep::DEFAULT_MARGIN)]
    margin: f64,

    /// Limit on the number of expanded grid cells
    #[arg(long, default_value_t = sidestep::DEFAULT_STEP_LIMIT)]
    step_limit: usize,

    /// Drop redundant waypoints from the result
    #[arg(long)]
    simplify: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let start = GeoPoint::new(cli.start_lat, cli.start_lon);
    let goal = GeoPoint::new(cli.end_lat, cli.end_lon);
    let obstacles: Vec<Obstacle> = cli
        .avoid
        .iter()
        .map(|&position| Obstacle { position })
        .collect();
    let options = Options {
        cell_size: cli.cell_size,
        clearance: cli.clearance,
        margin: cli.margin,
        step_limit: cli.step_limit,
    };

    let mut path = find_path(start, goal, &obstacles, &options)?;
    if cli.simplify {
        path = simplify_path(&path, &obstacles, &options);
    }

    log::info!("path length: {:.0} m", path_length(&path));

    println!("{{");
    println!("  \"type\": \"FeatureCollection\",");
    println!("  \"features\": [");
    println!("    {{");
    println!("      \"type\": \"Feature\",");
    println!("      \"properties\": {{}},");

    println!("      \"geometry\": {{");
    println!("        \"type\": \"LineString\",");
    println!("        \"coordinates\": [");

    let mut points = path.iter().peekable();
    while let Some(point) = points.next() {
        let suffix = if points.peek().is_some() { "," } else { "" };
        println!("          [{}, {}]{}", point.lon, point.lat, suffix);
    }

    println!("        ]");
    println!("      }}");
    println!("    }}");
    println!("  ]");
    println!("}}");

    Ok(())
}

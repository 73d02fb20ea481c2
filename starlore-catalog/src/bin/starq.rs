use clap::{Parser, Subcommand, ValueEnum};
use starlore_catalog::catalog::Catalog;
use starlore_catalog::constellation::Unresolved;
use starlore_catalog::profile::{derive_report, StarReport};
use starlore_catalog::spectral::classify;
use starlore_core::{difficulty, solve_distance_modulus, solve_magnitude_flux, Quantity};
use std::path::PathBuf;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "starq")]
#[command(about = "Star properties from the Hipparcos main catalog")]
struct Cli {
    /// Path to hip_main.dat (required by `info`)
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full amateur + intrinsic report for a star
    Info {
        /// HIP catalog number
        hip: u32,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Solve the distance modulus m - M = 5*log10(d/10); mark the unknown slot with `x`
    Dm {
        /// Apparent magnitude, or `x`
        m: String,
        /// Absolute magnitude, or `x`
        abs: String,
        /// Distance in parsecs, or `x`
        d: String,
    },
    /// Solve the magnitude definition m = -2.5*log10(F/F0); mark the unknown slot with `x`
    Magflux {
        /// Apparent magnitude, or `x`
        m: String,
        /// Flux in W/m^2, or `x`
        flux: String,
    },
    /// Difficulty of observing an object of the given magnitude
    Diff {
        /// Apparent magnitude
        magnitude: f64,
    },
    /// Decompose a spectral type into luminosity group and color class
    Classify {
        /// Spectral type string, e.g. G2V, M3III, DA2, sdB
        spectral_type: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { hip, format } => {
            let path = cli
                .catalog
                .ok_or_else(|| anyhow::anyhow!("`info` requires --catalog <hip_main.dat>"))?;
            let catalog = Catalog::load(&path)?;
            let record = catalog.get(hip)?;
            let report = derive_report(&record, &Unresolved)?;
            match format {
                OutputFormat::Table => print_table(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Commands::Dm { m, abs, d } => {
            let result = solve_distance_modulus(parse_slot(&m), parse_slot(&abs), parse_slot(&d))?;
            println!("{result}");
        }
        Commands::Magflux { m, flux } => {
            let result = solve_magnitude_flux(parse_slot(&m), parse_slot(&flux))?;
            println!("{result}");
        }
        Commands::Diff { magnitude } => {
            println!("{}", difficulty(magnitude)?);
        }
        Commands::Classify { spectral_type } => {
            let class = classify(&spectral_type);
            println!("group: {}", class.group);
            println!("color: {}", class.color);
        }
    }

    Ok(())
}

/// A solver slot from the command line: numeric, or anything else (`x` by
/// convention) for the unknown.
fn parse_slot(token: &str) -> Quantity {
    token.parse().map(Quantity::Known).unwrap_or(Quantity::Unknown)
}

fn print_table(report: &StarReport) {
    println!("=== For Amateur Astronomers ===");
    let a = &report.amateur;
    println!("{:22} {}", "name:", a.name);
    println!("{:22} {}", "constellation:", a.constellation);
    println!("{:22} {}", "right ascension:", a.right_ascension);
    println!("{:22} {}", "declination:", a.declination);
    println!("{:22} {}", "apparent magnitude:", a.apparent_magnitude);
    println!("{:22} {}", "requirements to view:", a.viewing_requirement);
    println!("{:22} {}", "distance:", a.distance);

    println!("\n=== Intrinsic Properties ===");
    let p = &report.intrinsic;
    println!("{:22} {}", "mass:", p.mass);
    println!("{:22} {}", "temperature:", p.temperature);
    println!("{:22} {}", "type:", p.luminosity_type);
    println!("{:22} {}", "absolute magnitude:", p.absolute_magnitude);
    println!("{:22} {}", "radius:", p.radius);
    println!("{:22} {}", "age:", p.age);
    println!("{:22} {}", "exoplanets:", p.exoplanets);
}

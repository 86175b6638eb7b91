use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use exterior_ballistics::{
    OverrideOptions, ShotContext, Trajectory, TrajectoryIntegrator, TrajectorySample, WeaponProfile,
};

#[derive(Parser)]
#[command(name = "trajectory-cli")]
#[command(author = "Ballistics Engine Team")]
#[command(version = "0.1.0")]
#[command(about = "Fixed-step exterior-ballistics trajectory calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a single trajectory
    Trajectory(TrajectoryArgs),

    /// Display model information
    Info,
}

#[derive(Args)]
struct TrajectoryArgs {
    /// Weapon profile JSON file; flags below override its fields
    #[arg(short = 'w', long)]
    weapon: Option<PathBuf>,

    /// Muzzle velocity (m/s)
    #[arg(short = 'v', long)]
    velocity: Option<f64>,

    /// Drag coefficient
    #[arg(long)]
    drag_coefficient: Option<f64>,

    /// Bullet weight (grams)
    #[arg(short = 'm', long)]
    weight: Option<f64>,

    /// Bullet diameter (millimeters)
    #[arg(short = 'd', long)]
    diameter: Option<f64>,

    /// Ballistic coefficient (recorded, not used by the model)
    #[arg(short = 'b', long)]
    bc: Option<f64>,

    /// Weapon default launch angle (degrees)
    #[arg(long)]
    default_angle: Option<f64>,

    /// Launch angle override (degrees)
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Altitude (meters)
    #[arg(long)]
    altitude: Option<f64>,

    /// Temperature (Celsius)
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,

    /// Humidity (percentage 0-100)
    #[arg(long)]
    humidity: Option<f64>,

    /// Wind speed (m/s)
    #[arg(long)]
    wind_speed: Option<f64>,

    /// Wind angle (degrees, 0 = along the line of fire, 90 = upward)
    #[arg(long, allow_negative_numbers = true)]
    wind_angle: Option<f64>,

    /// Latitude (degrees)
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Disable spin drift
    #[arg(long)]
    no_spin_drift: bool,

    /// Disable the Coriolis effect
    #[arg(long)]
    no_coriolis: bool,

    /// Fail instead of looping past this many samples
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Output format
    #[arg(short = 'o', long, default_value = "table")]
    output: OutputFormat,

    /// Full output (show all trajectory points)
    #[arg(long)]
    full: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Serialize)]
struct TrajectoryReport<'a> {
    weapon: &'a WeaponProfile,
    context: &'a ShotContext,
    overrides: &'a OverrideOptions,
    air_density: f64,
    adjusted_speed: f64,
    range: f64,
    max_height: f64,
    time_of_flight: f64,
    trajectory: &'a [TrajectorySample],
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Trajectory(args) => run_trajectory(args)?,

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      EXTERIOR BALLISTICS v0.1.0        ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Fixed-step (10 ms) trajectory          ║");
            println!("║ integration to ground impact.          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Effects:                               ║");
            println!("║ • Static drag coefficient              ║");
            println!("║ • Barometric + humidity air density    ║");
            println!("║ • Wind                                 ║");
            println!("║ • Coriolis (latitude)                  ║");
            println!("║ • Linear spin drift                    ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn run_trajectory(args: TrajectoryArgs) -> Result<(), Box<dyn Error>> {
    let mut weapon = match &args.weapon {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read weapon file {}: {e}", path.display()))?;
            serde_json::from_str::<WeaponProfile>(&text)
                .map_err(|e| format!("invalid weapon file {}: {e}", path.display()))?
        }
        None => WeaponProfile::default(),
    };

    if let Some(v) = args.velocity {
        weapon.initial_speed = v;
    }
    if let Some(cd) = args.drag_coefficient {
        weapon.drag_coefficient = cd;
    }
    if let Some(g) = args.weight {
        weapon.bullet_weight_g = g;
    }
    if let Some(mm) = args.diameter {
        weapon.bullet_diameter_mm = mm;
    }
    if let Some(bc) = args.bc {
        weapon.ballistic_coefficient = bc;
    }
    if let Some(angle) = args.default_angle {
        weapon.default_angle = angle;
    }

    let context = ShotContext::default();
    let overrides = OverrideOptions {
        altitude: args.altitude,
        temperature: args.temperature,
        humidity: args.humidity,
        wind_speed: args.wind_speed,
        wind_angle: args.wind_angle,
        angle: args.angle,
        spin_drift: args.no_spin_drift.then_some(false),
        coriolis_effect: args.no_coriolis.then_some(false),
        latitude: args.latitude,
    };

    let drag_force_nonzero = weapon.drag_coefficient != 0.0
        && weapon.bullet_diameter_mm != 0.0
        && weapon.initial_speed != 0.0;
    if weapon.bullet_weight_g == 0.0 && drag_force_nonzero {
        eprintln!("Warning: bullet weight is 0 g; drag terms will not be finite.");
    }

    let mut integrator = TrajectoryIntegrator::new(&weapon, &context, &overrides);
    if let Some(limit) = args.max_iterations {
        integrator = integrator.with_max_iterations(limit);
    }
    let trajectory = integrator.integrate()?;

    match args.output {
        OutputFormat::Json => {
            let report = TrajectoryReport {
                weapon: &weapon,
                context: &context,
                overrides: &overrides,
                air_density: integrator.air_density(),
                adjusted_speed: integrator.adjusted_speed(),
                range: trajectory.range(),
                max_height: trajectory.max_height(),
                time_of_flight: trajectory.time_of_flight(),
                trajectory: trajectory.samples(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        OutputFormat::Csv => {
            println!("time,x,y,velocity_x,velocity_y");
            for p in &trajectory {
                println!(
                    "{:.2},{:.3},{:.3},{:.3},{:.3}",
                    p.time, p.x, p.y, p.velocity_x, p.velocity_y
                );
            }
        }

        OutputFormat::Table => display_table(&integrator, &trajectory, args.full),
    }

    Ok(())
}

fn display_table(integrator: &TrajectoryIntegrator, trajectory: &Trajectory, full: bool) {
    println!("╔════════════════════════════════════════╗");
    println!("║         TRAJECTORY RESULTS             ║");
    println!("╠════════════════════════════════════════╣");
    println!("║ Range:             {:>8.2} m          ║", trajectory.range());
    println!("║ Max Height:        {:>8.2} m          ║", trajectory.max_height());
    println!("║ Time of Flight:    {:>8.2} s          ║", trajectory.time_of_flight());
    println!("║ Adjusted Speed:    {:>8.2} m/s        ║", integrator.adjusted_speed());
    println!("║ Air Density:       {:>8.4} kg/m³      ║", integrator.air_density());
    println!("║ Samples:           {:>8}            ║", trajectory.len());
    println!("╚════════════════════════════════════════╝");

    if full {
        println!("\nFull Trajectory Points:");
    } else {
        println!("\nTrajectory Points (every {:.1}s):", trajectory.time_of_flight() / 10.0);
    }
    println!("┌──────────┬──────────┬──────────┬──────────┬──────────┐");
    println!("│ Time (s) │  X (m)   │  Y (m)   │ Vx (m/s) │ Vy (m/s) │");
    println!("├──────────┼──────────┼──────────┼──────────┼──────────┤");

    let step = if full { 1 } else { (trajectory.len() / 10).max(1) };
    let last = trajectory.len().saturating_sub(1);
    for (i, p) in trajectory.iter().enumerate() {
        if i % step == 0 || i == last {
            println!(
                "│ {:>8.2} │ {:>8.2} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                p.time, p.x, p.y, p.velocity_x, p.velocity_y
            );
        }
    }
    println!("└──────────┴──────────┴──────────┴──────────┴──────────┘");
}

mod ascii_chart;

use barrel_temp_core::config::parse_preset;
use barrel_temp_core::export::{write_xlsx, EXPORT_FILE_NAME};
use barrel_temp_core::{calculate, CalculatorConfig, MaterialPreset, Report, ThermalParameters};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Barrel temperature calculator with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "barrel-temp")]
#[command(about = "Estimate internal barrel wall temperature from the outer surface reading", long_about = None)]
struct Args {
    /// JSON config file with parameters and sweep
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Material preset (carbon-steel, chromoly-4140, stainless-416)
    #[arg(short, long)]
    preset: Option<String>,

    /// Ambient temperature in °C
    #[arg(short, long)]
    ambient: Option<f64>,

    /// Wall thickness in m
    #[arg(short, long)]
    thickness: Option<f64>,

    /// Elapsed time after firing in s
    #[arg(short, long)]
    elapsed: Option<f64>,

    /// Thermal conductivity in W/(m·K)
    #[arg(long)]
    conductivity: Option<f64>,

    /// Density in kg/m³
    #[arg(long)]
    density: Option<f64>,

    /// Specific heat in J/(kg·K)
    #[arg(long)]
    specific_heat: Option<f64>,

    /// First external temperature of the sweep in °C
    #[arg(long)]
    sweep_start: Option<f64>,

    /// Last external temperature of the sweep in °C
    #[arg(long)]
    sweep_end: Option<f64>,

    /// Sweep step in °C
    #[arg(long)]
    sweep_step: Option<f64>,

    /// Write the results workbook (default file name if no path given)
    #[arg(short = 'x', long, num_args = 0..=1, default_missing_value = EXPORT_FILE_NAME)]
    export: Option<PathBuf>,

    /// Save the effective configuration to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Draw the temperature profile in the terminal
    #[arg(long)]
    chart: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// List material presets and exit
    #[arg(long)]
    list_presets: bool,
}

impl Args {
    /// Config file (or defaults) with preset and per-field overrides applied.
    fn effective_config(&self) -> Result<CalculatorConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::load(path)?,
            None => CalculatorConfig::default(),
        };
        if let Some(name) = &self.preset {
            config.preset = Some(parse_preset(name)?);
        }

        let base = config.resolved_parameters();
        config.parameters = ThermalParameters::new(
            self.ambient.unwrap_or(*base.ambient),
            self.thickness.unwrap_or(*base.thickness),
            self.elapsed.unwrap_or(*base.elapsed),
            self.conductivity.unwrap_or(*base.conductivity),
            self.density.unwrap_or(*base.density),
            self.specific_heat.unwrap_or(*base.specific_heat),
        );
        // Explicit material values win over the preset from here on
        config.preset = None;

        if let Some(start) = self.sweep_start {
            config.sweep.start = start.into();
        }
        if let Some(end) = self.sweep_end {
            config.sweep.end = end.into();
        }
        if let Some(step) = self.sweep_step {
            config.sweep.step = step;
        }
        Ok(config)
    }
}

fn print_inputs(report: &Report) {
    println!("Input Parameters");
    for (label, value) in report.parameters().labeled_values() {
        println!("  {label:<14} {value}");
    }
    println!();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.list_presets {
        for preset in MaterialPreset::ALL {
            let p = preset.parameters();
            println!(
                "{:<14} k={} rho={} c={}",
                preset, p.conductivity, p.density, p.specific_heat
            );
        }
        return Ok(());
    }

    let config = args.effective_config()?;
    let report = calculate(&config.parameters, &config.sweep)?;

    // Only configurations the model accepts are persisted
    if let Some(path) = &args.save_config {
        config.save(path)?;
        tracing::info!(path = %path.display(), "configuration saved");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("=== Barrel Temperature Calculator ===\n");
        print_inputs(&report);
        println!("Calculated Temperatures");
        print!("{}", report.table());
    }

    if args.chart {
        println!("\nTemperature Profile");
        print!("{}", ascii_chart::render(report.chart(), 60, 16));
    }

    if let Some(path) = &args.export {
        let bytes = write_xlsx(report.document())?;
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "results workbook written");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_applied_over_preset() {
        let args = Args::parse_from([
            "barrel-temp",
            "--preset",
            "stainless-416",
            "--elapsed",
            "60",
            "--density",
            "8000",
            "--sweep-end",
            "100",
        ]);
        let config = args.effective_config().unwrap();
        assert_eq!(*config.parameters.conductivity, 24.9);
        assert_eq!(*config.parameters.density, 8000.0);
        assert_eq!(*config.parameters.elapsed, 60.0);
        assert_eq!(*config.sweep.end, 100.0);
        assert_eq!(config.preset, None);
    }

    #[test]
    fn test_export_flag_defaults_file_name() {
        let args = Args::parse_from(["barrel-temp", "--export"]);
        assert_eq!(args.export, Some(PathBuf::from(EXPORT_FILE_NAME)));
        let args = Args::parse_from(["barrel-temp"]);
        assert_eq!(args.export, None);
    }

    #[test]
    fn test_rejected_config_is_not_saved() {
        let dir = std::env::temp_dir();
        let rejected = dir.join("barrel_temp_rejected_config.json");
        let accepted = dir.join("barrel_temp_accepted_config.json");
        let _ = std::fs::remove_file(&rejected);

        let args = Args::parse_from([
            "barrel-temp",
            "--elapsed",
            "0",
            "--json",
            "--save-config",
            rejected.to_str().unwrap(),
        ]);
        assert!(run(&args).is_err());
        assert!(!rejected.exists());

        let args = Args::parse_from([
            "barrel-temp",
            "--sweep-end",
            "30",
            "--json",
            "--save-config",
            accepted.to_str().unwrap(),
        ]);
        run(&args).unwrap();
        let saved = CalculatorConfig::load(&accepted).unwrap();
        assert_eq!(*saved.sweep.end, 30.0);
        let _ = std::fs::remove_file(accepted);
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let args = Args::parse_from(["barrel-temp", "--preset", "bronze"]);
        assert!(args.effective_config().is_err());
    }
}

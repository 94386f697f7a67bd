use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;
use sticker_packer_core::prelude::*;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "sticker-packer",
    about = "Lay out album sticker sheets on a printable page",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a full page layout
    Layout(LayoutArgs),
    /// Print the page capacity in whole records
    Capacity(SettingsArgs),
    /// Print layout statistics
    Stats(LayoutArgs),
}

#[derive(Parser, Debug, Clone)]
struct LayoutArgs {
    #[command(flatten)]
    settings: SettingsArgs,

    /// JSON file holding an array of album records (objects with an "id")
    #[arg(long, help_heading = "Input")]
    albums: Option<PathBuf>,
    /// Number of synthetic records when no album file is given
    #[arg(long, default_value_t = 1, help_heading = "Input")]
    count: usize,

    /// Emit machine-readable JSON instead of a table
    #[arg(long, default_value_t = false, help_heading = "Output")]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
struct SettingsArgs {
    /// YAML settings file; flags below override its values
    #[arg(long, help_heading = "Settings")]
    config: Option<PathBuf>,
    /// Paper width (mm)
    #[arg(long, help_heading = "Settings")]
    paper_width: Option<f64>,
    /// Paper height (mm)
    #[arg(long, help_heading = "Settings")]
    paper_height: Option<f64>,
    /// Uniform print margin (mm)
    #[arg(long, help_heading = "Settings")]
    margin: Option<f64>,
    /// Gap between stickers (mm)
    #[arg(long, help_heading = "Settings")]
    spacing: Option<f64>,
    /// Allow 90 degree rotation
    #[arg(long, help_heading = "Settings")]
    allow_rotation: Option<bool>,
}

impl SettingsArgs {
    /// Loads the YAML config (if any), applies flag overrides and validates.
    fn resolve(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading settings file {}", path.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("parsing settings file {}", path.display()))?
            }
            None => Settings::default(),
        };
        if let Some(w) = self.paper_width {
            settings.paper.width = w;
        }
        if let Some(h) = self.paper_height {
            settings.paper.height = h;
        }
        if let Some(m) = self.margin {
            settings.print.margins = Margins::uniform(m);
        }
        if let Some(s) = self.spacing {
            settings.layout.element_spacing = s;
        }
        if let Some(r) = self.allow_rotation {
            settings.layout.allow_rotation = r;
        }
        settings.validate().context("invalid settings")?;
        Ok(settings)
    }
}

fn load_records(args: &LayoutArgs) -> anyhow::Result<Vec<InputRecord<Value>>> {
    match &args.albums {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading album file {}", path.display()))?;
            let values: Vec<Value> = serde_json::from_str(&text)
                .with_context(|| format!("parsing album file {}", path.display()))?;
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| {
                    let id = v
                        .get("id")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .ok_or_else(|| anyhow::anyhow!("album #{i} has no string \"id\" field"))?;
                    Ok(InputRecord { id, payload: v })
                })
                .collect()
        }
        None => Ok((1..=args.count)
            .map(|i| InputRecord {
                id: format!("album-{i}"),
                payload: Value::Null,
            })
            .collect()),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match cli.command {
        Commands::Layout(args) => cmd_layout(&args),
        Commands::Capacity(args) => cmd_capacity(&args),
        Commands::Stats(args) => cmd_stats(&args),
    }
}

fn cmd_layout(args: &LayoutArgs) -> anyhow::Result<()> {
    let settings = args.settings.resolve()?;
    let records = load_records(args)?;
    let result = calculate_layout(&records, &settings);
    info!(
        records = records.len(),
        placed = result.placed_count(),
        failed = result.failed_count(),
        "layout computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let area = settings.printable_area();
    println!(
        "Printable area: {:.1} x {:.1} mm (offset {:.1}, {:.1})",
        area.width, area.height, area.offset_x, area.offset_y
    );
    for p in &result.stickers {
        println!(
            "  {:<24} {:>6.1} x {:>5.1} mm at ({:>6.1}, {:>6.1}){}",
            p.sticker.id,
            p.frame.w,
            p.frame.h,
            p.frame.x,
            p.frame.y,
            if p.rotated { "  rotated" } else { "" },
        );
    }
    for s in &result.failed {
        println!(
            "  {:<24} {:>6.1} x {:>5.1} mm  DID NOT FIT",
            s.id, s.width, s.height
        );
    }
    println!("{}", layout_stats(&records, &settings).summary());
    Ok(())
}

fn cmd_capacity(args: &SettingsArgs) -> anyhow::Result<()> {
    let settings = args.resolve()?;
    println!("{}", calculate_max_capacity(&settings));
    Ok(())
}

fn cmd_stats(args: &LayoutArgs) -> anyhow::Result<()> {
    let settings = args.settings.resolve()?;
    let records = load_records(args)?;
    let stats = layout_stats(&records, &settings);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats.summary());
    }
    Ok(())
}

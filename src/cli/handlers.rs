use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use log::info;

use crate::calendar::summarize;
use crate::cli::args::ConfigCommands;
use crate::config::AppConfig;
use crate::layout::layout;
use crate::overlay;
use crate::render::{write_scene_file, Renderer, Scene, SceneWriter};
use crate::source::load_calendar;
use crate::utils::format::{format_date_range, format_number, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(input: &Path, json: bool) -> Result<()> {
    let calendar = load_calendar(input)?;
    let summary = summarize(&calendar.days, &calendar.weeks);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println_colored!(GREEN, "  Contribution statistics");
    println!();
    for line in overlay::render_text(&overlay::labels(&summary)).lines() {
        println!("  {}", line);
    }
    println!();
    Ok(())
}

// ─── Layout ──────────────────────────────────────────────────────────────────

pub fn handle_layout(
    input: &Path,
    output: Option<&Path>,
    with_stats: bool,
    config: &AppConfig,
) -> Result<()> {
    let calendar = load_calendar(input)?;
    let instructions = layout(&calendar.weeks, &config.layout);
    info!(
        "{} weeks, {} blocks",
        calendar.weeks.len(),
        instructions.len()
    );

    let mut scene = Scene::new(&config.canvas, &config.layout, instructions);
    if with_stats {
        scene = scene.with_summary(summarize(&calendar.days, &calendar.weeks));
    }

    match output {
        Some(path) => write_scene_file(path, &scene),
        None => SceneWriter::new(io::stdout().lock()).render(&scene),
    }
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(input: &Path) -> Result<()> {
    let calendar = load_calendar(input)?;
    let summary = summarize(&calendar.days, &calendar.weeks);

    println!("# isocal — Contribution Summary");
    if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
        println!("# {}", format_date_range(first, last));
    }
    println!();
    println!("## Weeks");
    let busiest = calendar.weeks.iter().map(|w| w.total()).max().unwrap_or(0);
    for week in &calendar.weeks {
        let start = week
            .first_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!(
            "  {}  {:>7}  {}",
            start,
            format_number(week.total()),
            progress_bar(week.total(), busiest, 20)
        );
    }
    println!();
    println!("## Summary");
    for line in overlay::render_text(&overlay::labels(&summary)).lines() {
        println!("  {}", line);
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(
    action: &ConfigCommands,
    config: &AppConfig,
    path_override: Option<&Path>,
) -> Result<()> {
    let path: PathBuf = match path_override {
        Some(p) => p.to_path_buf(),
        None => AppConfig::config_path()?,
    };

    match action {
        ConfigCommands::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!("Config already exists at {:?}. Use --force to overwrite.", path);
            }
            AppConfig::default().save_to(&path)?;
            println_colored!(GREEN, "  ✓ Wrote default config to {}", path.display());
            println_colored!(DIM, "  Edit [layout] and [canvas] to tune the block layout");
        }
    }
    Ok(())
}

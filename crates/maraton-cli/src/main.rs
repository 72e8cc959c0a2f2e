use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use maraton_core::FestivalCalendar;
use maraton_rules::{Schedule, ScheduleValidator};

use maraton::{enrich, io};

#[derive(Parser)]
#[command(name = "maraton")]
#[command(about = "Consistency checks and data repair for the festival programme files", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the consistency rules over the programme data
    Check {
        /// Performances file (JSON array)
        #[arg(short, long)]
        performances: PathBuf,

        /// Artists file (JSON array)
        #[arg(short, long)]
        artists: PathBuf,

        /// Civil start instant of festival day 1 (RFC 3339)
        #[arg(long, default_value = "2025-06-06T08:00:00+02:00")]
        epoch: String,

        /// Write the repaired performances back to disk
        #[arg(short = 'w', long)]
        write_repairs: bool,

        /// Target for the repaired performances (defaults to the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Derive artist images from show links in their descriptions
    BackfillImages {
        /// Artists file (JSON array)
        #[arg(short, long)]
        artists: PathBuf,

        /// Where to write the updated artists
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Rewrite the captions of radio-show artists
    Annotate {
        /// Performances file (JSON array)
        #[arg(short, long)]
        performances: PathBuf,

        /// Artists file (JSON array)
        #[arg(short, long)]
        artists: PathBuf,

        /// Where to write the updated artists
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.debug {
        tracing::Level::TRACE
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(cli.debug) // Show target module in debug mode
        .init();

    match cli.command {
        Commands::Check {
            performances,
            artists,
            epoch,
            write_repairs,
            output,
        } => handle_check(performances, artists, &epoch, write_repairs, output),
        Commands::BackfillImages { artists, output } => handle_backfill_images(artists, output),
        Commands::Annotate {
            performances,
            artists,
            output,
        } => handle_annotate(performances, artists, output),
    }
}

fn handle_check(
    performances: PathBuf,
    artists: PathBuf,
    epoch: &str,
    write_repairs: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let calendar = FestivalCalendar::from_rfc3339(epoch)
        .with_context(|| format!("Invalid --epoch value: {}", epoch))?;

    let mut schedule = Schedule {
        performances: io::load_performances(&performances)?,
        artists: io::load_artists(&artists)?,
    };
    info!(
        "Loaded {} performances and {} artists",
        schedule.performances.len(),
        schedule.artists.len()
    );

    let validator = ScheduleValidator::new(calendar);
    let report = validator.run(&mut schedule);

    for finding in report.findings() {
        println!("{}", finding);
    }

    if write_repairs {
        let target = output.unwrap_or(performances);
        io::save_performances(&target, &schedule.performances)?;
        info!("Repaired performances written to {:?}", target);
    }

    if report.has_violations() {
        anyhow::bail!(
            "schedule check reported {} violation(s)",
            report.violation_count()
        );
    }

    info!("No issues found");
    Ok(())
}

fn handle_backfill_images(artists: PathBuf, output: PathBuf) -> Result<()> {
    let mut records = io::load_artists(&artists)?;
    let updated = enrich::backfill_images(&mut records);
    io::save_artists(&output, &records)?;
    info!("Updated {} artist image(s), written to {:?}", updated, output);
    Ok(())
}

fn handle_annotate(performances: PathBuf, artists: PathBuf, output: PathBuf) -> Result<()> {
    let slots = io::load_performances(&performances)?;
    let mut records = io::load_artists(&artists)?;
    let updated = enrich::annotate_radio_shows(&mut records, &slots);
    io::save_artists(&output, &records)?;
    info!(
        "Updated {} artist caption(s), written to {:?}",
        updated, output
    );
    Ok(())
}

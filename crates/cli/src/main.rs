//! Streakline CLI - habit and addiction trackers in the terminal.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use streakline_core::{
    format_timestamp, parse_timestamp, Clock, Quote, SystemClock, Time, Tracker, TrackerId, TrackerType,
};
use streakline_progress::{evaluate_milestones, quote_of_the_day, snapshot_all, Milestone, TrackerSnapshot};
use streakline_storage::{JsonStorage, Storage};

const PROGRESS_BAR_WIDTH: usize = 20;

#[derive(Parser)]
#[command(name = "streakline")]
#[command(about = "Track time since you started (or quit) something", long_about = None)]
struct Cli {
    /// Directory holding the stored lists
    #[arg(long, global = true, env = "STREAKLINE_DATA_DIR", default_value = ".streakline")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new tracker
    Add {
        /// Tracker name
        name: String,
        /// addiction or habit
        #[arg(long = "type", default_value = "addiction", value_parser = parse_type)]
        kind: TrackerType,
        /// Start instant (RFC 3339), defaults to now
        #[arg(long, value_parser = parse_start)]
        start: Option<Time>,
    },
    /// List trackers with elapsed time and today's progress
    List,
    /// Show one tracker
    Show {
        /// Tracker ID
        id: String,
    },
    /// Edit a tracker
    Edit {
        /// Tracker ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New type
        #[arg(long = "type", value_parser = parse_type)]
        kind: Option<TrackerType>,
        /// New start instant (RFC 3339)
        #[arg(long, value_parser = parse_start)]
        start: Option<Time>,
    },
    /// Restart a tracker from now
    Reset {
        /// Tracker ID
        id: String,
    },
    /// Delete a tracker
    Delete {
        /// Tracker ID
        id: String,
    },
    /// Show achieved milestones
    Milestones,
    /// Show today's quote
    Quote,
    /// Add a quote
    AddQuote {
        /// Quote text
        text: String,
        /// Who said it
        #[arg(long)]
        author: Option<String>,
    },
    /// Keep the tracker list on screen, refreshing on an interval
    Watch {
        /// Seconds between refreshes
        #[arg(long, default_value = "1")]
        interval: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let clock = SystemClock;

    let mut storage = JsonStorage::new(&cli.data_dir)
        .await
        .with_context(|| format!("opening {}", cli.data_dir.display()))?;
    debug!(root = %storage.root().display(), "storage ready");

    match cli.command {
        Commands::Add { name, kind, start } => {
            let tracker = Tracker::new(name, kind, start.unwrap_or_else(|| clock.now()))?;
            storage.add_tracker(&tracker).await?;
            info!(id = %tracker.id, "tracker added");
            println!("Added tracker: {} - {}", tracker.id, tracker.name);
        }
        Commands::List => {
            let trackers = storage.load_trackers().await?;
            print!("{}", render_home(&trackers, &storage.load_quotes().await?, clock.now()));
        }
        Commands::Show { id } => {
            let tracker = require_tracker(&storage, &id).await?;
            let snapshot = TrackerSnapshot::capture(&tracker, clock.now());
            print!("{}", render_card(&snapshot));
        }
        Commands::Edit { id, name, kind, start } => {
            let mut tracker = require_tracker(&storage, &id).await?;
            if let Some(name) = name {
                tracker.rename(name)?;
            }
            if let Some(kind) = kind {
                tracker.kind = kind;
            }
            if let Some(start) = start {
                tracker.start_date = start;
            }
            storage.update_tracker(&tracker).await?;
            info!(id = %tracker.id, "tracker updated");
            println!("Updated tracker: {} - {}", tracker.id, tracker.name);
        }
        Commands::Reset { id } => {
            let mut tracker = require_tracker(&storage, &id).await?;
            tracker.reset(clock.now());
            storage.update_tracker(&tracker).await?;
            info!(id = %tracker.id, "tracker reset");
            println!("Reset {} to {}", tracker.name, format_timestamp(&tracker.start_date));
        }
        Commands::Delete { id } => {
            storage.delete_tracker(&TrackerId::from(id.as_str())).await?;
            info!(%id, "tracker deleted");
            println!("Deleted tracker: {}", id);
        }
        Commands::Milestones => {
            let trackers = storage.load_trackers().await?;
            let milestones = evaluate_milestones(&trackers, clock.now());
            if milestones.is_empty() {
                println!("No milestones yet. Keep going!");
            }
            for milestone in &milestones {
                print!("{}", render_milestone(milestone));
            }
        }
        Commands::Quote => {
            let quotes = storage.load_quotes().await?;
            match quote_of_the_day(&quotes, clock.now()) {
                Some(quote) => println!("{}", quote),
                None => println!("No quotes stored. Add one with `streakline add-quote`."),
            }
        }
        Commands::AddQuote { text, author } => {
            if text.trim().is_empty() {
                return Err(anyhow!("quote text cannot be empty"));
            }
            let mut quotes = storage.load_quotes().await?;
            let quote = Quote::new(text.trim(), author);
            quotes.push(quote.clone());
            storage.save_quotes(&quotes).await?;
            println!("Added quote: {}", quote);
        }
        Commands::Watch { interval } => {
            watch(&storage, &clock, interval.max(1)).await?;
        }
    }

    Ok(())
}

/// Redraw the home screen every `interval_secs` until Ctrl-C.
///
/// Trackers are loaded once; only the clock moves between frames.
async fn watch(storage: &JsonStorage, clock: &dyn Clock, interval_secs: u64) -> Result<()> {
    let trackers = storage.load_trackers().await?;
    let quotes = storage.load_quotes().await?;
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    info!(trackers = trackers.len(), interval_secs, "watching");
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                print!("\x1B[2J\x1B[H{}", render_home(&trackers, &quotes, clock.now()));
            }
            _ = &mut ctrl_c => {
                info!("stopped watching");
                return Ok(());
            }
        }
    }
}

async fn require_tracker(storage: &JsonStorage, id: &str) -> Result<Tracker> {
    storage
        .find_tracker(&TrackerId::from(id))
        .await?
        .ok_or_else(|| anyhow!("Tracker not found: {}", id))
}

fn parse_type(s: &str) -> std::result::Result<TrackerType, String> {
    s.parse().map_err(|e: streakline_core::TrackerError| e.to_string())
}

fn parse_start(s: &str) -> std::result::Result<Time, String> {
    parse_timestamp(s).map_err(|e| e.to_string())
}

fn render_home(trackers: &[Tracker], quotes: &[Quote], now: Time) -> String {
    let mut out = String::new();
    if let Some(quote) = quote_of_the_day(quotes, now) {
        out.push_str(&format!("{}\n\n", quote));
    }
    if trackers.is_empty() {
        out.push_str("No trackers yet. Add one with `streakline add <name>`.\n");
        return out;
    }
    for snapshot in snapshot_all(trackers, now) {
        out.push_str(&render_card(&snapshot));
        out.push('\n');
    }
    out
}

fn render_card(snapshot: &TrackerSnapshot) -> String {
    let badges: Vec<String> = snapshot
        .elapsed
        .parts()
        .iter()
        .map(|part| format!("[{}]", part))
        .collect();
    format!(
        "{} ({})  id: {}\n  {}\n  Started: {}\n  Today's Progress: {} {:.0}%\n",
        snapshot.name,
        snapshot.kind.label(),
        snapshot.id,
        badges.join(" "),
        snapshot.started.format("%Y-%m-%d %H:%M"),
        progress_bar(snapshot.daily_progress, PROGRESS_BAR_WIDTH),
        snapshot.daily_progress.floor(),
    )
}

fn render_milestone(milestone: &Milestone) -> String {
    let mut out = format!(
        "{} ({})\n  {}\n  Achieved: {}\n",
        milestone.tracker_name,
        milestone.tracker_type.label(),
        milestone.message,
        milestone.achieved_at.format("%Y-%m-%d"),
    );
    if milestone.is_daily_recurring {
        out.push_str("  * JUST FOR TODAY! *\n");
    }
    out.push('\n');
    out
}

fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).floor() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Time {
        Utc.with_ymd_and_hms(2025, 4, 2, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 10), "[----------]");
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(99.9, 10), "[#########-]");
        assert_eq!(progress_bar(150.0, 4), "[####]");
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(parse_type("habit").unwrap(), TrackerType::Habit);
        assert!(parse_type("hobby").is_err());
        assert_eq!(parse_start("2025-04-02T18:00:00.000Z").unwrap(), now());
        assert!(parse_start("tomorrow").is_err());
    }

    #[test]
    fn test_render_home_empty() {
        let out = render_home(&[], &[], now());
        assert!(out.contains("No trackers yet"));
    }

    #[test]
    fn test_render_card() {
        let tracker = Tracker::new("No Sugar", TrackerType::Addiction, now() - Duration::seconds(90)).unwrap();
        let out = render_card(&TrackerSnapshot::capture(&tracker, now()));
        assert!(out.starts_with("No Sugar (Addiction)"));
        assert!(out.contains("[1 minute] [30 seconds]"));
        assert!(out.contains("Today's Progress: [--------------------] 0%"));
    }

    #[test]
    fn test_render_milestone_banner() {
        let tracker = Tracker::new("Walk", TrackerType::Habit, now() - Duration::hours(30)).unwrap();
        let milestones = evaluate_milestones(&[tracker], now());
        let first = render_milestone(&milestones[0]);
        assert!(first.contains("JUST FOR TODAY"));
        let second = render_milestone(&milestones[1]);
        assert!(second.contains("You've reached 24 Hours of Walk!"));
        assert!(!second.contains("JUST FOR TODAY"));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["streakline", "add", "No Sugar", "--type", "habit"]).unwrap();
        match cli.command {
            Commands::Add { name, kind, start } => {
                assert_eq!(name, "No Sugar");
                assert_eq!(kind, TrackerType::Habit);
                assert!(start.is_none());
            }
            _ => panic!("expected add"),
        }
    }
}

//! CLI tool to preview the gallery pages against a catalog file.
//!
//! Usage:
//!   gallery-query <games.json> [--query Q] [--student S] [--tag T]
//!   gallery-query <games.json> --students [--query Q]
//!
//! Applies the same filters and ordering as the web pages and prints the
//! result to stdout, with the status line on stderr.

use clap::Parser;
use games_gallery::{
    GameFilter, aggregate, filter_students, labels, load_catalog_file, students::StudentSummary,
};
use std::io::{self, Write};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Preview the games grid or the student ranking for a catalog file.
#[derive(Parser)]
#[command(name = "gallery-query")]
struct Cli {
    /// Catalog file (a JSON array of game records)
    catalog: String,

    /// Free-text search over game name, student name and description
    #[arg(short, long, default_value = "")]
    query: String,

    /// Only games by this exact student name
    #[arg(short, long)]
    student: Option<String>,

    /// Only games carrying this exact tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Show the student ranking instead of games (only --query applies)
    #[arg(long)]
    students: bool,

    /// Print matching records as JSON
    #[arg(long)]
    json: bool,

    /// Log catalog details on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let env_filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    fmt().with_env_filter(env_filter).with_writer(io::stderr).init();

    let catalog = match load_catalog_file(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading catalog: {e}");
            process::exit(1);
        }
    };
    info!(path = %cli.catalog, games = catalog.len(), "catalog loaded");

    let result = if cli.students {
        let ranking = aggregate(&catalog);
        let shown = filter_students(&ranking, &cli.query);
        debug!(students = ranking.len(), shown = shown.len(), "students filtered");
        eprintln!("{}", labels::total_label(ranking.len()));
        write_students(&shown, cli.json)
    } else {
        let mut filter = GameFilter::new().with_query(cli.query.as_str());
        if let Some(student) = &cli.student {
            filter.set_student(student);
        }
        if let Some(tag) = &cli.tag {
            filter.set_tag(tag);
        }
        if filter.is_clear() {
            debug!("no filters set, listing the whole catalog");
        }
        let shown = filter.apply(&catalog);
        debug!(?filter, shown = shown.len(), "games filtered");
        eprintln!(
            "{} | {}",
            labels::total_label(catalog.len()),
            labels::shown_label(shown.len())
        );
        write_games(&shown, cli.json)
    };

    if let Err(e) = result {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }
}

fn write_games(games: &[&games_gallery::Game], json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, games)?;
        writeln!(out)?;
        return Ok(());
    }
    for game in games {
        let tags = game.card_tags().join(", ");
        writeln!(out, "{} | {} | {}", game.title(), game.student_label(), tags)?;
    }
    Ok(())
}

fn write_students(students: &[&StudentSummary], json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        let rows: Vec<serde_json::Value> = students
            .iter()
            .map(|s| serde_json::json!({ "name": s.name, "count": s.count() }))
            .collect();
        serde_json::to_writer_pretty(&mut out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }
    for student in students {
        writeln!(
            out,
            "{} | {}",
            student.name,
            labels::game_count_label(student.count())
        )?;
    }
    Ok(())
}

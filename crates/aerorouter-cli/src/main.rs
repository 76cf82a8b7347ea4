// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use aerorouter_core::query::QueryParser;
use aerorouter_core::reference::ReferenceData;
use aerorouter_core::{Query, QueryOutcome, ReferenceTables, RouteReport, Router, RouterConfig};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding aircraft.csv, airport.csv, countrycurrency.csv and currencyrates.csv
    #[arg(short, long, env = "AEROROUTER_DATA")]
    data_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route every query in a CSV file (home,d1,d2,d3,d4,aircraft per row)
    Batch {
        queries: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Route a single query
    Plan {
        home: String,
        d1: String,
        d2: String,
        d3: String,
        d4: String,
        aircraft: String,
        #[arg(long)]
        json: bool,
    },
    /// Great-circle distance in km between two airports
    Distance { from: String, to: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialise logging")?;

    let data_dir = cli.data_dir.unwrap_or_else(aerorouter_core::default_data_dir);
    let config = RouterConfig::load(&data_dir)
        .with_context(|| format!("Failed to read configuration in {:?}", data_dir))?;
    let tables = ReferenceTables::load(&config)
        .with_context(|| format!("Failed to load reference tables from {:?}", data_dir))?;
    let mut router = Router::new(&tables);

    match cli.command {
        Commands::Batch { queries, json } => {
            let parsed = QueryParser::parse_file(&queries)
                .with_context(|| format!("Failed to read queries from {:?}", queries))?;
            let outcomes = router.run_batch(parsed);
            if json {
                let rendered: Vec<serde_json::Value> = outcomes.iter().map(outcome_json).collect();
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                for outcome in &outcomes {
                    print_outcome(outcome);
                }
            }
        }
        Commands::Plan {
            home,
            d1,
            d2,
            d3,
            d4,
            aircraft,
            json,
        } => {
            let query = Query::new(
                &home,
                [d1.as_str(), d2.as_str(), d3.as_str(), d4.as_str()],
                &aircraft,
            );
            let report = plan_one(&mut router, query, json)?;
            if !json {
                print_report(&report);
            }
        }
        Commands::Distance { from, to } => {
            let km = distance_one(&mut router, &from, &to)?;
            println!("{} -> {}: {:.2} km", from, to, km);
        }
    }

    Ok(())
}

/// Runs one query. JSON mode prints the outcome either way; a failure is an error.
fn plan_one<R: ReferenceData>(
    router: &mut Router<R>,
    query: Query,
    json: bool,
) -> Result<RouteReport> {
    let outcome = QueryOutcome {
        result: router.plan(&query),
        query: Some(query),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
    }
    let label = outcome
        .query
        .as_ref()
        .map(|q| q.to_string())
        .unwrap_or_default();
    outcome
        .result
        .with_context(|| format!("No route for {}", label))
}

fn distance_one<R: ReferenceData>(router: &mut Router<R>, from: &str, to: &str) -> Result<f64> {
    router
        .distance_between(from, to)
        .with_context(|| format!("No distance for {} -> {}", from, to))
}

fn print_outcome(outcome: &QueryOutcome) {
    let label = outcome
        .query
        .as_ref()
        .map(|q| q.to_string())
        .unwrap_or_else(|| "<unreadable>".to_string());
    match &outcome.result {
        Ok(report) => print_report(report),
        Err(e) => println!("{}: {}", label, e),
    }
}

fn print_report(report: &RouteReport) {
    println!("{} ({})", report, report.aircraft.code);
    for leg in &report.legs {
        println!(
            "    {} -> {}  {:>9.2} km  EUR {:>10.2}",
            leg.from, leg.to, leg.distance_km, leg.cost_eur
        );
    }
}

fn outcome_json(outcome: &QueryOutcome) -> serde_json::Value {
    let query = outcome.query.as_ref().map(|q| q.to_string());
    match &outcome.result {
        Ok(report) => serde_json::json!({ "query": query, "route": report }),
        Err(e) => serde_json::json!({ "query": query, "error": e.to_string() }),
    }
}

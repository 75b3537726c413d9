use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::ai_provider::{AIProviderClient, ChatMessage};
use crate::config::Config;
use crate::feed::FeedClient;
use crate::report;
use crate::scoring::{self, ScoredFlight, ZONES};
use crate::transmission::Messenger;

const SYSTEM_PROMPT: &str = "You are an aviation OSINT expert who writes short, \
     engaging tweets about unusual military flights.";

/// Full pipeline: fetch a snapshot, score it, pick the top flight,
/// summarize it and deliver the summary.
pub async fn handle_run(
    dry_run: bool,
    data_dir: Option<PathBuf>,
    provider: Option<String>,
    model: Option<String>,
) -> Result<()> {
    let config = Config::new(data_dir)?;

    let feed = FeedClient::new();
    let flights = match feed.fetch_snapshot(&config.feed).await {
        Ok(snapshot) => {
            println!(
                "📡 Snapshot at {}: {} flights",
                snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"),
                snapshot.flights.len()
            );
            snapshot.flights
        }
        Err(e) => {
            eprintln!("{} {}", "⚠️  Feed unavailable:".yellow(), e);
            Vec::new()
        }
    };

    let scored: Vec<ScoredFlight> = flights.into_iter().map(scoring::score_flight).collect();

    let top = match scoring::top_flight(scored) {
        Some(top) => top,
        None => {
            println!("No flights to evaluate.");
            return Ok(());
        }
    };

    let summary = generate_summary(&config, &top, provider, model).await;
    let body = report::message_body(&summary, &report::fr24_url(&top.flight));

    if dry_run {
        println!("{}", "Dry run, skipping delivery.".yellow());
        println!("{}", body);
    } else {
        deliver(&config, &body).await;
    }

    print!("{}", report::render_table(&top));
    Ok(())
}

/// Score a hypothetical observation and print the breakdown.
pub fn handle_score(aircraft: &str, lat: Option<f64>, lon: Option<f64>) {
    let aircraft_score = scoring::score_aircraft(aircraft);
    let location_score = match (lat, lon) {
        (Some(lat), Some(lon)) => scoring::score_location(lat, lon),
        _ => 0,
    };

    println!("{}", "Score Breakdown".cyan().bold());
    println!("Aircraft Score: {}", aircraft_score);
    println!("Location Score: {}", location_score);
    println!("Total Score: {}", aircraft_score + location_score);
}

/// Print the static zone table.
pub fn handle_zones() {
    println!("{}", "Interesting Zones".cyan().bold());
    for zone in &ZONES {
        let (lat_min, lat_max, lon_min, lon_max) = zone.bounds;
        println!(
            "  {} (score {}): lat {}..{}, lon {}..{}",
            zone.name.cyan(),
            zone.score,
            lat_min,
            lat_max,
            lon_min,
            lon_max
        );
    }
}

/// Text generation is best-effort: any failure falls back to the template
/// summary so the run still produces a message body.
async fn generate_summary(
    config: &Config,
    top: &ScoredFlight,
    provider: Option<String>,
    model: Option<String>,
) -> String {
    match try_generate(config, top, provider, model).await {
        Ok(summary) => {
            println!("Generated summary: {}", summary);
            summary
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "⚠️  Text generation failed, using template summary:".yellow(),
                e
            );
            report::fallback_summary(top)
        }
    }
}

async fn try_generate(
    config: &Config,
    top: &ScoredFlight,
    provider: Option<String>,
    model: Option<String>,
) -> Result<String> {
    let ai_config = config.get_ai_config(provider, model)?;
    let client = AIProviderClient::new(ai_config);

    let messages = vec![ChatMessage::user(report::flight_context(top))];
    let response = client.chat(messages, Some(SYSTEM_PROMPT.to_string())).await?;

    match response.tokens_used {
        Some(tokens) => println!("Summary generated by {} ({} tokens)", response.model, tokens),
        None => println!("Summary generated by {}", response.model),
    }

    Ok(response.content.trim().to_string())
}

/// Delivery is best-effort as well: a failed or unconfigured channel is
/// reported but never aborts the run.
async fn deliver(config: &Config, body: &str) {
    let messaging = match config.messaging.clone().filter(|m| m.is_complete()) {
        Some(messaging) => messaging,
        None => {
            println!("{}", "Messaging is not configured, skipping delivery.".yellow());
            println!("{}", body);
            return;
        }
    };

    println!("Sending WhatsApp message: {}", body);
    match Messenger::new(messaging).send_whatsapp(body).await {
        Ok(receipt) => {
            println!(
                "{} SID: {} at {}",
                "✅ WhatsApp message sent!".green(),
                receipt.sid,
                receipt.sent_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Delivery failed:".red(), e);
        }
    }
}

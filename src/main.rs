// main.rs
mod ai_provider;
mod cli;
mod config;
mod feed;
mod report;
mod run;
mod scoring;
mod transmission;

use clap::Parser;
use cli::{Args, Commands};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Run {
            dry_run,
            data_dir,
            provider,
            model,
        } => {
            println!("🚀 Running flight tracker...");
            if let Err(e) = run::handle_run(dry_run, data_dir, provider, model).await {
                eprintln!("❌ Run failed: {}", e);
                std::process::exit(1);
            }
            println!("✅ Finished run.");
        }
        Commands::Zones => {
            run::handle_zones();
        }
        Commands::Score { aircraft, lat, lon } => {
            run::handle_score(&aircraft, lat, lon);
        }
    }
}

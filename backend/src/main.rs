use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_planner_backend::{Backend, PlannerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = PlannerConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    info!("Setting up backend");
    let backend = Backend::initialize(&config)?;

    let now = Local::now().naive_local();
    let trips = backend.trip_service.list_trips().await?;
    info!("Loaded {} trips", trips.len());

    for trip in &trips {
        let overview = backend.overview_service.overview(&trip.id, now).await?;
        info!(
            "{} ({} to {}, {}): {} days, {} activities, {}% complete, {:.2} of {:.2} spent",
            trip.name,
            trip.start_date,
            trip.end_date,
            trip.status,
            overview.day_count,
            overview.activity_count,
            overview.progress_percent,
            overview.budget.total_spent,
            overview.budget.total_budget,
        );

        for plan in backend.itinerary_service.day_plans(trip).await? {
            if plan.activities.is_empty() {
                continue;
            }
            let entries: Vec<String> = plan
                .activities
                .iter()
                .map(|activity| format!("{} {}", activity.time, activity.name))
                .collect();
            info!("  {}: {}", plan.date, entries.join(", "));
        }
    }

    let upcoming = backend.trip_service.upcoming_trips().await?;
    info!("{} upcoming trips", upcoming.len());

    Ok(())
}

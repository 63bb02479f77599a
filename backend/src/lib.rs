//! # Trip Planner Backend
//!
//! Contains all non-UI logic for the trip planner.
//!
//! - **Storage**: the record store contract and its in-memory backend
//! - **Domain**: itinerary binding, day resolution and trip aggregates
//! - **Config**: YAML settings for seeding, latency and creation defaults
//!
//! A `Backend` is built once at startup and passed to whatever drives it.
//! Tests build their own isolated instance.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;

pub use config::PlannerConfig;
pub use storage::{Connection, MemoryConnection};

/// Main backend struct that holds the stores and every service
#[derive(Clone)]
pub struct Backend<C: Connection = MemoryConnection> {
    pub connection: C,
    pub trip_service: domain::TripService<C>,
    pub itinerary_service: domain::ItineraryService<C>,
    pub calendar_service: domain::TripCalendarService,
    pub budget_service: domain::BudgetService,
    pub overview_service: domain::TripOverviewService<C>,
}

impl<C: Connection> Backend<C> {
    /// Wire all services onto an existing connection
    pub fn with_connection(connection: C, config: &PlannerConfig) -> Self {
        let calendar_service = domain::TripCalendarService::new();
        let budget_service = domain::BudgetService::new();
        let trip_service = domain::TripService::new(&connection, config);
        let itinerary_service = domain::ItineraryService::new(&connection, calendar_service.clone());
        let overview_service = domain::TripOverviewService::new(
            trip_service.clone(),
            itinerary_service.clone(),
            calendar_service.clone(),
            budget_service.clone(),
        );

        Self {
            connection,
            trip_service,
            itinerary_service,
            calendar_service,
            budget_service,
            overview_service,
        }
    }
}

impl Backend<MemoryConnection> {
    /// Build the in-memory backend described by `config`, seeding it if configured
    pub fn initialize(config: &PlannerConfig) -> Result<Self> {
        info!("Setting up in-memory stores");
        let connection = MemoryConnection::seeded(config)?;

        info!("Setting up domain services");
        Ok(Self::with_connection(connection, config))
    }
}

//! # Domain Module
//!
//! Contains the planning logic: binding activities to trip days and every
//! read-side view derived from that binding.
//!
//! ## Module Organization
//!
//! - **trip_service**: trip creation, replacement and listing
//! - **itinerary_service**: the binder and the day/trip resolvers
//! - **calendar**: trip day enumeration, duration and progress
//! - **budget_service**: spend totals and the per-category breakdown
//! - **trip_overview**: the dashboard summary for one trip
//! - **models**: validation rules applied before any write
//!
//! Derived views are never cached; each call reads fresh snapshots.

pub mod budget_service;
pub mod calendar;
pub mod itinerary_service;
pub mod models;
pub mod trip_overview;
pub mod trip_service;

pub use budget_service::*;
pub use calendar::*;
pub use itinerary_service::*;
pub use trip_overview::*;
pub use trip_service::*;

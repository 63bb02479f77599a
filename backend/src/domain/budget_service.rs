//! Budget aggregation for the trip planner.
//!
//! Spend is always recomputed from the activities handed in. The stored
//! `budget.spent` on a trip is never read here. Callers pick the scope
//! (one day or the whole trip) by the collection they pass.

use log::debug;
use shared::{Activity, ActivityCategory, BudgetBreakdown, CategorySpend, Trip};

/// Service for cost aggregation over activity collections
#[derive(Clone, Default)]
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of cost over all given activities
    pub fn total_spent(&self, activities: &[Activity]) -> f64 {
        activities.iter().map(|activity| activity.cost).sum()
    }

    /// Sum of cost over activities whose category equals `category` exactly
    pub fn spent_by_category(&self, activities: &[Activity], category: &ActivityCategory) -> f64 {
        activities
            .iter()
            .filter(|activity| &activity.category == category)
            .map(|activity| activity.cost)
            .sum()
    }

    /// Sum of cost over activities with an unrecognized category
    pub fn spent_on_other(&self, activities: &[Activity]) -> f64 {
        activities
            .iter()
            .filter(|activity| !activity.category.is_known())
            .map(|activity| activity.cost)
            .sum()
    }

    /// Budget vs. spend for a trip, with a per-category breakdown
    ///
    /// Categories come out in fixed order (sightseeing, food, transport,
    /// accommodation) followed by an "other" bucket.
    pub fn breakdown(&self, trip: &Trip, activities: &[Activity]) -> BudgetBreakdown {
        let total_spent = self.total_spent(activities);

        let mut categories: Vec<CategorySpend> = ActivityCategory::KNOWN
            .iter()
            .map(|category| CategorySpend {
                category: category.label().to_string(),
                amount: self.spent_by_category(activities, category),
            })
            .collect();
        categories.push(CategorySpend {
            category: "other".to_string(),
            amount: self.spent_on_other(activities),
        });

        debug!(
            "Trip {} budget: {:.2} of {:.2} spent across {} activities",
            trip.id,
            total_spent,
            trip.budget.total,
            activities.len()
        );

        BudgetBreakdown {
            total_budget: trip.budget.total,
            total_spent,
            remaining: trip.budget.total - total_spent,
            categories,
        }
    }
}

//! Itinerary pricing pipeline.
//!
//! Runs on the whole plan after every edit:
//! derive `In`/`Out` → enrich activity prices → price hops and admissions →
//! saver-day advice and multi-day pass strategies → write the results back
//! onto the plan. Everything is recomputed from base fields, so pricing an
//! already priced plan yields the same output.

use std::sync::Arc;

use log::info;

use crate::config::PricingConfig;
use crate::error::EngineError;
use crate::models::fare::TransportationDetails;
use crate::models::money::format_currency;
use crate::models::travel_plan::TravelPlan;
use crate::services::activity_enricher::ActivityEnricher;
use crate::services::cost_aggregator::CostAggregator;
use crate::services::pass_optimizer::{daily_summaries, PassOptimizer};
use crate::services::reference_data::ReferenceData;
use crate::services::saver_pass_advisor::recommend_saver_days;
use crate::services::segment_deriver::derive_segments;

#[derive(Clone)]
pub struct PricingEngine {
    reference: Arc<ReferenceData>,
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(reference: Arc<ReferenceData>, config: PricingConfig) -> Self {
        Self { reference, config }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price `plan` and return the enriched copy. A plan without days is
    /// returned as is.
    ///
    /// Only a broken pass price table fails the run; unknown routes and
    /// attractions end up in the output instead.
    pub fn price_plan(&self, mut plan: TravelPlan) -> Result<TravelPlan, EngineError> {
        if plan.days.is_empty() {
            return Ok(plan);
        }

        let reference = &*self.reference;

        derive_segments(&mut plan);

        let enricher = ActivityEnricher::new(&reference.catalog, &reference.normalizer);
        for day in plan.days.iter_mut() {
            enricher.enrich_day(day);
        }

        let cost = CostAggregator::new(&reference.normalizer, &reference.fares)
            .aggregate(&mut plan.days);

        let day_numbers: Vec<u32> = plan.days.iter().map(|d| d.day).collect();
        let saver_day_recommendations = recommend_saver_days(
            &cost.records,
            &day_numbers,
            self.config.saver_day_pass_price,
        );
        let pass_recommendations = PassOptimizer::new(&reference.pass_prices, &self.config.pass_class)
            .optimize(&daily_summaries(&cost.records, &day_numbers))?;

        info!(
            "Priced {} day plan: {} segments, {} missing routes, total {} {}, best pass option '{}' saves {}",
            day_numbers.len(),
            cost.segments,
            cost.missing_routes.len(),
            self.config.currency,
            format_currency(cost.total),
            pass_recommendations.best_option.description,
            format_currency(pass_recommendations.best_option.savings)
        );

        plan.budget_breakdown.transportation = Some(format!(
            "~{} {} ({}, {} segments)",
            self.config.currency,
            format_currency(cost.total),
            self.config.tier_label,
            cost.segments
        ));
        plan.transportation_details = Some(TransportationDetails {
            total_cost: format_currency(cost.total),
            segments: cost.segments,
            fare_details: cost.records,
            missing_routes: cost.missing_routes,
            saver_day_recommendations,
            swiss_travel_pass_recommendations: pass_recommendations,
        });

        Ok(plan)
    }
}

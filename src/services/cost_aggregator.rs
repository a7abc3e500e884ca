use log::debug;

use crate::models::fare::{FareRecord, MissingRoute};
use crate::models::money::{format_currency, format_minutes};
use crate::models::travel_plan::{Activity, Day};
use crate::services::fare_lookup::FareTable;
use crate::services::location_normalizer::LocationNormalizer;

/// Priced output for a single day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayCost {
    pub records: Vec<FareRecord>,
    pub missing_routes: Vec<MissingRoute>,
    /// Regular-tier cost of the day's transport hops only
    pub transport_subtotal: f64,
    pub segments: u32,
}

/// Priced output for a whole plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanCost {
    pub records: Vec<FareRecord>,
    pub missing_routes: Vec<MissingRoute>,
    pub segments: u32,
    /// Regular-tier sum of every record, transport and activity
    pub total: f64,
}

pub struct CostAggregator<'a> {
    normalizer: &'a LocationNormalizer,
    fares: &'a FareTable,
}

impl<'a> CostAggregator<'a> {
    pub fn new(normalizer: &'a LocationNormalizer, fares: &'a FareTable) -> Self {
        Self { normalizer, fares }
    }

    /// Price every day and write each day's `transportCost`.
    pub fn aggregate(&self, days: &mut [Day]) -> PlanCost {
        let mut plan_cost = PlanCost::default();

        for day in days.iter_mut() {
            let day_cost = self.price_day(day);
            day.transport_cost = Some(format_currency(day_cost.transport_subtotal));

            plan_cost.segments += day_cost.segments;
            plan_cost.records.extend(day_cost.records);
            plan_cost.missing_routes.extend(day_cost.missing_routes);
        }

        plan_cost.total = plan_cost.records.iter().map(|r| r.price).sum();
        plan_cost
    }

    /// Walk `In -> bases... -> Out`, pricing each hop, and add an admission
    /// record after the hop that reaches each priced activity.
    pub fn price_day(&self, day: &Day) -> DayCost {
        let mut cost = DayCost::default();
        let mut current = day.entry.as_deref();

        for activity in &day.activities {
            if let Some(base) = activity.base.as_deref() {
                if let Some(from) = current {
                    self.price_hop(day.day, from, base, &mut cost);
                }
                current = Some(base);
            }
            if let Some(record) = admission_record(day.day, activity) {
                cost.records.push(record);
            }
        }

        if let (Some(from), Some(to)) = (current, day.exit.as_deref()) {
            self.price_hop(day.day, from, to, &mut cost);
        }

        cost
    }

    fn price_hop(&self, day: u32, from: &str, to: &str, cost: &mut DayCost) {
        let from = self.normalizer.normalize(from);
        let to = self.normalizer.normalize(to);
        if from == to {
            return;
        }

        match self.fares.lookup(&from, &to) {
            Some(fare) => {
                cost.transport_subtotal += fare.price;
                cost.segments += 1;
                cost.records.push(FareRecord {
                    day,
                    from,
                    to,
                    price: fare.price,
                    price_swisstravel: Some(fare.price_swisstravel),
                    price_saverday: Some(fare.price_saverday),
                    duration: Some(format_minutes(fare.duration)),
                    is_activity: false,
                });
            }
            None => {
                debug!("No fare for day {}: {} -> {}", day, from, to);
                cost.missing_routes.push(MissingRoute { day, from, to });
            }
        }
    }
}

/// Admission for an activity with a positive price. Independent of whether
/// the hop to its base could be priced.
fn admission_record(day: u32, activity: &Activity) -> Option<FareRecord> {
    let price = activity.price.filter(|p| *p > 0.0)?;
    let to = activity
        .location
        .clone()
        .or_else(|| activity.base.clone())
        .unwrap_or_else(|| activity.title.clone());
    let from = activity.base.clone().unwrap_or_else(|| to.clone());

    Some(FareRecord {
        day,
        from,
        to,
        price,
        price_swisstravel: activity.price_swisstravel,
        price_saverday: activity.price_saverday,
        duration: activity.duration.clone(),
        is_activity: true,
    })
}

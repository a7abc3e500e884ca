//! Multi-day travel pass optimizer.
//!
//! Passes come in fixed durations (3, 4, 6, 8 and 15 days). Instead of a
//! general windowed search, each trip length maps to a fixed menu of
//! strategies: cover the whole trip with the smallest pass that fits, or
//! pay regular fares at the start or end and cover the rest with a shorter
//! pass. Every strategy is costed, the menu is sorted by savings and the
//! first entry is the recommendation. Equal savings keep menu order.

use std::collections::HashMap;
use std::ops::Range;

use crate::error::EngineError;
use crate::models::fare::{DailySummary, FareRecord, PassOption, PassRecommendations};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassDuration {
    Three,
    Four,
    Six,
    Eight,
    Fifteen,
}

impl PassDuration {
    pub const ALL: [PassDuration; 5] = [
        PassDuration::Three,
        PassDuration::Four,
        PassDuration::Six,
        PassDuration::Eight,
        PassDuration::Fifteen,
    ];

    pub fn days(self) -> u32 {
        match self {
            PassDuration::Three => 3,
            PassDuration::Four => 4,
            PassDuration::Six => 6,
            PassDuration::Eight => 8,
            PassDuration::Fifteen => 15,
        }
    }

    pub fn label(self) -> String {
        format!("{}-day", self.days())
    }
}

/// Pass prices keyed by (duration in days, class).
#[derive(Debug, Clone, Default)]
pub struct PassPriceTable {
    prices: HashMap<(u32, String), f64>,
}

impl PassPriceTable {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, String, f64)>,
    {
        Self {
            prices: entries
                .into_iter()
                .map(|(days, class, price)| ((days, class), price))
                .collect(),
        }
    }

    pub fn price(&self, days: u32, class: &str) -> Result<f64, EngineError> {
        self.prices
            .get(&(days, class.to_string()))
            .copied()
            .ok_or_else(|| EngineError::MissingPassPrice {
                days,
                class: class.to_string(),
            })
    }

    /// Fails on the first pass duration without a price for `class`.
    pub fn ensure_complete(&self, class: &str) -> Result<(), EngineError> {
        for duration in PassDuration::ALL {
            self.price(duration.days(), class)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// One purchase strategy: which pass, and which day positions it covers.
/// Days outside `covered` are paid at the regular rate.
#[derive(Debug, Clone, PartialEq)]
pub struct PassStrategy {
    pub pass: Option<PassDuration>,
    pub covered: Range<usize>,
    pub description: String,
}

fn day_span(range: &Range<usize>) -> String {
    let (first, last) = (range.start + 1, range.end);
    if first == last {
        format!("day {}", first)
    } else {
        format!("days {}-{}", first, last)
    }
}

fn no_pass(n: usize) -> PassStrategy {
    PassStrategy {
        pass: None,
        covered: 0..0,
        description: format!("Regular fares for all {} days", n),
    }
}

fn cover_all(pass: PassDuration, n: usize) -> PassStrategy {
    let slack = pass.days() as usize - n.min(pass.days() as usize);
    let description = if slack == 0 {
        format!("{} pass covering all {} days", pass.label(), n)
    } else {
        format!(
            "{} pass covering all {} days ({} unused)",
            pass.label(),
            n,
            slack
        )
    };
    PassStrategy {
        pass: Some(pass),
        covered: 0..n,
        description,
    }
}

fn regular_then_pass(regular_days: usize, pass: PassDuration, n: usize) -> PassStrategy {
    let covered = regular_days..n;
    PassStrategy {
        description: format!(
            "Regular fares for {}, {} pass for {}",
            day_span(&(0..regular_days)),
            pass.label(),
            day_span(&covered)
        ),
        pass: Some(pass),
        covered,
    }
}

fn pass_then_regular(pass: PassDuration, n: usize) -> PassStrategy {
    let covered = 0..pass.days() as usize;
    PassStrategy {
        description: format!(
            "{} pass for {}, regular fares for {}",
            pass.label(),
            day_span(&covered),
            day_span(&(covered.end..n))
        ),
        pass: Some(pass),
        covered,
    }
}

/// The strategy menu for a trip of `n` days.
pub fn enumerate_strategies(n: usize) -> Vec<PassStrategy> {
    use PassDuration::*;

    match n {
        0..=2 => vec![no_pass(n)],
        3 => vec![cover_all(Three, n)],
        4 => vec![
            cover_all(Four, n),
            regular_then_pass(1, Three, n),
            pass_then_regular(Three, n),
        ],
        5 => vec![
            cover_all(Six, n),
            regular_then_pass(1, Four, n),
            pass_then_regular(Four, n),
        ],
        6 => vec![
            cover_all(Six, n),
            regular_then_pass(2, Four, n),
            pass_then_regular(Four, n),
        ],
        7 => vec![
            cover_all(Eight, n),
            regular_then_pass(1, Six, n),
            pass_then_regular(Six, n),
        ],
        8 => vec![
            cover_all(Eight, n),
            regular_then_pass(2, Six, n),
            pass_then_regular(Six, n),
        ],
        9 => vec![
            cover_all(Fifteen, n),
            regular_then_pass(1, Eight, n),
            pass_then_regular(Eight, n),
        ],
        _ => vec![cover_all(Fifteen, n)],
    }
}

/// Per-day regular and pass-tier sums, one entry per day in `days` order.
///
/// Records without a pass tier are assumed to cost the regular price under
/// the pass.
pub fn daily_summaries(records: &[FareRecord], days: &[u32]) -> Vec<DailySummary> {
    days.iter()
        .map(|&day| {
            let (sum_price, sum_price_swisstravel) = records
                .iter()
                .filter(|r| r.day == day)
                .fold((0.0, 0.0), |(regular, pass), r| {
                    (regular + r.price, pass + r.price_swisstravel.unwrap_or(r.price))
                });
            DailySummary {
                day,
                sum_price,
                sum_price_swisstravel,
            }
        })
        .collect()
}

pub struct PassOptimizer<'a> {
    prices: &'a PassPriceTable,
    class: &'a str,
}

impl<'a> PassOptimizer<'a> {
    pub fn new(prices: &'a PassPriceTable, class: &'a str) -> Self {
        Self { prices, class }
    }

    /// Cost every strategy for the trip described by `summaries` (one entry
    /// per trip day, in order) and pick the one with the largest savings.
    pub fn optimize(&self, summaries: &[DailySummary]) -> Result<PassRecommendations, EngineError> {
        let regular_cost: f64 = summaries.iter().map(|s| s.sum_price).sum();

        let mut all_options = enumerate_strategies(summaries.len())
            .into_iter()
            .enumerate()
            .map(|(index, strategy)| self.evaluate(index, &strategy, summaries, regular_cost))
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable, so ties stay in menu order
        all_options.sort_by(|a, b| b.savings.total_cmp(&a.savings));

        let best_option = all_options[0].clone();
        Ok(PassRecommendations {
            best_option,
            all_options,
            daily_summary: summaries.to_vec(),
        })
    }

    fn evaluate(
        &self,
        index: usize,
        strategy: &PassStrategy,
        summaries: &[DailySummary],
        regular_cost: f64,
    ) -> Result<PassOption, EngineError> {
        let Some(pass) = strategy.pass else {
            return Ok(PassOption {
                option: "No pass".to_string(),
                description: strategy.description.clone(),
                pass_type: "none".to_string(),
                pass_cost: 0.0,
                total_cost: regular_cost,
                regular_cost,
                savings: 0.0,
            });
        };

        let pass_cost = self.prices.price(pass.days(), self.class)?;
        let fares: f64 = summaries
            .iter()
            .enumerate()
            .map(|(position, summary)| {
                if strategy.covered.contains(&position) {
                    summary.sum_price_swisstravel
                } else {
                    summary.sum_price
                }
            })
            .sum();
        let total_cost = fares + pass_cost;

        Ok(PassOption {
            option: format!("Option {}", index + 1),
            description: strategy.description.clone(),
            pass_type: pass.label(),
            pass_cost,
            total_cost,
            regular_cost,
            savings: regular_cost - total_cost,
        })
    }
}

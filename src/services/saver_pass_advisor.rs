use crate::models::fare::{FareRecord, SaverDayRecommendation};

/// Recommend a one-day saver pass on each day where it beats paying the
/// regular fares.
///
/// Days are judged independently of each other and of any multi-day pass.
/// Records without a saver tier contribute 0 to the discounted sum.
pub fn recommend_saver_days(
    records: &[FareRecord],
    days: &[u32],
    pass_price: f64,
) -> Vec<SaverDayRecommendation> {
    days.iter()
        .filter_map(|&day| {
            let mut sum_price = 0.0;
            let mut sum_price_saverday = 0.0;
            let mut any = false;
            for record in records.iter().filter(|r| r.day == day) {
                any = true;
                sum_price += record.price;
                sum_price_saverday += record.price_saverday.unwrap_or(0.0);
            }

            let savings = sum_price - (sum_price_saverday + pass_price);
            (any && savings > 0.0).then_some(SaverDayRecommendation {
                day,
                sum_price,
                sum_price_saverday,
                savings,
            })
        })
        .collect()
}

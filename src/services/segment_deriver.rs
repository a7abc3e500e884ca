use crate::models::travel_plan::TravelPlan;

fn station(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Set each day's `In`/`Out` from the accommodation chain.
///
/// Day 1 enters from the starting city, every later day from the previous
/// night's accommodation. Each day leaves to its own accommodation, except
/// the last day which leaves to the ending city. Values are always rebuilt
/// from those base fields, so running this twice changes nothing.
pub fn derive_segments(plan: &mut TravelPlan) {
    plan.days.sort_by_key(|day| day.day);

    let last = match plan.days.len().checked_sub(1) {
        Some(last) => last,
        None => return,
    };

    let mut previous_accommodation: Option<String> = None;
    for (index, day) in plan.days.iter_mut().enumerate() {
        let accommodation = day.accommodation.as_deref().and_then(station);

        day.entry = if index == 0 {
            station(&plan.starting_city)
        } else {
            previous_accommodation.clone()
        };
        day.exit = if index == last {
            station(&plan.ending_city)
        } else {
            accommodation.clone()
        };

        previous_accommodation = accommodation;
    }
}

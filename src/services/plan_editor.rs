use serde::{Deserialize, Serialize};

use crate::error::PlanEditError;
use crate::models::travel_plan::{Activity, Day, PriceSource, TravelPlan};

/// An edit made in the itinerary UI. Every edit is followed by a full
/// re-pricing of the plan.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlanEdit {
    AddActivity {
        day: u32,
        activity: Activity,
    },
    UpdateActivity {
        day: u32,
        index: usize,
        activity: Activity,
    },
    RemoveActivity {
        day: u32,
        index: usize,
    },
    SetAccommodation {
        day: u32,
        accommodation: Option<String>,
    },
    AddDay,
    RemoveDay {
        day: u32,
    },
}

impl PlanEdit {
    pub fn apply(self, plan: &mut TravelPlan) -> Result<(), PlanEditError> {
        match self {
            PlanEdit::AddActivity { day, activity } => add_activity(plan, day, activity),
            PlanEdit::UpdateActivity {
                day,
                index,
                activity,
            } => update_activity(plan, day, index, activity),
            PlanEdit::RemoveActivity { day, index } => remove_activity(plan, day, index).map(|_| ()),
            PlanEdit::SetAccommodation { day, accommodation } => {
                set_accommodation(plan, day, accommodation)
            }
            PlanEdit::AddDay => {
                add_day(plan);
                Ok(())
            }
            PlanEdit::RemoveDay { day } => remove_day(plan, day).map(|_| ()),
        }
    }
}

fn day_mut(plan: &mut TravelPlan, day: u32) -> Result<&mut Day, PlanEditError> {
    plan.day_mut(day).ok_or(PlanEditError::DayNotFound(day))
}

// Whatever the traveller typed in the price field is theirs.
fn mark_user_price(activity: &mut Activity) {
    if activity.price.is_some() && activity.price_source.is_none() {
        activity.price_source = Some(PriceSource::Manual);
    }
}

pub fn add_activity(plan: &mut TravelPlan, day: u32, mut activity: Activity) -> Result<(), PlanEditError> {
    mark_user_price(&mut activity);
    day_mut(plan, day)?.activities.push(activity);
    Ok(())
}

pub fn update_activity(
    plan: &mut TravelPlan,
    day: u32,
    index: usize,
    mut activity: Activity,
) -> Result<(), PlanEditError> {
    let slot = day_mut(plan, day)?
        .activities
        .get_mut(index)
        .ok_or(PlanEditError::ActivityNotFound { day, index })?;

    // The UI echoes `priceSource: derived` back; a changed price is still the traveller's
    if activity.price_source == Some(PriceSource::Derived) && activity.price.is_some() {
        if activity.price != slot.price {
            activity.price_source = Some(PriceSource::Manual);
            if activity.price_swisstravel == slot.price_swisstravel {
                activity.price_swisstravel = None;
            }
            if activity.price_saverday == slot.price_saverday {
                activity.price_saverday = None;
            }
        } else if activity.price_swisstravel != slot.price_swisstravel
            || activity.price_saverday != slot.price_saverday
        {
            activity.price_source = Some(PriceSource::Manual);
        }
    }
    mark_user_price(&mut activity);

    *slot = activity;
    Ok(())
}

pub fn remove_activity(plan: &mut TravelPlan, day: u32, index: usize) -> Result<Activity, PlanEditError> {
    let activities = &mut day_mut(plan, day)?.activities;
    if index >= activities.len() {
        return Err(PlanEditError::ActivityNotFound { day, index });
    }
    Ok(activities.remove(index))
}

pub fn set_accommodation(
    plan: &mut TravelPlan,
    day: u32,
    accommodation: Option<String>,
) -> Result<(), PlanEditError> {
    day_mut(plan, day)?.accommodation = accommodation.filter(|a| !a.trim().is_empty());
    Ok(())
}

/// Append an empty day after the current last day. Returns its number.
pub fn add_day(plan: &mut TravelPlan) -> u32 {
    let next = plan.days.iter().map(|d| d.day).max().unwrap_or(0) + 1;
    plan.days.push(Day::new(next));
    next
}

/// Remove `day` and renumber the remaining days 1..N in their current order.
pub fn remove_day(plan: &mut TravelPlan, day: u32) -> Result<Day, PlanEditError> {
    let position = plan
        .days
        .iter()
        .position(|d| d.day == day)
        .ok_or(PlanEditError::DayNotFound(day))?;
    let removed = plan.days.remove(position);
    plan.days.sort_by_key(|d| d.day);
    for (index, d) in plan.days.iter_mut().enumerate() {
        d.day = index as u32 + 1;
    }
    Ok(removed)
}

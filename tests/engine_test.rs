mod common;

use std::sync::Arc;

use common::{activity, fixture_engine, fixture_reference, four_day_plan};
use itinerary_pricing_api::{
    config::PricingConfig,
    models::travel_plan::{PriceSource, TravelPlan},
    services::{plan_editor, pricing_engine::PricingEngine},
};

#[test]
fn four_day_plan_chains_and_enumerates_three_strategies() {
    let priced = fixture_engine().price_plan(four_day_plan()).unwrap();

    assert_eq!(priced.days[0].entry.as_deref(), Some("S"));
    assert_eq!(priced.days[0].exit.as_deref(), Some("A"));
    assert_eq!(priced.days[3].entry.as_deref(), Some("C"));
    assert_eq!(priced.days[3].exit.as_deref(), Some("E"));

    let details = priced.transportation_details.unwrap();
    assert_eq!(details.segments, 4);
    assert_eq!(details.total_cost, "120.00");
    assert!(details.missing_routes.is_empty());
    assert!(details.saver_day_recommendations.is_empty());

    let recs = details.swiss_travel_pass_recommendations;
    assert_eq!(recs.all_options.len(), 3);
    let mut types: Vec<&str> = recs.all_options.iter().map(|o| o.pass_type.as_str()).collect();
    types.sort();
    assert_eq!(types, vec!["3-day", "3-day", "4-day"]);

    // day 1 at 20 regular, days 2-4 on the 3-day pass: 20 + 244
    assert_eq!(recs.best_option.option, "Option 2");
    assert_eq!(recs.best_option.total_cost, 264.0);
    assert_eq!(recs.best_option.savings, -144.0);
    for option in &recs.all_options {
        assert!(recs.best_option.savings >= option.savings);
        assert_eq!(option.regular_cost, 120.0);
    }

    assert_eq!(
        priced.budget_breakdown.transportation.as_deref(),
        Some("~CHF 120.00 (2nd class, 4 segments)")
    );
}

#[test]
fn empty_plan_is_returned_unchanged() {
    let plan = TravelPlan {
        starting_city: "S".into(),
        ending_city: "E".into(),
        ..Default::default()
    };
    let priced = fixture_engine().price_plan(plan.clone()).unwrap();
    assert_eq!(priced, plan);
    assert!(priced.transportation_details.is_none());
}

#[test]
fn catalog_price_and_saver_day() {
    let mut plan = four_day_plan();
    plan.days[1].activities.push(activity("Top of the world", "Summit", None));

    let priced = fixture_engine().price_plan(plan).unwrap();
    let summit = &priced.days[1].activities[0];
    // day 2 leaves to B, so the B-anchored entry is chosen
    assert_eq!(summit.price, Some(120.0));
    assert_eq!(summit.base.as_deref(), Some("B"));
    assert_eq!(summit.price_source, Some(PriceSource::Derived));

    let details = priced.transportation_details.unwrap();
    let admissions: Vec<_> = details.fare_details.iter().filter(|r| r.is_activity).collect();
    assert_eq!(admissions.len(), 1);
    assert_eq!(admissions[0].from, "B");
    assert_eq!(admissions[0].to, "Summit");

    // 40 + 120 regular against 0 + 60 with the saver pass: 160 - (60 + 52)
    assert_eq!(details.saver_day_recommendations.len(), 1);
    assert_eq!(details.saver_day_recommendations[0].day, 2);
    assert_eq!(details.saver_day_recommendations[0].savings, 48.0);
    assert_eq!(details.total_cost, "240.00");
}

#[test]
fn missing_route_is_listed_and_excluded() {
    let mut plan = four_day_plan();
    plan.days[1]
        .activities
        .push(activity("Top of the world", "Summit", Some("Peak Station")));

    let priced = fixture_engine().price_plan(plan).unwrap();
    let details = priced.transportation_details.unwrap();

    assert_eq!(details.missing_routes.len(), 1);
    let missing = &details.missing_routes[0];
    assert_eq!((missing.day, missing.from.as_str(), missing.to.as_str()), (2, "Peak Station", "B"));

    // S->A, A->Peak Station, B->C, C->E priced; the admission still counts
    assert_eq!(details.segments, 4);
    assert_eq!(details.total_cost, format!("{:.2}", 20.0 + 30.0 + 90.0 + 35.0 + 25.0));
    assert_eq!(priced.days[1].transport_cost.as_deref(), Some("30.00"));
}

#[test]
fn aliases_collapse_to_the_same_station() {
    let mut plan = four_day_plan();
    plan.starting_city = "Start City".into();
    plan.days[0].accommodation = Some("Alpha Town".into());
    plan.days[1].activities.push(activity("Stroll", "Old Town", Some("A")));

    let details = fixture_engine()
        .price_plan(plan)
        .unwrap()
        .transportation_details
        .unwrap();
    // Alpha Town -> A is a same-station hop: no record, no missing route
    assert!(details.missing_routes.is_empty());
    assert_eq!(details.segments, 4);
    assert_eq!(details.fare_details[0].from, "S");
    assert_eq!(details.fare_details[0].to, "A");
}

#[test]
fn repricing_own_output_is_stable() {
    let mut plan = four_day_plan();
    plan.days[1].activities.push(activity("Top of the world", "Summit", None));
    let mut manual = activity("Exhibition", "Museum", None);
    manual.price = Some(12.0);
    plan.days[2].activities.push(manual);

    let engine = fixture_engine();
    let once = engine.price_plan(plan).unwrap();

    // Through JSON, the way the UI hands it back
    let json = serde_json::to_string(&once).unwrap();
    let reloaded: TravelPlan = serde_json::from_str(&json).unwrap();
    let twice = engine.price_plan(reloaded).unwrap();

    for (a, b) in once.days.iter().zip(twice.days.iter()) {
        assert_eq!(a.entry, b.entry);
        assert_eq!(a.exit, b.exit);
        assert_eq!(a.transport_cost, b.transport_cost);
    }
    assert_eq!(
        serde_json::to_value(&once.transportation_details).unwrap(),
        serde_json::to_value(&twice.transportation_details).unwrap()
    );
    assert_eq!(once.budget_breakdown, twice.budget_breakdown);

    let museum = &twice.days[2].activities[0];
    assert_eq!(museum.price, Some(12.0));
    assert_eq!(museum.price_source, Some(PriceSource::Manual));
}

#[test]
fn pass_table_gap_aborts_pricing() {
    let mut reference = fixture_reference();
    reference.pass_prices = Default::default();
    let engine = PricingEngine::new(Arc::new(reference), PricingConfig::default());
    assert!(engine.price_plan(four_day_plan()).is_err());
}

#[test]
fn two_day_trip_has_no_pass_option() {
    let mut plan = four_day_plan();
    plan.days.truncate(2);
    let recs = fixture_engine()
        .price_plan(plan)
        .unwrap()
        .transportation_details
        .unwrap()
        .swiss_travel_pass_recommendations;
    assert_eq!(recs.all_options.len(), 1);
    assert_eq!(recs.best_option.pass_type, "none");
    assert_eq!(recs.best_option.savings, 0.0);
}

#[test]
fn edited_plan_prices_like_a_fresh_one() {
    let engine = fixture_engine();

    let mut plan = four_day_plan();
    plan.days[1].activities.push(activity("Top of the world", "Summit", None));
    let mut edited = engine.price_plan(plan).unwrap();
    plan_editor::set_accommodation(&mut edited, 2, Some("Peak Station".into())).unwrap();
    let edited = engine.price_plan(edited).unwrap();

    let mut fresh = four_day_plan();
    fresh.days[1].accommodation = Some("Peak Station".into());
    fresh.days[1].activities.push(activity("Top of the world", "Summit", None));
    let fresh = engine.price_plan(fresh).unwrap();

    let summit = &edited.days[1].activities[0];
    assert_eq!(summit.price, Some(90.0));
    assert_eq!(summit.base.as_deref(), Some("Peak Station"));
    assert_eq!(summit, &fresh.days[1].activities[0]);
    assert_eq!(
        serde_json::to_value(&edited.transportation_details).unwrap(),
        serde_json::to_value(&fresh.transportation_details).unwrap()
    );
    assert_eq!(
        edited.transportation_details.unwrap().total_cost,
        "165.00"
    );
}

#[test]
fn price_typed_over_a_catalog_price_survives_repricing() {
    let engine = fixture_engine();

    let mut plan = four_day_plan();
    plan.days[1].activities.push(activity("Top of the world", "Summit", None));
    let mut priced = engine.price_plan(plan).unwrap();

    let mut echoed = priced.days[1].activities[0].clone();
    assert_eq!(echoed.price_source, Some(PriceSource::Derived));
    echoed.price = Some(40.0);
    plan_editor::update_activity(&mut priced, 2, 0, echoed).unwrap();

    let repriced = engine.price_plan(priced).unwrap();
    let summit = &repriced.days[1].activities[0];
    assert_eq!(summit.price, Some(40.0));
    assert_eq!(summit.price_source, Some(PriceSource::Manual));
}

#[test]
fn padded_activity_base_matches_its_station() {
    let mut plan = four_day_plan();
    plan.days[1]
        .activities
        .push(activity("Top of the world", "Summit", Some(" Peak Station ")));
    let details = fixture_engine()
        .price_plan(plan)
        .unwrap()
        .transportation_details
        .unwrap();
    assert_eq!(details.fare_details[1].to, "Peak Station");
    assert_eq!(details.missing_routes.len(), 1);
}

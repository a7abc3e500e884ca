pub mod activity_enricher;
pub mod cost_aggregator;
pub mod fare_lookup;
pub mod location_normalizer;
pub mod pass_optimizer;
pub mod plan_editor;
pub mod pricing_engine;
pub mod reference_data;
pub mod saver_pass_advisor;
pub mod segment_deriver;

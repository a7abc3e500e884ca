pub mod fare;
pub mod money;
pub mod reference;
pub mod travel_plan;

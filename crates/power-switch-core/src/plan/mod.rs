mod plan_index;
mod plan_record;
mod plan_set;

pub use {plan_index::PlanIndex, plan_record::PlanRecord, plan_set::PlanSet};

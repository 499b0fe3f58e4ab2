mod parser;
mod plan_discovery;

pub(crate) use parser::parse_listing;
#[cfg(test)]
pub(crate) use parser::parse_plan_line;

pub use plan_discovery::PlanDiscovery;

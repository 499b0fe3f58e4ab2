mod parser;
mod plan_discovery;

mod activation;
mod discovery;
mod plan;

pub mod breakdown_table;
pub mod metrics;

pub mod affordability;
pub mod analysis;
pub mod payment;
pub mod schedule;

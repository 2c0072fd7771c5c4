pub mod partition;
pub mod search;

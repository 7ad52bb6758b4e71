pub mod explain;
pub mod rank;
pub mod search;

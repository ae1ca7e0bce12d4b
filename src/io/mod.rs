/// CSV export of comparison results.
pub mod export;

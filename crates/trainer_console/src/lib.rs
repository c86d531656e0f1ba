//! Terminal admin console for a personal-training business.
//!
//! Every view is one fetch-then-render cycle against the traineeapp REST
//! API: customers, trainings, a month calendar of sessions, and a bar chart
//! of total minutes per activity. The console keeps no state of its own.

pub mod error;
pub mod stats;
pub mod views;

pub mod panel;

pub use panel::{DashboardKind, DashboardPage};

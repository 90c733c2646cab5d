mod auth;
pub mod client;
mod employees;
mod leave;
mod salary;
mod shifts;
pub mod types;

pub use client::*;
pub use salary::FULL_SHEET_LIMIT;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

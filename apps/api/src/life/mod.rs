// Life-in-weeks timeline: stage table, week grid, and per-week classification.
// Pure date arithmetic. Only handlers.rs touches the clock or HTTP.

pub mod classify;
pub mod grid;
pub mod handlers;
pub mod stages;

/// Upper bound accepted for an expected lifespan, in years.
pub const MAX_LIFESPAN_YEARS: u32 = 150;

/// Lifespan used when neither the request nor the environment sets one.
pub const DEFAULT_LIFESPAN_YEARS: u32 = 85;

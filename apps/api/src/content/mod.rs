// Site catalog: posts, courses, projects, leaderboard.
// Backends implement ContentStore; handlers apply filters on top.

pub mod filter;
pub mod handlers;
pub mod pg;
pub mod seed;
pub mod store;

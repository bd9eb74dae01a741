// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod runtime;
pub mod scheduler;
pub mod scramble;
pub mod session;
pub mod solve_time;
pub mod stats;
pub mod timer;
pub mod util;

pub use solve_time::Time;

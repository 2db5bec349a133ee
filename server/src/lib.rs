// gRPC surface of the market planner. The engine crate stays free of I/O; this crate owns
// the mutable record store and sub-category list behind an async lock.

pub mod services;
pub mod state;

//! Launching the traced program and the session record it produces.
pub mod launcher;
pub use launcher::launch;

pub mod session;
pub use session::TraceSession;

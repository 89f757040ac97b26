//! Data models exchanged with the Lernify backend.
//!
//! Field names follow the backend's JSON contract; the client does not
//! enforce invariants beyond basic form validation.

mod assessment;
mod resume;
mod roadmap;
mod user;

pub use assessment::*;
pub use resume::*;
pub use roadmap::*;
pub use user::*;

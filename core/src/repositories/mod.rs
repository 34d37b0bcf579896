pub mod enrollment;
pub mod session;

pub use enrollment::{EnrollmentRepository, InMemoryEnrollmentRepository};
pub use session::{MemorySessionStore, SessionStore};

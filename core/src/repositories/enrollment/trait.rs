//! Enrollment repository trait: where completed MFA registrations are kept.
//!
//! Persistent storage belongs to the surrounding backend; this crate ships an
//! in-memory implementation for development and tests.

use async_trait::async_trait;

use crate::domain::entities::Enrollment;
use crate::domain::value_objects::MfaMethod;
use crate::errors::DomainError;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Record an enrollment, replacing any existing one for the same
    /// `(username, method)` pair.
    ///
    /// # Returns
    /// * `Ok(Enrollment)` - The stored record
    /// * `Err(DomainError)` - Storage failure
    async fn enroll(&self, enrollment: Enrollment) -> Result<Enrollment, DomainError>;

    /// Find the enrollment of one method for a user
    async fn find(
        &self,
        username: &str,
        method: MfaMethod,
    ) -> Result<Option<Enrollment>, DomainError>;

    /// All enrollments of a user, ordered by method
    async fn find_by_username(&self, username: &str) -> Result<Vec<Enrollment>, DomainError>;

    /// Remove the enrollment of one method. Returns whether one existed.
    async fn remove(&self, username: &str, method: MfaMethod) -> Result<bool, DomainError>;
}

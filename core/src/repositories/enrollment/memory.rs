//! In-memory implementation of EnrollmentRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Enrollment;
use crate::domain::value_objects::MfaMethod;
use crate::errors::DomainError;

use super::trait_::EnrollmentRepository;

type EnrollmentKey = (String, MfaMethod);

/// Process-local enrollment store. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: Arc<RwLock<HashMap<EnrollmentKey, Enrollment>>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored enrollments
    pub async fn count(&self) -> usize {
        self.enrollments.read().await.len()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn enroll(&self, enrollment: Enrollment) -> Result<Enrollment, DomainError> {
        let mut enrollments = self.enrollments.write().await;
        let key = (enrollment.username.clone(), enrollment.method);
        enrollments.insert(key, enrollment.clone());
        Ok(enrollment)
    }

    async fn find(
        &self,
        username: &str,
        method: MfaMethod,
    ) -> Result<Option<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments.get(&(username.to_string(), method)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().await;
        let mut found: Vec<Enrollment> = enrollments
            .values()
            .filter(|e| e.username == username)
            .cloned()
            .collect();
        found.sort_by_key(|e| e.method);
        Ok(found)
    }

    async fn remove(&self, username: &str, method: MfaMethod) -> Result<bool, DomainError> {
        let mut enrollments = self.enrollments.write().await;
        Ok(enrollments.remove(&(username.to_string(), method)).is_some())
    }
}

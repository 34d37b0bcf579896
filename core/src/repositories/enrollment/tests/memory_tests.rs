use crate::domain::entities::Enrollment;
use crate::domain::value_objects::MfaMethod;
use crate::repositories::enrollment::{EnrollmentRepository, InMemoryEnrollmentRepository};

#[tokio::test]
async fn test_enroll_and_find() {
    let repo = InMemoryEnrollmentRepository::new();
    repo.enroll(Enrollment::new("alice", MfaMethod::Sms, "+14155551234"))
        .await
        .unwrap();

    let found = repo.find("alice", MfaMethod::Sms).await.unwrap().unwrap();
    assert_eq!(found.phone_number, "+14155551234");
    assert!(repo.find("bob", MfaMethod::Sms).await.unwrap().is_none());
}

#[tokio::test]
async fn test_re_enroll_replaces_phone() {
    let repo = InMemoryEnrollmentRepository::new();
    repo.enroll(Enrollment::new("alice", MfaMethod::Sms, "+14155551234"))
        .await
        .unwrap();
    repo.enroll(Enrollment::new("alice", MfaMethod::Sms, "+442071838750"))
        .await
        .unwrap();

    assert_eq!(repo.count().await, 1);
    let all = repo.find_by_username("alice").await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].phone_number, "+442071838750");
}

#[tokio::test]
async fn test_remove() {
    let repo = InMemoryEnrollmentRepository::new();
    repo.enroll(Enrollment::new("alice", MfaMethod::Sms, "+14155551234"))
        .await
        .unwrap();

    assert!(repo.remove("alice", MfaMethod::Sms).await.unwrap());
    assert!(!repo.remove("alice", MfaMethod::Sms).await.unwrap());
    assert!(repo.find_by_username("alice").await.unwrap().is_empty());
}

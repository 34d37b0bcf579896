//! Integration tests for the SMS registration flow through the public API

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use sm_core::domain::entities::{RegistrationForm, RegistrationState};
use sm_core::domain::value_objects::{MfaMethod, Principal, ProviderCredentials, ProviderError};
use sm_core::repositories::{EnrollmentRepository, InMemoryEnrollmentRepository, MemorySessionStore};
use sm_core::services::otp::{generator_for, OtpStrategy};
use sm_core::services::{RegistrationFlow, SmsDeliveryTrait, SmsOtpConfig, SmsOtpService};

struct RecordingDelivery {
    credentials: ProviderCredentials,
    bodies: Mutex<Vec<String>>,
}

#[async_trait]
impl SmsDeliveryTrait for RecordingDelivery {
    fn credentials(&self) -> &ProviderCredentials {
        &self.credentials
    }

    async fn send(&self, message: &str, _from: &str, _to: &str) -> Result<String, ProviderError> {
        self.bodies.lock().unwrap().push(message.to_string());
        Ok("SM00000000000000000000000000000001".to_string())
    }

    fn provider_name(&self) -> &str {
        "Recording"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

#[tokio::test]
async fn test_registration_with_trait_object_delivery() {
    let delivery = Arc::new(RecordingDelivery {
        credentials: ProviderCredentials::new("ACtest", "token", "+15005550006"),
        bodies: Mutex::new(Vec::new()),
    });
    let dyn_delivery: Arc<dyn SmsDeliveryTrait> = delivery.clone();
    let config = SmsOtpConfig {
        app_name: "Console".to_string(),
    };
    let otp = Arc::new(SmsOtpService::new(
        dyn_delivery,
        generator_for(OtpStrategy::Secure),
        config,
    ));
    let enrollments = Arc::new(InMemoryEnrollmentRepository::new());
    let flow = RegistrationFlow::new(otp, enrollments.clone());

    let session = MemorySessionStore::new();
    let principal = Principal::new("dba");

    let view = flow
        .handle(&principal, &session, &RegistrationForm::send_code("+442071838750"))
        .await
        .unwrap();
    assert_eq!(view.state, RegistrationState::CodeSent);

    let body = delivery.bodies.lock().unwrap().last().cloned().unwrap();
    assert!(body.starts_with("Your Console verification code is: "));
    let code = body.rsplit(' ').next().unwrap().to_string();
    assert_eq!(code.len(), 6);

    let view = flow
        .handle(&principal, &session, &RegistrationForm::verify_code(code))
        .await
        .unwrap();
    assert_eq!(view.state, RegistrationState::Registered);

    let enrollment = enrollments.find("dba", MfaMethod::Sms).await.unwrap().unwrap();
    assert_eq!(enrollment.phone_number, "+442071838750");
    assert!(session.is_empty());
}

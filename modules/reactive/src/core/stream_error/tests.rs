use super::StreamError;

#[test]
fn error_messages_are_stable() {
  assert_eq!(StreamError::InvalidDemand.to_string(), "invalid demand request");
  assert_eq!(StreamError::Failed.to_string(), "stream failed");
  assert_eq!(StreamError::operator("map", "boom").to_string(), "operator `map` failed: boom");
}

#[test]
fn protocol_violations_are_classified() {
  assert!(StreamError::InvalidDemand.is_protocol_violation());
  assert!(StreamError::DemandExceeded.is_protocol_violation());
  assert!(!StreamError::Failed.is_protocol_violation());
}

use crate::domain::{ClientSession, Credential};
use crate::FlowError;

/// Linear search of the credential list for an exact match on both fields.
/// On success the password is stripped and the remainder becomes the active
/// session. The failure case is a single generic error so callers cannot
/// tell an unknown email from a wrong password.
#[tracing::instrument(skip(credentials, password))]
pub fn authenticate(
    credentials: &[Credential],
    email: &str,
    password: &str,
) -> Result<ClientSession, FlowError> {
    credentials
        .iter()
        .find(|c| c.email == email && c.password == password)
        .map(ClientSession::from)
        .ok_or(FlowError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Vec<Credential> {
        vec![
            Credential {
                id: "c1".to_string(),
                email: "client@example.com".to_string(),
                password: "password123".to_string(),
                name: "Demo Client".to_string(),
                company: "ABC Corporation".to_string(),
            },
            Credential {
                id: "c2".to_string(),
                email: "client2@example.com".to_string(),
                password: "password123".to_string(),
                name: "Test Client".to_string(),
                company: "XYZ Industries".to_string(),
            },
        ]
    }

    #[test]
    fn matching_credentials_yield_a_session_without_password() {
        let session = authenticate(&credentials(), "client@example.com", "password123").unwrap();
        assert_eq!(session.id, "c1");
        assert_eq!(session.name, "Demo Client");
        assert_eq!(session.company, "ABC Corporation");
        // The serialized session never contains the password field.
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("password"));
    }

    #[test]
    fn wrong_password_and_unknown_email_fail_identically() {
        let wrong_password =
            authenticate(&credentials(), "client@example.com", "wrong").unwrap_err();
        let unknown_email =
            authenticate(&credentials(), "nobody@example.com", "password123").unwrap_err();
        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password, FlowError::InvalidCredentials);
    }
}

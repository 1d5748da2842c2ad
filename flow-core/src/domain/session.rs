use serde::{Deserialize, Serialize};

/// A portal login record from the sample credential list. Plaintext
/// comparison only; hardening is an explicit non-goal of the portal.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub company: String,
}

/// The locally persisted identity of a logged-in portal client. Built from
/// a [`Credential`] with the password stripped; this is the shape that gets
/// serialized to the session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSession {
    pub id: String,
    pub email: String,
    pub name: String,
    pub company: String,
}

impl From<&Credential> for ClientSession {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id.clone(),
            email: credential.email.clone(),
            name: credential.name.clone(),
            company: credential.company.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// The session principal a record belongs to.
///
/// Anonymous identities are valid session principals but are barred from the
/// record store by controller policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: Option<String>,
    pub is_anonymous: bool,
}

impl Identity {
    pub fn registered(uid: String, email: Option<String>) -> Self {
        Self {
            uid,
            email,
            is_anonymous: false,
        }
    }

    pub fn anonymous(uid: String) -> Self {
        Self {
            uid,
            email: None,
            is_anonymous: true,
        }
    }
}

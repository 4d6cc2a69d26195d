use crate::repos::user_store::UserRecord;

/// Who the current request is acting as.
///
/// The gate inserts exactly one of these into the extensions of every request it wraps.
/// Anonymous is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Authenticated(UserRecord),
    Anonymous,
}

impl Identity {
    pub fn into_user(self) -> Option<UserRecord> {
        match self {
            Identity::Authenticated(user) => Some(user),
            Identity::Anonymous => None,
        }
    }
}

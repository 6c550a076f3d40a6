use uuid::Uuid;

/// Identity of the authenticated user, as exposed by the session provider.
///
/// Created rows are scoped to `user_id`; `email` is only a display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
}

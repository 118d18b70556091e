//! Invitation entity and its public lookup token.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned invitation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvitationId(i64);

impl InvitationId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// Random public token used to look an invitation up.
///
/// # Examples
/// ```
/// use wedding_backend::domain::InvitationToken;
///
/// let token = InvitationToken::random();
/// let parsed: InvitationToken = token.to_string().parse().expect("token parses");
/// assert_eq!(parsed, token);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvitationToken(Uuid);

impl InvitationToken {
    /// Generate a fresh v4 token.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Borrow the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for InvitationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for InvitationToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A stored invitation.
///
/// Serialises as `{"id", "uuid", "guest_names", "is_plural", "created_at"}`
/// with `created_at` in RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    /// Store-assigned identifier.
    pub id: InvitationId,
    /// Public lookup token.
    pub uuid: InvitationToken,
    /// Free-text names as printed on the invitation.
    pub guest_names: String,
    /// Whether the invitation addresses more than one person.
    pub is_plural: bool,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Validation failures for [`NewInvitation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvitationValidationError {
    /// `guest_names` was empty once trimmed.
    #[error("guest names must not be blank")]
    BlankGuestNames,
}

/// Administrative request to create an invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvitation {
    guest_names: String,
    is_plural: bool,
}

impl NewInvitation {
    /// Validate the administrative input.
    pub fn new(
        guest_names: impl Into<String>,
        is_plural: bool,
    ) -> Result<Self, InvitationValidationError> {
        let guest_names = guest_names.into();
        if guest_names.trim().is_empty() {
            return Err(InvitationValidationError::BlankGuestNames);
        }
        Ok(Self {
            guest_names,
            is_plural,
        })
    }

    /// Names as entered.
    #[must_use]
    pub fn guest_names(&self) -> &str {
        &self.guest_names
    }

    /// Plural flag.
    #[must_use]
    pub const fn is_plural(&self) -> bool {
        self.is_plural
    }
}

/// Everything the store needs to insert an invitation.
///
/// The token and timestamp are assigned by the service, never by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationDraft {
    /// Freshly generated token.
    pub uuid: InvitationToken,
    /// Names as entered.
    pub guest_names: String,
    /// Plural flag.
    pub is_plural: bool,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn blank_guest_names_are_rejected(#[case] names: &str) {
        assert_eq!(
            NewInvitation::new(names, false),
            Err(InvitationValidationError::BlankGuestNames)
        );
    }

    #[rstest]
    fn guest_names_are_kept_verbatim() {
        let invitation = NewInvitation::new(" Ada & George ", true).expect("names are valid");
        assert_eq!(invitation.guest_names(), " Ada & George ");
        assert!(invitation.is_plural());
    }

    #[rstest]
    fn invitation_serialises_with_wire_field_names() {
        let uuid = Uuid::parse_str("6f1c7a5e-5d3b-4b63-9a1e-2a0f4f3c9b11").expect("uuid");
        let created_at = Utc
            .with_ymd_and_hms(2025, 6, 14, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let invitation = Invitation {
            id: InvitationId::new(4),
            uuid: InvitationToken::from_uuid(uuid),
            guest_names: "Ada & George".to_owned(),
            is_plural: true,
            created_at,
        };

        let value = serde_json::to_value(&invitation).expect("invitation serialises");
        assert_eq!(
            value,
            json!({
                "id": 4,
                "uuid": "6f1c7a5e-5d3b-4b63-9a1e-2a0f4f3c9b11",
                "guest_names": "Ada & George",
                "is_plural": true,
                "created_at": "2025-06-14T12:00:00Z",
            })
        );
    }

    #[rstest]
    fn token_rejects_malformed_text() {
        assert!("not-a-uuid".parse::<InvitationToken>().is_err());
    }
}

//! Diesel table definitions.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! after a migration changes a table.

diesel::table! {
    /// Wedding guests.
    guest (id) {
        /// Sequence-assigned primary key.
        id -> Int8,
        /// Given name, at most 255 characters.
        first_name -> Varchar,
        /// Family name, at most 255 characters.
        last_name -> Varchar,
    }
}

diesel::table! {
    /// Printed invitations and their public lookup tokens.
    invitation (id) {
        /// Sequence-assigned primary key.
        id -> Int8,
        /// Unique public token.
        uuid -> Uuid,
        /// Names as printed on the invitation.
        guest_names -> Text,
        /// Whether the invitation addresses more than one person.
        is_plural -> Bool,
        /// Creation instant.
        created_at -> Timestamptz,
    }
}

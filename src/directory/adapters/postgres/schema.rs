//! Diesel schema for directory persistence.
//!
//! Identifier columns mirror the identity provider's opaque string ids.
//! `workspace_members` carries a composite primary key so the
//! (workspace, user) uniqueness invariant is enforced by the store.

diesel::table! {
    /// Users mirrored from the identity provider.
    users (id) {
        /// Provider-issued user identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Unique email address, stored lowercased.
        #[max_length = 255]
        email -> Varchar,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional avatar image URL.
        image -> Nullable<Text>,
    }
}

diesel::table! {
    /// Workspaces mirrored from the identity provider's organizations.
    workspaces (id) {
        /// Provider-issued workspace identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// URL slug.
        #[max_length = 255]
        slug -> Varchar,
        /// Owning user's identifier.
        #[max_length = 255]
        owner_id -> Varchar,
        /// Optional workspace image URL.
        image_url -> Nullable<Text>,
    }
}

diesel::table! {
    /// Workspace membership rows; the composite key enforces uniqueness.
    workspace_members (workspace_id, user_id) {
        /// Owning workspace identifier.
        #[max_length = 255]
        workspace_id -> Varchar,
        /// Member's user identifier.
        #[max_length = 255]
        user_id -> Varchar,
        /// Membership role, `ADMIN` or `MEMBER`.
        #[max_length = 50]
        role -> Varchar,
        /// Optional invitation message.
        message -> Nullable<Text>,
        /// When the member joined.
        joined_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, workspaces, workspace_members);

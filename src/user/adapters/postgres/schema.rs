//! Diesel schema for user and profile persistence.

diesel::table! {
    /// User records.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Contact address.
        #[max_length = 255]
        email -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Role profile records.
    profiles (id) {
        /// Profile identifier.
        id -> Uuid,
        /// Canonical profile slug.
        #[max_length = 50]
        slug -> Varchar,
        /// Human-readable profile name.
        #[max_length = 255]
        name -> Varchar,
        /// Whether the profile applies globally.
        is_global -> Bool,
    }
}

diesel::table! {
    /// Many-to-many association between users and profiles.
    profile_user (user_id, profile_id) {
        /// Associated user.
        user_id -> Uuid,
        /// Associated profile.
        profile_id -> Uuid,
    }
}

diesel::joinable!(profile_user -> users (user_id));
diesel::joinable!(profile_user -> profiles (profile_id));
diesel::allow_tables_to_appear_in_same_query!(users, profiles, profile_user);

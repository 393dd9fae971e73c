//! Diesel schema for task persistence.
//!
//! The `users` table is declared here too so assignee summaries can be
//! loaded alongside tasks; the user module owns the authoritative user
//! schema for its own adapters.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Lifecycle status storage form.
        #[max_length = 50]
        status -> Varchar,
        /// Optional assignee.
        assigned_to -> Nullable<Uuid>,
        /// Optional completion timestamp.
        completed_in -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Soft-delete marker.
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// User records, for assignee projection.
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

diesel::joinable!(tasks -> users (assigned_to));
diesel::allow_tables_to_appear_in_same_query!(tasks, users);

//! Diesel schema for project persistence.
//!
//! Foreign keys cascade downward: deleting a workspace removes its
//! projects, and deleting a project removes its member rows, tasks, and
//! their comments.

diesel::table! {
    /// Projects owned by a workspace.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Owning workspace identifier.
        #[max_length = 255]
        workspace_id -> Varchar,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority level.
        #[max_length = 50]
        priority -> Varchar,
        /// Completion percentage, 0..=100.
        progress -> Int2,
        /// Team lead's user identifier, when one is set.
        #[max_length = 255]
        team_lead -> Nullable<Varchar>,
        /// Optional start timestamp.
        start_date -> Nullable<Timestamptz>,
        /// Optional end timestamp.
        end_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Project team membership rows; the composite key enforces
    /// uniqueness.
    project_members (project_id, user_id) {
        /// Owning project identifier.
        project_id -> Uuid,
        /// Member's user identifier.
        #[max_length = 255]
        user_id -> Varchar,
    }
}

diesel::table! {
    /// Tasks owned by a project.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project identifier.
        project_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Category of work.
        #[max_length = 50]
        kind -> Varchar,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority level.
        #[max_length = 50]
        priority -> Varchar,
        /// Assignee's user identifier, when one is set.
        #[max_length = 255]
        assignee_id -> Nullable<Varchar>,
        /// Optional due timestamp.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Comments attached to tasks.
    comments (id) {
        /// Comment identifier.
        id -> Uuid,
        /// Owning task identifier.
        task_id -> Uuid,
        /// Author's user identifier.
        #[max_length = 255]
        author_id -> Varchar,
        /// Comment content.
        content -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(projects, project_members, tasks, comments);

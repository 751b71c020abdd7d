//! Diesel table definitions matching the embedded migrations.

diesel::table! {
    users (id) {
        id -> Int4,
        name -> Varchar,
        role -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    projects (id) {
        id -> Int4,
        name -> Varchar,
        created_by_id -> Nullable<Int4>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    project_users (id) {
        id -> Int4,
        project_id -> Int4,
        user_id -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    analyses (id) {
        id -> Int4,
        name -> Varchar,
        project_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(analyses -> projects (project_id));
diesel::joinable!(project_users -> projects (project_id));
diesel::joinable!(project_users -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(analyses, project_users, projects, users);

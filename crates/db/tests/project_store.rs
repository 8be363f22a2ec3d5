//! Integration tests for the PostgreSQL project repository and store adapter.
//!
//! Require a reachable database via `DATABASE_URL`; run with
//! `cargo test -p tracker-db -- --ignored`.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracker_core::error::CoreError;
use tracker_core::project::{NewProject, ProjectInput};
use tracker_core::store::ProjectStore;
use tracker_db::repositories::ProjectRepo;
use tracker_db::PgProjectStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str, status: &str) -> NewProject {
    ProjectInput {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        status: status.to_string(),
        owner: Some("ops".to_string()),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..Default::default()
    }
    .validate_new()
    .unwrap()
}

// ---------------------------------------------------------------------------
// ProjectRepo
// ---------------------------------------------------------------------------

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_then_find_round_trips_every_column(pool: PgPool) {
    let input = new_project("Alpha", "Active");
    let id = ProjectRepo::insert(&pool, &input).await.unwrap();

    let row = ProjectRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.id, id);
    assert_eq!(row.name, "Alpha");
    assert_eq!(row.description.as_deref(), Some("Alpha description"));
    assert_eq!(row.status, "Active");
    assert_eq!(row.owner.as_deref(), Some("ops"));
    assert_eq!(row.start_date, input.start_date());
    assert_eq!(row.end_date, input.end_date());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn replace_missing_row_returns_false(pool: PgPool) {
    let replaced = ProjectRepo::replace(&pool, 999_999, &new_project("Ghost", "Active"))
        .await
        .unwrap();
    assert!(!replaced);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn backwards_date_range_rejected_by_check_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO projects (name, status, start_date, end_date)
         VALUES ('Bad', 'Active', DATE '2024-06-02', DATE '2024-06-01')",
    )
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.constraint(), Some("ck_projects_date_range"));
}

// ---------------------------------------------------------------------------
// PgProjectStore
// ---------------------------------------------------------------------------

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn store_full_lifecycle(pool: PgPool) {
    let store = PgProjectStore::new(pool);

    let a = store.insert(&new_project("A", "Active")).await.unwrap();
    let b = store.insert(&new_project("B", "Active")).await.unwrap();
    assert_ne!(a, b);

    assert!(store.replace(a, &new_project("A", "Completed")).await.unwrap());
    let fetched = store.find_by_id(a).await.unwrap().unwrap();
    assert_eq!(fetched.status, "Completed");
    assert_eq!(fetched.name, "A");

    assert!(store.remove(b).await.unwrap());
    assert!(!store.remove(b).await.unwrap());

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, a);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn store_ping_succeeds(pool: PgPool) {
    assert!(PgProjectStore::new(pool).ping().await.is_ok());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn closed_pool_surfaces_infrastructure_error(pool: PgPool) {
    pool.close().await;
    let store = PgProjectStore::new(pool);
    assert_matches!(store.find_all().await, Err(CoreError::Infrastructure(_)));
}

mod common;

use common::{create_test_pool, draft};

use folio_db::ProjectRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_valid_draft_when_inserted_then_id_and_timestamp_generated() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let inserted = repo.insert(&draft("portfolio-site", "Portfolio Site")).await.unwrap();

    assert_that!(inserted.id, ge(1));
    assert_that!(inserted.slug, eq("portfolio-site"));
    assert_that!(inserted.data.title, eq("Portfolio Site"));
    assert_that!(inserted.created_at.timestamp(), gt(0));
}

#[tokio::test]
async fn given_inserted_draft_when_listed_then_payload_round_trips() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let original = draft("portfolio-site", "Portfolio Site");
    repo.insert(&original).await.unwrap();

    let projects = repo.find_all().await.unwrap();
    assert_that!(projects.len(), eq(1));
    assert_that!(projects[0].data, eq(&original.data));
    assert_that!(
        projects[0].data.skills,
        elements_are![eq("Rust"), eq("SQLite")]
    );
}

#[tokio::test]
async fn given_no_rows_when_listed_then_empty() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let projects = repo.find_all().await.unwrap();
    assert_that!(projects, is_empty());
}

#[tokio::test]
async fn given_several_inserts_when_listed_then_most_recent_first() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    repo.insert(&draft("first", "First")).await.unwrap();
    repo.insert(&draft("second", "Second")).await.unwrap();
    repo.insert(&draft("third", "Third")).await.unwrap();

    let projects = repo.find_all().await.unwrap();
    let slugs: Vec<String> = projects.into_iter().map(|p| p.slug).collect();
    assert_that!(slugs, elements_are![eq("third"), eq("second"), eq("first")]);
}

#[tokio::test]
async fn given_duplicate_slug_when_inserted_then_unique_violation() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    repo.insert(&draft("portfolio-site", "Portfolio Site")).await.unwrap();
    let err = repo
        .insert(&draft("portfolio-site", "Portfolio Site Again"))
        .await
        .unwrap_err();

    assert_that!(err.is_unique_violation(), eq(true));
}

#[tokio::test]
async fn given_existing_project_when_deleted_by_id_then_gone() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let inserted = repo.insert(&draft("portfolio-site", "Portfolio Site")).await.unwrap();

    let deleted = repo.delete_by_id(inserted.id).await.unwrap();
    assert_that!(deleted, eq(true));

    let projects = repo.find_all().await.unwrap();
    assert_that!(projects, is_empty());
}

#[tokio::test]
async fn given_unknown_id_when_deleted_then_reports_nothing_deleted() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool.clone());

    let deleted = repo.delete_by_id(4242).await.unwrap();
    assert_that!(deleted, eq(false));
}

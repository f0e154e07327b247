//! Integration tests for the SQLite catalog
//!
//! Drives `SqliteCatalog` through the `CatalogStore` trait against an
//! on-disk database.

use chrono::NaiveDate;
use marquee_core::{
    CatalogError, CatalogStore, NewMovie, NewPerson, RoleAssignment, RoleKind, RoleUpdate,
};
use marquee_sqlite::{SqliteCatalog, SqliteConfig, SqlitePool};
use tempfile::TempDir;

fn open_catalog() -> (TempDir, SqliteCatalog) {
    let dir = TempDir::new().unwrap();
    let pool = SqlitePool::new(SqliteConfig::new(dir.path().join("catalog.db"))).unwrap();
    (dir, SqliteCatalog::new(pool))
}

fn table_count(catalog: &SqliteCatalog, table: &str) -> i64 {
    catalog
        .pool()
        .with_connection(|conn| {
            Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?)
        })
        .unwrap()
}

#[tokio::test]
async fn test_movie_round_trip_keeps_every_field() {
    let (_dir, catalog) = open_catalog();

    let submitted = NewMovie {
        title: "Parasite".to_string(),
        release_date: NaiveDate::from_ymd_opt(2019, 5, 30),
        synopsis: Some("Two families".to_string()),
        rating: Some(9),
        run_time: Some(132),
        category: Some("Thriller".to_string()),
    };
    let movie_id = catalog.create_movie(submitted.clone()).await.unwrap();
    catalog.create_movie(NewMovie::titled("Sparse")).await.unwrap();

    let movies = catalog.list_movies().await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0], submitted.into_movie(movie_id));

    let sparse = &movies[1];
    assert_eq!(sparse.title, "Sparse");
    assert!(sparse.release_date.is_none());
    assert!(sparse.synopsis.is_none());
    assert!(sparse.rating.is_none());
    assert!(sparse.run_time.is_none());
    assert!(sparse.category.is_none());
}

#[tokio::test]
async fn test_duplicate_person_is_rejected() {
    let (_dir, catalog) = open_catalog();
    let role = RoleAssignment::new(RoleKind::Actor, "Lead");

    catalog
        .create_person(NewPerson::new("Song", "Kang-ho", 1000), role.clone(), None)
        .await
        .unwrap();
    let err = catalog
        .create_person(NewPerson::new("Song", "Kang-ho", 2000), role, None)
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::DuplicatePerson { .. }));
    assert_eq!(catalog.list_persons().await.unwrap().len(), 1);
    assert_eq!(table_count(&catalog, "actor"), 1);
}

#[tokio::test]
async fn test_duplicate_link_leaves_one_row() {
    let (_dir, catalog) = open_catalog();
    let movie_id = catalog.create_movie(NewMovie::titled("Okja")).await.unwrap();
    let person_id = catalog
        .create_person(
            NewPerson::new("Tilda", "Swinton", 10),
            RoleAssignment::new(RoleKind::Actress, "Lucy"),
            None,
        )
        .await
        .unwrap();

    catalog.link(movie_id, person_id).await.unwrap();
    let err = catalog.link(movie_id, person_id).await.unwrap_err();

    assert_eq!(
        err,
        CatalogError::DuplicateLink {
            movie_id,
            person_id
        }
    );
    assert_eq!(catalog.list_links().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_link_to_missing_rows_is_foreign_key_violation() {
    let (_dir, catalog) = open_catalog();
    let movie_id = catalog.create_movie(NewMovie::titled("Mother")).await.unwrap();

    let err = catalog.link(movie_id, 999).await.unwrap_err();
    assert!(matches!(err, CatalogError::ForeignKeyViolation(_)));
    assert!(catalog.list_links().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_movie_removes_links() {
    let (_dir, catalog) = open_catalog();
    let movie_id = catalog.create_movie(NewMovie::titled("Memories")).await.unwrap();
    let other_id = catalog.create_movie(NewMovie::titled("Kept")).await.unwrap();
    let person_id = catalog
        .create_person(
            NewPerson::new("Bong", "Joon-ho", 500),
            RoleAssignment::new(RoleKind::Director, "Director"),
            Some(movie_id),
        )
        .await
        .unwrap();
    catalog.link(other_id, person_id).await.unwrap();

    catalog.delete_movie(movie_id).await.unwrap();

    assert!(catalog.get_movie(movie_id).await.unwrap().is_none());
    let links = catalog.list_links().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].movie_id, other_id);
    assert!(catalog.get_person(person_id).await.unwrap().is_some());

    let err = catalog.delete_movie(movie_id).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_person_leaves_no_orphans() {
    let (_dir, catalog) = open_catalog();
    let movie_id = catalog.create_movie(NewMovie::titled("Barbie")).await.unwrap();
    let person_id = catalog
        .create_person(
            NewPerson::new("Margot", "Robbie", 9000),
            RoleAssignment::new(RoleKind::Actress, "Barbie"),
            Some(movie_id),
        )
        .await
        .unwrap();

    // Hold a record in every other kind too.
    catalog
        .pool()
        .with_connection(move |conn| {
            for kind in [
                RoleKind::Actor,
                RoleKind::Writer,
                RoleKind::Director,
                RoleKind::Producer,
            ] {
                marquee_sqlite::catalog::role::insert_role_record(
                    conn,
                    person_id,
                    &RoleAssignment::new(kind, "extra"),
                )?;
            }
            Ok(())
        })
        .unwrap();

    catalog.delete_person(person_id).await.unwrap();

    for table in ["actor", "actress", "writer", "director", "producer", "movie_person", "person"] {
        assert_eq!(table_count(&catalog, table), 0, "{table} not emptied");
    }
    assert!(catalog.get_movie(movie_id).await.unwrap().is_some());

    let err = catalog.delete_person(person_id).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn test_update_person_without_role_record_creates_nothing() {
    let (_dir, catalog) = open_catalog();
    let person_id = catalog
        .create_person(
            NewPerson::new("Aaron", "Sorkin", 300),
            RoleAssignment::new(RoleKind::Writer, "Screenplay"),
            None,
        )
        .await
        .unwrap();

    let updated = catalog
        .update_person(
            person_id,
            NewPerson::new("Aaron", "Sorkin", 400),
            Some(RoleUpdate {
                kind: RoleKind::Director,
                value: Some("Director".to_string()),
            }),
        )
        .await
        .unwrap();

    assert!(!updated);
    assert_eq!(table_count(&catalog, "director"), 0);
    assert_eq!(catalog.get_person(person_id).await.unwrap().unwrap().pay, 400);
}

#[tokio::test]
async fn test_update_person_keeps_role_value_when_omitted() {
    let (_dir, catalog) = open_catalog();
    let person_id = catalog
        .create_person(
            NewPerson::new("Aaron", "Sorkin", 300),
            RoleAssignment::new(RoleKind::Writer, "Screenplay"),
            None,
        )
        .await
        .unwrap();

    let updated = catalog
        .update_person(
            person_id,
            NewPerson::new("Aaron", "Sorkin", 300),
            Some(RoleUpdate {
                kind: RoleKind::Writer,
                value: None,
            }),
        )
        .await
        .unwrap();
    assert!(updated);

    let writers = catalog.role_holders(RoleKind::Writer).await.unwrap();
    assert_eq!(writers.len(), 1);
    assert_eq!(writers[0].detail.as_deref(), Some("Screenplay"));
}

#[tokio::test]
async fn test_update_missing_person_is_not_found() {
    let (_dir, catalog) = open_catalog();
    let err = catalog
        .update_person(42, NewPerson::new("No", "Body", 1), None)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn test_most_expensive_for_producer() {
    let (_dir, catalog) = open_catalog();
    let movie_id = catalog.create_movie(NewMovie::titled("Oppenheimer")).await.unwrap();

    catalog
        .create_person(
            NewPerson::new("Emma", "Thomas", 100),
            RoleAssignment::new(RoleKind::Producer, "Producer"),
            Some(movie_id),
        )
        .await
        .unwrap();
    for (first, last, pay) in [("Cillian", "Murphy", 1000), ("Robert", "Downey", 5000), ("Emily", "Blunt", 2000)] {
        catalog
            .create_person(
                NewPerson::new(first, last, pay),
                RoleAssignment::new(RoleKind::Actor, "Cast"),
                Some(movie_id),
            )
            .await
            .unwrap();
    }

    let producers = catalog.role_holders(RoleKind::Producer).await.unwrap();
    let producer_id = producers[0].record_id;

    let top = catalog
        .most_expensive_for_producer(producer_id)
        .await
        .unwrap()
        .expect("producer has cast");
    assert_eq!(top.pay, 5000);
    assert_eq!(top.last_name, "Downey");

    // A producer with no movies
    catalog
        .create_person(
            NewPerson::new("Idle", "Producer", 1),
            RoleAssignment::new(RoleKind::Producer, "Executive"),
            None,
        )
        .await
        .unwrap();
    let idle_id = catalog.role_holders(RoleKind::Producer).await.unwrap()[1].record_id;
    assert!(catalog
        .most_expensive_for_producer(idle_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_movies_by_year_excludes_other_years() {
    let (_dir, catalog) = open_catalog();
    for (title, date) in [
        ("Nomadland", NaiveDate::from_ymd_opt(2020, 9, 11)),
        ("Minari", NaiveDate::from_ymd_opt(2020, 1, 26)),
        ("Drive My Car", NaiveDate::from_ymd_opt(2021, 7, 11)),
        ("Undated", None),
    ] {
        catalog
            .create_movie(NewMovie {
                release_date: date,
                ..NewMovie::titled(title)
            })
            .await
            .unwrap();
    }

    let movies = catalog.movies_by_year(2020).await.unwrap();
    let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Nomadland", "Minari"]);
}

#[tokio::test]
async fn test_composite_create_is_atomic() {
    let (_dir, catalog) = open_catalog();
    catalog
        .create_person(
            NewPerson::new("Taken", "Name", 1),
            RoleAssignment::new(RoleKind::Actor, "Lead"),
            None,
        )
        .await
        .unwrap();

    let err = catalog
        .create_movie_with_person(
            NewMovie::titled("Orphan"),
            NewPerson::new("Taken", "Name", 2),
            RoleAssignment::new(RoleKind::Actor, "Lead"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::DuplicatePerson { .. }));
    assert!(catalog.list_movies().await.unwrap().is_empty());
    assert_eq!(table_count(&catalog, "actor"), 1);
}

//! Integration tests for the SQLite movie store.

use super::common::{add_movie, count_rows, create_seeded_store, create_test_store};
use movie_console::commands::ListQuery;
use movie_console::db::{AddMovieOutcome, DeletePersonOutcome, MovieStore, NewMovie, Person};
use pretty_assertions::assert_eq;

async fn titles(store: &dyn MovieStore, args: &str) -> Vec<String> {
    let query = ListQuery::parse(args).unwrap();
    store
        .list_movies(&query)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect()
}

#[tokio::test]
async fn test_list_sorted_by_title() {
    let (store, _dir) = create_seeded_store().await;

    assert_eq!(
        titles(&store, "").await,
        vec![
            "Alien",
            "Batman Begins",
            "Following",
            "Memento",
            "The Dark Knight",
            "The Matrix"
        ]
    );
    store.close().await;
}

#[tokio::test]
async fn test_list_by_length_ascending() {
    let (store, _dir) = create_seeded_store().await;

    assert_eq!(
        titles(&store, "-la").await,
        vec![
            "Memento",
            "Alien",
            "Following",
            "The Matrix",
            "Batman Begins",
            "The Dark Knight"
        ]
    );
    store.close().await;
}

#[tokio::test]
async fn test_list_by_length_descending_ties_by_title() {
    let (store, _dir) = create_seeded_store().await;

    assert_eq!(
        titles(&store, "-ld").await,
        vec![
            "The Dark Knight",
            "Batman Begins",
            "Following",
            "The Matrix",
            "Alien",
            "Memento"
        ]
    );
    store.close().await;
}

#[tokio::test]
async fn test_title_filter_is_partial_regex_match() {
    let (store, _dir) = create_seeded_store().await;

    assert_eq!(
        titles(&store, r#"-t "^The""#).await,
        vec!["The Dark Knight", "The Matrix"]
    );
    assert_eq!(titles(&store, "-t an").await, vec!["Batman Begins"]);
    assert!(titles(&store, "-t ^Matrix").await.is_empty());
    store.close().await;
}

#[tokio::test]
async fn test_director_filter() {
    let (store, _dir) = create_seeded_store().await;

    assert_eq!(
        titles(&store, "-d Nolan").await,
        vec!["Batman Begins", "Following", "Memento", "The Dark Knight"]
    );
    store.close().await;
}

#[tokio::test]
async fn test_actor_filter() {
    let (store, _dir) = create_seeded_store().await;

    assert_eq!(
        titles(&store, r#"-a "Reeves|Weaver""#).await,
        vec!["Alien", "The Matrix"]
    );
    store.close().await;
}

#[tokio::test]
async fn test_filters_combine_with_and() {
    let (store, _dir) = create_seeded_store().await;

    assert_eq!(
        titles(&store, "-d Nolan -a Bale -ld").await,
        vec!["The Dark Knight", "Batman Begins"]
    );
    assert!(titles(&store, "-d Scott -a Bale").await.is_empty());
    store.close().await;
}

#[tokio::test]
async fn test_movie_row_fields() {
    let (store, _dir) = create_seeded_store().await;

    let rows = store
        .list_movies(&ListQuery::parse("-t Matrix").unwrap())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].director, "Lana Wachowski");
    assert_eq!(rows[0].release_year, 1999);
    assert_eq!(rows[0].length, 136);
    assert_eq!(rows[0].to_string(), "The Matrix by Lana Wachowski in 1999, 02:16");
    store.close().await;
}

#[tokio::test]
async fn test_cast_with_ages() {
    let (store, _dir) = create_seeded_store().await;

    let rows = store
        .list_movies(&ListQuery::parse("-t Matrix").unwrap())
        .await
        .unwrap();
    let cast = store.cast_of(rows[0].id).await.unwrap();

    let ages: Vec<(String, i64)> = cast
        .iter()
        .map(|c| (c.name.clone(), c.age_at_release()))
        .collect();
    assert_eq!(
        ages,
        vec![
            ("Carrie-Anne Moss".to_string(), 32),
            ("Keanu Reeves".to_string(), 35)
        ]
    );
    store.close().await;
}

#[tokio::test]
async fn test_find_person() {
    let (store, _dir) = create_test_store().await;

    let id = store.add_person("Greta Gerwig", 1983).await.unwrap();
    let person = store.find_person("Greta Gerwig").await.unwrap().unwrap();
    assert_eq!(
        person,
        Person {
            id,
            name: "Greta Gerwig".to_string(),
            birth_year: 1983
        }
    );
    assert!(store.find_person("greta gerwig").await.unwrap().is_none());
    store.close().await;
}

#[tokio::test]
async fn test_duplicate_person_rejected() {
    let (store, _dir) = create_test_store().await;

    store.add_person("Greta Gerwig", 1983).await.unwrap();
    let err = store.add_person("Greta Gerwig", 1983).await.unwrap_err();
    assert_eq!(err.category(), "Query Error");
    assert!(err.to_string().contains("already exists"));
    assert_eq!(count_rows(&store, "people").await, 1);
    store.close().await;
}

#[tokio::test]
async fn test_duplicate_movie_leaves_store_unchanged() {
    let (store, _dir) = create_seeded_store().await;
    let movies_before = count_rows(&store, "movies").await;
    let links_before = count_rows(&store, "movie_actors").await;

    let outcome = add_movie(
        &store,
        "The Matrix",
        90,
        "Lana Wachowski",
        2003,
        &["Christian Bale"],
    )
    .await;

    assert_eq!(outcome, AddMovieOutcome::Duplicate);
    assert_eq!(count_rows(&store, "movies").await, movies_before);
    assert_eq!(count_rows(&store, "movie_actors").await, links_before);
    store.close().await;
}

#[tokio::test]
async fn test_same_title_other_director_is_added() {
    let (store, _dir) = create_seeded_store().await;

    let outcome = add_movie(&store, "The Matrix", 90, "Ridley Scott", 2030, &[]).await;
    assert!(matches!(outcome, AddMovieOutcome::Added(_)));
    assert_eq!(titles(&store, "-t Matrix").await.len(), 2);
    store.close().await;
}

#[tokio::test]
async fn test_failed_cast_insert_rolls_back_movie() {
    let (store, _dir) = create_seeded_store().await;
    let movies_before = count_rows(&store, "movies").await;

    let director = store.find_person("Ridley Scott").await.unwrap().unwrap();
    let ghost = Person {
        id: 9_999,
        name: "Ghost".to_string(),
        birth_year: 1900,
    };

    let result = store
        .add_movie(&NewMovie {
            title: "Blade Runner".to_string(),
            length: 117,
            director,
            release_year: 1982,
            cast: vec![ghost],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(count_rows(&store, "movies").await, movies_before);
    assert!(titles(&store, "-t Blade").await.is_empty());
    store.close().await;
}

#[tokio::test]
async fn test_delete_director_is_refused() {
    let (store, _dir) = create_seeded_store().await;
    let links_before = count_rows(&store, "movie_actors").await;

    let outcome = store.delete_person("Christopher Nolan").await.unwrap();
    assert_eq!(outcome, DeletePersonOutcome::DirectsMovies(4));
    assert!(store
        .find_person("Christopher Nolan")
        .await
        .unwrap()
        .is_some());
    assert_eq!(count_rows(&store, "movie_actors").await, links_before);
    store.close().await;
}

#[tokio::test]
async fn test_delete_actor_removes_cast_links() {
    let (store, _dir) = create_seeded_store().await;
    let movies_before = count_rows(&store, "movies").await;
    let links_before = count_rows(&store, "movie_actors").await;

    let outcome = store.delete_person("Christian Bale").await.unwrap();
    assert_eq!(outcome, DeletePersonOutcome::Deleted);
    assert!(store.find_person("Christian Bale").await.unwrap().is_none());
    assert_eq!(count_rows(&store, "movie_actors").await, links_before - 2);
    assert_eq!(count_rows(&store, "movies").await, movies_before);
    assert!(titles(&store, "-a Bale").await.is_empty());
    store.close().await;
}

#[tokio::test]
async fn test_delete_unknown_person() {
    let (store, _dir) = create_seeded_store().await;

    let outcome = store.delete_person("Nobody").await.unwrap();
    assert_eq!(outcome, DeletePersonOutcome::NotFound);
    store.close().await;
}

mod utils;

use cinelist_lib::modules::catalog::domain::MovieRepository;
use cinelist_lib::modules::catalog::infrastructure::MovieCsvReader;
use cinelist_lib::modules::review::domain::{Review, ReviewRepository};
use cinelist_lib::modules::user::domain::{User, UserRepository};
use cinelist_lib::shared::errors::AppError;
use cinelist_lib::shared::MemoryRepository;
use utils::factories::MovieFactory;
use utils::helpers::TestDataset;

async fn loaded_repository() -> MemoryRepository {
    let fixture = TestDataset::sample();
    let repo = MemoryRepository::new();
    MovieCsvReader::from_path(fixture.path())
        .unwrap()
        .load_into(&repo)
        .await
        .unwrap();
    repo
}

#[tokio::test]
async fn test_movies_keep_dataset_order() {
    let repo = loaded_repository().await;

    assert_eq!(repo.number_of_movies().await.unwrap(), 3);
    assert_eq!(repo.first_movie().await.unwrap().unwrap().title(), "Guardians of the Galaxy");
    assert_eq!(repo.last_movie().await.unwrap().unwrap().title(), "The Martian");
    assert_eq!(repo.movie_ranks().await.unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_absent_entities_are_none() {
    let repo = loaded_repository().await;

    assert!(repo.get_movie(1001).await.unwrap().is_none());
    assert!(repo.get_director("Nobody").await.unwrap().is_none());
    assert!(repo.get_actor("Nobody").await.unwrap().is_none());
    assert!(repo.get_user("nobody").await.unwrap().is_none());
    assert!(repo.movie_ranks_for_genre("Western").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_genre_lookup_and_rank_selection() {
    let repo = loaded_repository().await;

    assert_eq!(repo.movie_ranks_for_genre("Sci-Fi").await.unwrap(), vec![1, 2, 3]);
    assert_eq!(repo.movie_ranks_for_genre("Drama").await.unwrap(), vec![3]);

    let picked = repo.movies_by_rank(&[3, 99, 1]).await.unwrap();
    let titles: Vec<_> = picked.iter().map(|m| m.title().to_string()).collect();
    assert_eq!(titles, vec!["The Martian", "Guardians of the Galaxy"]);
}

#[tokio::test]
async fn test_duplicate_rank_rejected() {
    let repo = loaded_repository().await;
    let err = repo
        .add_movie(MovieFactory::new(2, "Another Movie").build())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(repo.number_of_movies().await.unwrap(), 3);
}

#[tokio::test]
async fn test_reviews_need_a_movie() {
    let repo = loaded_repository().await;

    let orphan = Review::new(None, "Nice", 7).unwrap();
    let err = repo.add_review(orphan).await.unwrap_err();
    assert!(matches!(err, AppError::RepositoryError(_)));

    let movie = repo.get_movie(2).await.unwrap().unwrap();
    repo.add_review(Review::new(Some(movie), "Eerie", 6).unwrap())
        .await
        .unwrap();
    let reviews = repo.reviews().await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].movie_rank(), Some(2));
}

#[tokio::test]
async fn test_usernames_match_any_case() {
    let repo = loaded_repository().await;
    repo.add_user(User::new("Thorke", "hash").unwrap()).await.unwrap();

    let found = repo.get_user("THORKE").await.unwrap().unwrap();
    assert_eq!(found.username(), "thorke");
}

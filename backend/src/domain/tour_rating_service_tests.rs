//! Tests for the tour rating service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{MockTourRatingRepository, MockTourRepository};
use crate::domain::{ErrorCode, Score};

const TOUR: TourId = TourId::new(1);
const CUSTOMER: CustomerId = CustomerId::new(7);

fn score(value: i32) -> Score {
    Score::new(value).expect("valid score")
}

fn rating(customer: i32, value: i32, comment: Option<&str>) -> TourRating {
    TourRating::new(
        TourRatingKey::new(TOUR, CustomerId::new(customer)),
        score(value),
        comment.map(str::to_owned),
    )
}

fn tours_with(tour: Option<Tour>) -> MockTourRepository {
    let mut tours = MockTourRepository::new();
    tours
        .expect_find_by_id()
        .returning(move |_| Ok(tour.clone()));
    tours
}

fn existing_tour() -> MockTourRepository {
    tours_with(Some(Tour::new(TOUR, "Big Sur Retreat")))
}

fn make_service(
    tours: MockTourRepository,
    ratings: MockTourRatingRepository,
) -> TourRatingService<MockTourRepository, MockTourRatingRepository> {
    TourRatingService::new(Arc::new(tours), Arc::new(ratings))
}

fn assert_not_found(error: &Error, message: &str) {
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), message);
}

#[tokio::test]
async fn create_saves_rating_for_existing_tour() {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_save()
        .withf(|rating: &TourRating| {
            rating.key == TourRatingKey::new(TOUR, CUSTOMER)
                && rating.score.value() == 5
                && rating.comment.as_deref() == Some("great")
        })
        .times(1)
        .returning(|rating| Ok(rating.clone()));

    let service = make_service(existing_tour(), ratings);
    let saved = service
        .create(CreateTourRatingRequest {
            tour_id: TOUR,
            customer_id: CUSTOMER,
            score: score(5),
            comment: Some("great".into()),
        })
        .await
        .expect("create succeeds");

    assert_eq!(saved, rating(7, 5, Some("great")));
}

#[tokio::test]
async fn create_rejects_unknown_tour_without_saving() {
    let mut ratings = MockTourRatingRepository::new();
    ratings.expect_save().times(0);

    let service = make_service(tours_with(None), ratings);
    let error = service
        .create(CreateTourRatingRequest {
            tour_id: TourId::new(99),
            customer_id: CUSTOMER,
            score: score(3),
            comment: None,
        })
        .await
        .expect_err("unknown tour");

    assert_not_found(&error, "Tour does not exist 99");
}

#[tokio::test]
async fn list_returns_store_order() {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_find_all_by_tour()
        .withf(|tour_id| *tour_id == TOUR)
        .times(1)
        .returning(|_| Ok(vec![rating(2, 4, None), rating(1, 3, Some("ok"))]));

    let service = make_service(existing_tour(), ratings);
    let listed = service.list_for_tour(TOUR).await.expect("list succeeds");

    assert_eq!(listed, vec![rating(2, 4, None), rating(1, 3, Some("ok"))]);
}

#[tokio::test]
async fn list_rejects_unknown_tour() {
    let mut ratings = MockTourRatingRepository::new();
    ratings.expect_find_all_by_tour().times(0);

    let service = make_service(tours_with(None), ratings);
    let error = service
        .list_for_tour(TourId::new(5))
        .await
        .expect_err("unknown tour");

    assert_not_found(&error, "Tour does not exist 5");
}

#[tokio::test]
async fn average_is_mean_of_scores() {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_find_all_by_tour()
        .returning(|_| Ok(vec![rating(1, 3, None), rating(2, 5, None)]));

    let service = make_service(existing_tour(), ratings);
    let average = service.average_for_tour(TOUR).await.expect("average");

    assert!((average - 4.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn average_without_ratings_is_not_found() {
    let mut ratings = MockTourRatingRepository::new();
    ratings.expect_find_all_by_tour().returning(|_| Ok(Vec::new()));

    let service = make_service(existing_tour(), ratings);
    let error = service
        .average_for_tour(TOUR)
        .await
        .expect_err("no ratings");

    assert_not_found(&error, NO_RATINGS_MESSAGE);
}

#[tokio::test]
async fn replace_overwrites_score_and_comment() {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_find_by_tour_and_customer()
        .returning(|_| Ok(Some(rating(7, 5, Some("great")))));
    ratings
        .expect_save()
        .times(1)
        .returning(|rating| Ok(rating.clone()));

    let service = make_service(existing_tour(), ratings);
    let replaced = service
        .replace(ReplaceTourRatingRequest {
            tour_id: TOUR,
            customer_id: CUSTOMER,
            score: score(1),
            comment: None,
        })
        .await
        .expect("replace succeeds");

    assert_eq!(replaced, rating(7, 1, None));
}

#[rstest]
#[case(Some(2), None, rating(7, 2, Some("great")))]
#[case(None, Some("changed"), rating(7, 5, Some("changed")))]
#[case(None, None, rating(7, 5, Some("great")))]
#[tokio::test]
async fn patch_overwrites_only_supplied_fields(
    #[case] new_score: Option<i32>,
    #[case] new_comment: Option<&'static str>,
    #[case] expected: TourRating,
) {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_find_by_tour_and_customer()
        .returning(|_| Ok(Some(rating(7, 5, Some("great")))));
    ratings
        .expect_save()
        .times(1)
        .returning(|rating| Ok(rating.clone()));

    let service = make_service(existing_tour(), ratings);
    let patched = service
        .patch(PatchTourRatingRequest {
            tour_id: TOUR,
            customer_id: CUSTOMER,
            score: new_score.map(score),
            comment: new_comment.map(str::to_owned),
        })
        .await
        .expect("patch succeeds");

    assert_eq!(patched, expected);
}

#[tokio::test]
async fn updates_reject_missing_rating() {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_find_by_tour_and_customer()
        .returning(|_| Ok(None));
    ratings.expect_save().times(0);

    let service = make_service(existing_tour(), ratings);
    let error = service
        .replace(ReplaceTourRatingRequest {
            tour_id: TOUR,
            customer_id: CustomerId::new(8),
            score: score(1),
            comment: Some("bad".into()),
        })
        .await
        .expect_err("missing rating");

    assert_not_found(
        &error,
        "Tour rating does not exist for tourId 1 and customerId 8",
    );
}

#[tokio::test]
async fn delete_removes_existing_rating() {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_find_by_tour_and_customer()
        .returning(|_| Ok(Some(rating(7, 5, None))));
    ratings
        .expect_delete()
        .withf(|key: &TourRatingKey| *key == TourRatingKey::new(TOUR, CUSTOMER))
        .times(1)
        .returning(|_| Ok(()));

    let service = make_service(existing_tour(), ratings);
    service
        .delete(TourRatingKey::new(TOUR, CUSTOMER))
        .await
        .expect("delete succeeds");
}

#[tokio::test]
async fn delete_rejects_missing_rating() {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_find_by_tour_and_customer()
        .returning(|_| Ok(None));
    ratings.expect_delete().times(0);

    let service = make_service(existing_tour(), ratings);
    let error = service
        .delete(TourRatingKey::new(TOUR, CUSTOMER))
        .await
        .expect_err("missing rating");

    assert_not_found(
        &error,
        "Tour rating does not exist for tourId 1 and customerId 7",
    );
}

#[rstest]
#[case::replace("replace")]
#[case::patch("patch")]
#[case::delete("delete")]
#[tokio::test]
async fn rating_operations_reject_unknown_tour(#[case] operation: &str) {
    let mut ratings = MockTourRatingRepository::new();
    ratings.expect_find_by_tour_and_customer().times(0);
    ratings.expect_save().times(0);
    ratings.expect_delete().times(0);

    let service = make_service(tours_with(None), ratings);
    let tour_id = TourId::new(42);
    let result = match operation {
        "replace" => service
            .replace(ReplaceTourRatingRequest {
                tour_id,
                customer_id: CUSTOMER,
                score: score(2),
                comment: None,
            })
            .await
            .map(drop),
        "patch" => service
            .patch(PatchTourRatingRequest {
                tour_id,
                customer_id: CUSTOMER,
                score: None,
                comment: Some("meh".into()),
            })
            .await
            .map(drop),
        _ => service.delete(TourRatingKey::new(tour_id, CUSTOMER)).await,
    };

    let error = result.expect_err("unknown tour");
    assert_not_found(&error, "Tour does not exist 42");
}

#[rstest]
#[case(
    TourRepositoryError::connection("refused"),
    ErrorCode::ServiceUnavailable
)]
#[case(TourRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn tour_repository_failures_are_mapped(
    #[case] failure: TourRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut tours = MockTourRepository::new();
    tours
        .expect_find_by_id()
        .return_once(move |_| Err(failure));

    let service = make_service(tours, MockTourRatingRepository::new());
    let error = service.list_for_tour(TOUR).await.expect_err("failure");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn rating_repository_connection_failure_is_unavailable() {
    let mut ratings = MockTourRatingRepository::new();
    ratings
        .expect_find_by_tour_and_customer()
        .return_once(|_| Err(TourRatingRepositoryError::connection("pool exhausted")));

    let service = make_service(existing_tour(), ratings);
    let error = service
        .delete(TourRatingKey::new(TOUR, CUSTOMER))
        .await
        .expect_err("failure");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert!(error.message().contains("pool exhausted"));
}

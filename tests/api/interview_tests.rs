//! Booking API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use checkdev::application::dto::{InterviewDto, StatusUpdateResponse};
use checkdev::shared::pagination::Page;

use crate::common::*;

/// Eight interviews for topic 1, then two for topic 2 and one for topic 3
fn booking() -> TestApp {
    let mut interviews: Vec<_> = (1..=8).map(|id| interview(id, 1, 1)).collect();
    interviews.push(interview(9, 2, 2));
    interviews.push(interview(10, 2, 1));
    interviews.push(interview(11, 3, 3));
    TestApp::mock(InMemoryInterviews::new(interviews))
}

fn ids(page: &Page<InterviewDto>) -> Vec<i32> {
    page.content.iter().map(|i| i.id).collect()
}

#[tokio::test]
async fn test_get_interview() {
    let app = booking();

    let found = app.get("/interview/3").await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.json::<InterviewDto>().id, 3);

    let missing = app.get("/interview/-1").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_topic_pages_concatenate_to_insertion_order() {
    let app = booking();

    let mut seen = Vec::new();
    let mut sizes = Vec::new();
    for page in 0..3 {
        let page: Page<InterviewDto> = app
            .get(&format!("/interviews/findByTopicId/1?page={}&size=3", page))
            .await
            .json();
        assert_eq!(page.total_elements, 8);
        assert_eq!(page.total_pages, 3);
        sizes.push(page.content.len());
        seen.extend(ids(&page));
    }

    assert_eq!(sizes, vec![3, 3, 2]);
    assert_eq!(seen, (1..=8).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_page_far_past_the_end_is_empty() {
    let app = booking();

    let response = app
        .get("/interviews/findByTopicId/1?page=4611686018427387904&size=3")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let page: Page<InterviewDto> = response.json();
    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 8);
}

#[tokio::test]
async fn test_find_by_topic_ids() {
    let app = booking();

    let page: Page<InterviewDto> = app
        .get("/interviews/findByTopicsIds/2,3?page=0&size=10")
        .await
        .json();

    assert_eq!(ids(&page), vec![9, 10, 11]);
}

#[tokio::test]
async fn test_find_by_topic_ids_empty_list() {
    let app = booking();

    let response = app.get("/interviews/findByTopicsIds/,?page=0&size=10").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json::<Page<InterviewDto>>().content.is_empty());
}

#[tokio::test]
async fn test_find_by_mode() {
    let app = booking();

    let interviews: Vec<InterviewDto> = app.get("/interviews/findByMode/2").await.json();

    assert!(!interviews.is_empty());
    assert!(interviews.iter().all(|i| i.mode == 2));
}

#[tokio::test]
async fn test_list_interviews_paged() {
    let app = booking();

    let page: Page<InterviewDto> = app.get("/interviews/?page=1&size=4").await.json();

    assert_eq!(ids(&page), vec![5, 6, 7, 8]);
    assert_eq!(page.number, 1);
    assert_eq!(page.total_elements, 11);
}

#[tokio::test]
async fn test_status_update_changes_only_target() {
    let app = booking();

    let response = app.put("/interview/status/2?status=3").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<StatusUpdateResponse>(), StatusUpdateResponse { updated: 1 });

    assert_eq!(app.get("/interview/2").await.json::<InterviewDto>().status, 3);
    assert_eq!(app.get("/interview/1").await.json::<InterviewDto>().status, 1);
    assert_eq!(app.get("/interview/3").await.json::<InterviewDto>().status, 1);
}

#[tokio::test]
async fn test_status_update_for_absent_id() {
    let app = booking();

    let response = app.put("/interview/status/999?status=3").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<StatusUpdateResponse>().updated, 0);
    let page: Page<InterviewDto> = app.get("/interviews/findByStatus/3?size=50").await.json();
    assert_eq!(ids(&page), vec![11]);
}

#[tokio::test]
async fn test_find_by_status_sorted_descending_across_pages() {
    let app = booking();

    let mut dates = Vec::new();
    for page in 0..3 {
        let page: Page<InterviewDto> = app
            .get(&format!("/interviews/findByStatus/1?page={}&size=4&sort=desc", page))
            .await
            .json();
        assert!(page.content.iter().all(|i| i.status == 1));
        dates.extend(page.content.into_iter().map(|i| i.create_date));
    }

    assert_eq!(dates.len(), 9);
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_book_interview() {
    let app = booking();

    let response = app
        .send_json(
            "POST",
            "/interview/",
            json!({
                "mode": 1,
                "submitter_id": 7,
                "title": "Rust async",
                "contact_by": "telegram",
                "approximate_date": "Friday",
                "topic_id": 3
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let created: InterviewDto = response.json();
    assert_eq!(created.id, 12);
    assert_eq!(created.status, 1);

    let page: Page<InterviewDto> = app.get("/interviews/findByTopicId/3").await.json();
    assert_eq!(ids(&page), vec![11, 12]);
}

#[tokio::test]
async fn test_book_interview_requires_title() {
    let app = booking();

    let response = app
        .send_json(
            "POST",
            "/interview/",
            json!({
                "submitter_id": 7,
                "title": "",
                "contact_by": "telegram",
                "approximate_date": "Friday",
                "topic_id": 3
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

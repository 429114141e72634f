mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use quizkit_core::models::question::Question;
use quizkit_grading::QuizSession;

use common::{app, send};

#[tokio::test]
async fn author_builds_quiz_and_respondent_submits_it() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/questions",
        Some(json!({
            "type": "mcq",
            "title": "Capital",
            "category": "general",
            "answers": ["Paris", "Rome", "Berlin", "Madrid"],
            "correctAnswer": "0",
            "points": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/questions",
        Some(json!({
            "type": "fillInBlanks",
            "title": "Water boils at ___ degrees",
            "category": "science",
            "answers": ["90", "100"],
            "correctAnswer": "1",
            "points": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = send(&app, Method::GET, "/api/questions", None).await;
    let questions: Vec<Question> = serde_json::from_value(listed).unwrap();
    let capital = questions.iter().find(|q| q.title == "Capital").unwrap().id;
    let boiling = questions.iter().find(|q| q.category == "science").unwrap().id;

    let mut session = QuizSession::new(questions);
    session.choose(capital, 0).unwrap();
    session.choose(boiling, 0).unwrap();
    let submission = session.submit();

    assert_eq!(submission.card.score, 5.0);
    assert_eq!(submission.card.max_score, 7.0);

    for draft in &submission.responses {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/responses",
            Some(serde_json::to_value(draft).unwrap()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let uri = format!("/api/responses/question/{capital}");
    let (_, recorded) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(recorded[0]["answer"], "0");
    assert_eq!(recorded[0]["isCorrect"], true);

    let uri = format!("/api/responses/question/{boiling}");
    let (_, recorded) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(recorded[0]["isCorrect"], false);
}

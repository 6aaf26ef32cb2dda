use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    results::{get_results, get_standings},
    scoring::{
        correct_kata, evaluate_bout, record_placement, score_kata, start_bout, submit_kata,
        update_bout, update_result_status,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/kata/score", post(score_kata))
        .route("/api/kumite/evaluate", post(evaluate_bout))
        .route("/api/categories/:id/kata", post(submit_kata))
        .route("/api/categories/:id/kata/:score_id", put(correct_kata))
        .route("/api/categories/:id/bouts", post(start_bout))
        .route("/api/categories/:id/results", post(record_placement))
        .route("/api/bouts/:id", put(update_bout))
        .route("/api/results/:id/status", put(update_result_status))
        .route("/api/tournaments/:id/standings", get(get_standings))
        .route("/api/tournaments/:id/results", get(get_results))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{AppConfig, TournamentRules};
    use crate::database::test_support::fresh_connection;
    use crate::database::{categories, roster, tournaments, DbPool};
    use crate::domain::EventType;

    fn app(pool: DbPool) -> Router {
        create_router(Arc::new(AppState {
            pool,
            config: AppConfig::new(),
        }))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn kata_score_returns_trimmed_sum() {
        let (pool, conn) = fresh_connection();
        drop(conn);

        let response = app(pool)
            .oneshot(post_json("/api/kata/score", json!({ "scores": [8.5, 9.0, 8.5, 7.0, 9.5] })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["finalScore"], json!(26.0));
        assert_eq!(body["judgeCount"], json!(5));
    }

    #[tokio::test]
    async fn kata_score_rejects_short_panel() {
        let (pool, conn) = fresh_connection();
        drop(conn);

        let response = app(pool)
            .oneshot(post_json("/api/kata/score", json!({ "scores": [8.0, 9.0] })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn kumite_evaluate_reports_lead_victory() {
        let (pool, conn) = fresh_connection();
        drop(conn);

        let request = json!({
            "athlete1Points": ["Ippon", "Ippon", "Yuko", "Yuko"],
            "athlete2Points": [],
            "elapsedSeconds": 40,
            "matchDurationSeconds": 120,
            "senshuEnabled": true
        });
        let response = app(pool)
            .oneshot(post_json("/api/kumite/evaluate", request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["athlete1Total"], json!(8));
        assert_eq!(body["winner"], json!("athlete1"));
        assert_eq!(body["reason"], json!("lead"));
    }

    #[tokio::test]
    async fn standings_for_missing_tournament_is_not_found() {
        let (pool, conn) = fresh_connection();
        drop(conn);

        let request = Request::builder()
            .uri("/api/tournaments/99/standings")
            .body(Body::empty())
            .unwrap();
        let response = app(pool).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn placements_feed_standings_and_public_results() {
        let (pool, mut conn) = fresh_connection();
        let t = tournaments::insert_tournament(&mut conn, "Cup", true, &TournamentRules::default()).unwrap();
        let c = categories::insert_category(&mut conn, t.id, "Kata U14", EventType::Kata, 12, 13).unwrap();
        let team = roster::insert_team(&mut conn, "Tora Dojo").unwrap();
        let athlete = roster::insert_athlete(&mut conn, "Hana", Some(team.id), 12).unwrap();
        let other = roster::insert_athlete(&mut conn, "Yuki", Some(team.id), 13).unwrap();
        drop(conn);

        let router = app(pool);
        let uri = format!("/api/categories/{}/results", c.id);
        let official = router
            .clone()
            .oneshot(post_json(&uri, json!({ "athleteId": athlete.id, "position": 1, "status": "official" })))
            .await
            .unwrap();
        assert_eq!(official.status(), StatusCode::CREATED);
        let pending = router
            .clone()
            .oneshot(post_json(&uri, json!({ "athleteId": other.id, "position": 2 })))
            .await
            .unwrap();
        assert_eq!(pending.status(), StatusCode::CREATED);

        let standings = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/tournaments/{}/standings", t.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = read_json(standings).await;
        assert_eq!(body["standings"][0]["teamId"], json!(team.id));
        assert_eq!(body["standings"][0]["gold"], json!(1));
        assert_eq!(body["standings"][0]["silver"], json!(0));
        assert_eq!(body["standings"][0]["totalPoints"], json!(3));

        let public = router
            .oneshot(
                Request::builder()
                    .uri(format!("/api/tournaments/{}/results?view=public", t.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = read_json(public).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }
}

// Router tests driven through tower's oneshot

#[cfg(test)]
mod tests {
    use crate::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_app(AppState::new(), &ApiConfig::default())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn default_scenario() -> Value {
        json!({
            "ad_spend": 10000.0,
            "click_through_rate": 2.5,
            "conversion_rate": 3.0,
            "average_order_value": 75.0,
            "target_cac": 50.0,
            "brand_awareness": 30,
            "email_open_rate": 22,
            "social_engagement_rate": 5.0
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_defaults_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/v1/defaults", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scenario"], default_scenario());
        let fields = body["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0]["field"], "ad_spend");
        assert_eq!(fields[0]["label"], "Ad Spend ($)");
        assert_eq!(fields[0]["default"], 10_000.0);
        assert_eq!(fields[0]["max"], 1_000_000.0);
        assert_eq!(fields[5]["label"], "Brand Awareness (%)");
        assert_eq!(fields[5]["whole_number"], true);
    }

    #[tokio::test]
    async fn test_compute_single_scenario() {
        let (status, body) = send(&app(), Method::POST, "/v1/compute", Some(default_scenario())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["impressions"], 1_000_000);
        assert_eq!(body["conversions"], 750);
        assert_eq!(body["roi"], 462.5);
        assert_eq!(body["actual_cac"], 13.33);
    }

    #[tokio::test]
    async fn test_compute_rejects_out_of_range() {
        let mut scenario = default_scenario();
        scenario["click_through_rate"] = json!(35.0);

        let (status, body) = send(&app(), Method::POST, "/v1/compute", Some(scenario)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("click_through_rate"));
    }

    #[tokio::test]
    async fn test_simulation_lifecycle() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/v1/simulations/current", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let mut scenario_b = default_scenario();
        scenario_b["ad_spend"] = json!(20000.0);
        let body = json!({ "scenario_a": default_scenario(), "scenario_b": scenario_b });

        let (status, report) = send(&app, Method::POST, "/v1/simulations", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["comparison"]["revenue"], "ScenarioB");
        assert_eq!(report["comparison"]["roi"], "Tie");
        assert_eq!(report["results"]["scenario_b"]["revenue"], 112_500.0);
        assert_eq!(report["fingerprint"].as_str().unwrap().len(), 64);

        let (status, held) = send(&app, Method::GET, "/v1/simulations/current", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(held, report);

        let (_, status_body) = send(&app, Method::GET, "/v1/status", None).await;
        assert_eq!(status_body["has_results"], true);
        assert_eq!(status_body["runs_started"], 1);

        assert!(status_body["last_run_at"].is_string());

        let (status, _) = send(&app, Method::DELETE, "/v1/simulations/current", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, status_body) = send(&app, Method::GET, "/v1/status", None).await;
        assert_eq!(status_body["has_results"], false);
        assert!(status_body["last_run_at"].is_null());

        let (status, _) = send(&app, Method::GET, "/v1/simulations/current", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_simulation_names_invalid_scenario() {
        let mut scenario_b = default_scenario();
        scenario_b["brand_awareness"] = json!(120);
        let body = json!({ "scenario_a": default_scenario(), "scenario_b": scenario_b });

        let app = app();
        let (status, body) = send(&app, Method::POST, "/v1/simulations", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Scenario B"));
        assert!(message.contains("brand_awareness"));

        // a rejected submission leaves the session empty
        let (status, _) = send(&app, Method::GET, "/v1/simulations/current", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_partial_submission_rejected() {
        let body = json!({ "scenario_a": default_scenario() });
        let (status, body) = send(&app(), Method::POST, "/v1/simulations", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_shape() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/v1/compute")
            .header("content-type", "application/json")
            .body(Body::from("{\"ad_spend\": "))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }
}

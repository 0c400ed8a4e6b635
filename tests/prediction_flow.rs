/// Integration tests with a mocked prediction service
/// Exercises the full form flow without hitting a real backend
use churn_form::client::PredictionClient;
use churn_form::controller::FormController;
use churn_form::display::format_probability;
use churn_form::errors::AppError;
use churn_form::models::{ChurnPrediction, Field};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a controller pointed at a mock server.
fn controller_for(base_url: String) -> FormController {
    let client = PredictionClient::new(base_url).expect("client should build");
    FormController::new(client)
}

#[tokio::test]
async fn default_profile_submits_exact_contract_body() {
    let mock_server = MockServer::start().await;

    // The body the service must receive for an untouched form.
    let expected_body = serde_json::json!({
        "Geography": "France",
        "CreditScore": 600,
        "Gender": "Male",
        "Age": 40,
        "Tenure": 3,
        "Balance": 60000,
        "NumOfProducts": 2,
        "HasCrCard": 1,
        "IsActiveMember": 1,
        "EstimatedSalary": 50000
    });

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"churn_prediction": "NO", "probability": 0.2}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(mock_server.uri());
    controller.submit().await.unwrap();

    assert!(controller.result().is_some());
    mock_server.verify().await;
}

#[tokio::test]
async fn edited_fields_change_the_request_body() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "Geography": "Germany",
        "CreditScore": 710,
        "Gender": "Female",
        "Age": 52,
        "Tenure": 3,
        "Balance": 99000.5,
        "NumOfProducts": 2,
        "HasCrCard": 0,
        "IsActiveMember": 1,
        "EstimatedSalary": 50000
    });

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"churn_prediction": "YES", "probability": 0.64}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(mock_server.uri());
    controller.update_field(Field::Geography, "Germany");
    controller.update_field(Field::CreditScore, "710");
    controller.update_field(Field::Gender, "Female");
    controller.update_field(Field::Age, "52");
    controller.update_field(Field::Balance, "99000.5");
    controller.update_field(Field::HasCrCard, "0");
    controller.submit().await.unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn yes_response_renders_as_percentage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"churn_prediction": "YES", "probability": 0.82}),
        ))
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(mock_server.uri());
    controller.submit().await.unwrap();

    let result = controller.result().expect("result should be published");
    assert_eq!(result.churn_prediction, ChurnPrediction::Yes);
    assert_eq!(format_probability(result.probability), "82.0%");
}

#[tokio::test]
async fn server_error_publishes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model unavailable"))
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(mock_server.uri());
    controller.submit().await.unwrap();

    assert!(!controller.is_busy());
    assert!(controller.result().is_none());
}

#[tokio::test]
async fn network_failure_publishes_nothing() {
    // No server here at all.
    let mut controller = controller_for("http://127.0.0.1:1".to_string());
    controller.submit().await.unwrap();

    assert!(!controller.is_busy());
    assert!(controller.result().is_none());
}

#[tokio::test]
async fn malformed_success_body_is_a_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = PredictionClient::new(mock_server.uri()).unwrap();
    let err = client
        .predict(&churn_form::models::CustomerProfile::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ServerError { status: 200, .. }));
}

#[tokio::test]
async fn client_classifies_server_failures_with_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(503).set_body_string("warming up"))
        .mount(&mock_server)
        .await;

    let client = PredictionClient::new(mock_server.uri()).unwrap();
    let err = client
        .predict(&churn_form::models::CustomerProfile::default())
        .await
        .unwrap_err();

    match err {
        AppError::ServerError { status, detail } => {
            assert_eq!(status, 503);
            assert_eq!(detail.as_deref(), Some("warming up"));
        }
        other => panic!("expected ServerError, got {:?}", other),
    }
}

#[tokio::test]
async fn validation_stops_submission_before_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(mock_server.uri());
    controller.update_field(Field::Geography, "Atlantis");
    let err = controller.submit().await.unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
    mock_server.verify().await;
}

//! Integration test: feature contract, config load, analyzer, HTTP endpoints with stub classifiers.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceExt;
use url_sentinel::{
    config::{AppConfig, ServerConfig},
    features::{extract, FeatureVector, FEATURE_COUNT},
    model::{Classifier, ClassifierError, OnnxClassifier},
    server::{self, router, AppState},
    verdict::{Label, UrlAnalyzer},
};

struct Fixed(i64);

impl Classifier for Fixed {
    fn predict(&self, _: &FeatureVector) -> Result<i64, ClassifierError> {
        Ok(self.0)
    }
}

struct Failing;

impl Classifier for Failing {
    fn predict(&self, _: &FeatureVector) -> Result<i64, ClassifierError> {
        Err(ClassifierError::UnexpectedOutput("boom".into()))
    }
}

struct Slow(Duration);

impl Classifier for Slow {
    fn predict(&self, _: &FeatureVector) -> Result<i64, ClassifierError> {
        std::thread::sleep(self.0);
        Ok(0)
    }
}

fn app(classifier: impl Classifier + 'static) -> axum::Router {
    router(AppState::new(UrlAnalyzer::new(Arc::new(classifier))))
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn ip_literal_host() {
    let fv = extract("http://192.168.0.1/");
    assert_eq!(fv.has_ip_address, 1);
    assert_eq!(fv.hostname_length, 11);
    assert_eq!(fv.tld_length, 1);
    assert_eq!(fv.digit_count, 8);
    assert_eq!(fv.first_directory_length, 0);
}

#[test]
fn plain_domain_vector() {
    let url = "http://example.com";
    let fv = extract(url);
    assert_eq!(
        fv.values(),
        [0, 1, 1, 1, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 18, 11, 0, 3, 0]
    );
    assert_eq!(fv.url_length as usize, url.len());
}

#[test]
fn shortener_url() {
    assert_eq!(extract("http://bit.ly/xyz").shortener, 1);
}

#[test]
fn phishing_like_url() {
    let fv = extract("https://paypal-login.example.com/secure?x=1");
    assert_eq!(fv.suspicious_words, 1);
    assert_eq!(fv.https_count, 1);
    assert!(fv.http_count >= 1);
    assert_eq!(fv.question_count, 1);
    assert_eq!(fv.equals_count, 1);
    assert_eq!(fv.hyphen_count, 1);
    assert_eq!(fv.hostname_length, 24);
    assert_eq!(fv.first_directory_length, 6);
    assert_eq!(fv.url_length, 43);
}

#[test]
fn scheme_less_url_uses_path_segments() {
    let fv = extract("www.google.com/mail");
    assert_eq!(fv.hostname_length, 0);
    assert_eq!(fv.tld_length, 0);
    assert_eq!(fv.abnormal_url, 0);
    assert_eq!(fv.first_directory_length, 4);
    assert_eq!(fv.www_count, 1);
}

#[test]
fn malformed_inputs_always_yield_full_vector() {
    let inputs = [
        "",
        "::::",
        "http://[::1",
        "http://[zz]/",
        "//",
        "%%%",
        "javascript:alert(1)",
        "\u{0}\u{1f}http://x",
        "http://ex ample.com/ a b",
        "😀://😀.😀/😀",
    ];
    for u in inputs {
        let fv = extract(u);
        assert_eq!(fv.to_array().len(), FEATURE_COUNT);
        assert_eq!(fv.google_index, 1);
        assert_eq!(fv.url_length as usize, u.chars().count());
    }
}

#[test]
fn extraction_is_idempotent() {
    let u = "http://login.bank.example.com:8080/a/b?c=d&e=%20#frag";
    assert_eq!(extract(u), extract(u));
}

#[test]
fn config_load_default() {
    let c = AppConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.server.port, 5002);
    assert_eq!(c.model_path, Path::new("model.onnx"));
}

#[test]
fn onnx_no_model_is_inert() {
    let c = OnnxClassifier::load(Path::new("nonexistent.onnx")).unwrap();
    assert!(!c.is_loaded());
    assert!(matches!(
        c.predict(&extract("http://example.com")),
        Err(ClassifierError::NotLoaded)
    ));
}

#[test]
fn analyzer_labels_every_index() {
    for (i, expected) in [
        Label::Benign,
        Label::Defacement,
        Label::Phishing,
        Label::Malware,
    ]
    .into_iter()
    .enumerate()
    {
        let analyzer = UrlAnalyzer::new(Arc::new(Fixed(i as i64)));
        let v = analyzer.analyze("http://example.com").unwrap();
        assert_eq!(v.label, expected);
        assert_eq!(
            v.message(),
            format!("The URL is classified as: {}", expected.as_str().to_uppercase())
        );
    }
}

#[tokio::test]
async fn index_serves_form() {
    let res = app(Fixed(0))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res).await.contains("action=\"/predict\""));
}

#[tokio::test]
async fn predict_renders_upper_cased_label() {
    let res = app(Fixed(3))
        .oneshot(form_post("url=http%3A%2F%2Fbit.ly%2Fxyz"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res)
        .await
        .contains("The URL is classified as: MALWARE"));
}

#[tokio::test]
async fn predict_without_url_returns_error_payload() {
    let res = app(Fixed(0)).oneshot(form_post("other=1")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
    assert_eq!(body, serde_json::json!({"error": "missing required field: url"}));
}

#[tokio::test]
async fn predict_with_wrong_content_type_returns_error_payload() {
    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .body(Body::from("url=x"))
        .unwrap();
    let res = app(Fixed(0)).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn classifier_failure_returns_error_payload() {
    let res = app(Failing)
        .oneshot(form_post("url=http%3A%2F%2Fexample.com"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
    assert_eq!(body, serde_json::json!({"error": "unexpected model output: boom"}));
}

#[tokio::test]
async fn out_of_range_class_returns_error_payload() {
    let res = app(Fixed(9))
        .oneshot(form_post("url=http%3A%2F%2Fexample.com"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
    assert_eq!(body, serde_json::json!({"error": "class index 9 is outside 0..=3"}));
}

#[tokio::test]
async fn json_classify_returns_verdict() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/classify")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"url": "https://paypal-login.example.com/secure?x=1"}"#))
        .unwrap();
    let res = app(Fixed(2)).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
    assert_eq!(body["label"], "phishing");
    assert_eq!(body["class_index"], 2);
    assert_eq!(body["features"]["suspicious_words"], 1);
    assert_eq!(body["features"]["url_length"], 43);
}

#[tokio::test]
async fn health_reports_model_state() {
    let res = app(OnnxClassifier::inert())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn slow_classifier_does_not_stall_other_requests() {
    let app = app(Slow(Duration::from_millis(300)));
    let start = Instant::now();
    let predict = async {
        let res = app
            .clone()
            .oneshot(form_post("url=http%3A%2F%2Fexample.com"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        start.elapsed()
    };
    let health = async {
        let res = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        start.elapsed()
    };
    let (predict_done, health_done) = tokio::join!(predict, health);
    assert!(health_done < predict_done);
}

#[tokio::test]
async fn bind_resolves_host_names() {
    let config = ServerConfig {
        host: "localhost".to_string(),
        port: 0,
    };
    let listener = server::bind(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();
    assert!(addr.ip().is_loopback());
    assert_ne!(addr.port(), 0);
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::career::handlers as career;
use crate::culture::handlers as culture;
use crate::errors::AppError;
use crate::skills::handlers as skills;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skill analysis
        .route("/api/analyze-skills", post(skills::handle_analyze_skills))
        .route("/api/skill-match", post(skills::handle_skill_match))
        .route("/api/ai-advice", post(skills::handle_ai_advice))
        .route("/api/job-roles", get(skills::handle_job_roles))
        // Career transitions
        .route(
            "/api/career-recommendations",
            post(career::handle_career_recommendations),
        )
        .route(
            "/api/fresher-recommendations",
            post(career::handle_fresher_recommendations),
        )
        // Culture matching
        .route("/api/cultural-match", post(culture::handle_cultural_match))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::advisor::{AdvisorError, SkillAdvisor};
    use crate::career::fixtures::fixture_recommender;
    use crate::config::Config;
    use crate::culture::matcher::tests::fixture_matcher;
    use crate::documents::{DocumentKind, ExtractionError, TextExtractor};
    use crate::skills::extractor::SkillExtractor;
    use crate::skills::taxonomy::TECHNICAL_SKILLS;

    const BOUNDARY: &str = "test-boundary";

    struct StubExtractor(Option<&'static str>);

    #[async_trait]
    impl TextExtractor for StubExtractor {
        async fn extract(
            &self,
            path: &Path,
            _kind: DocumentKind,
        ) -> Result<String, ExtractionError> {
            assert!(path.exists(), "upload must exist while extracting");
            match self.0 {
                Some(text) => Ok(text.to_string()),
                None => Err(ExtractionError::Pdf("corrupt".to_string())),
            }
        }
    }

    struct StubAdvisor;

    #[async_trait]
    impl SkillAdvisor for StubAdvisor {
        async fn skill_brief(&self, skill: &str) -> Result<String, AdvisorError> {
            if skill == "Unit Testing" {
                return Err(AdvisorError::EmptyContent);
            }
            Ok(format!("Learn {skill}"))
        }
    }

    fn test_config() -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            career_dataset_path: "unused.csv".into(),
            culture_dataset_path: "unused.csv".into(),
            training_seed: Some(17),
            extraction_timeout: Duration::from_secs(5),
            advisor_timeout: Duration::from_secs(5),
            max_upload_bytes: 1024 * 1024,
        }
    }

    fn app_with(extracted: Option<&'static str>) -> Router {
        let state = AppState {
            config: test_config(),
            skills: Arc::new(SkillExtractor::new(TECHNICAL_SKILLS).unwrap()),
            career: Arc::new(fixture_recommender()),
            culture: Arc::new(fixture_matcher()),
            extractor: Arc::new(StubExtractor(extracted)),
            advisor: Arc::new(StubAdvisor),
        };
        build_router(state)
    }

    fn app() -> Router {
        app_with(Some("Experienced with Git and Docker"))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(filename: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
        let mut body = String::new();
        if let Some(filename) = filename {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\nresume bytes\r\n"
            ));
        }
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::post("/api/analyze-skills")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "running"}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = send(app(), get_request("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_analyze_skills_with_target_role() {
        let request = multipart(
            Some("cv.pdf"),
            &[("target_role", "Software Developer / Engineer")],
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categorized_skills"]["Version Control"], json!(["git"]));
        assert_eq!(body["target_job"], "Software Developer / Engineer");
        assert_eq!(
            body["skill_match"]["matched_skills"],
            json!(["Version Control (Git)"])
        );
        assert!(body.get("gemini_advice").is_none());
    }

    #[tokio::test]
    async fn test_analyze_skills_without_role() {
        let (status, body) = send(app(), multipart(Some("CV.DOCX"), &[])).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["categorized_skills"].is_object());
        assert!(body.get("skill_match").is_none());
        assert!(body.get("target_job").is_none());
    }

    #[tokio::test]
    async fn test_analyze_skills_with_advice() {
        let request = multipart(
            Some("cv.pdf"),
            &[
                ("target_role", "Software Developer / Engineer"),
                ("gemini_advice", "true"),
            ],
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let advice = body["gemini_advice"].as_object().unwrap();
        let missing = body["skill_match"]["missing_skills"].as_array().unwrap();
        assert_eq!(advice.len(), missing.len());
        assert_eq!(advice["Agile Methodologies"], "Learn Agile Methodologies");
        assert!(advice["Unit Testing"]
            .as_str()
            .unwrap()
            .starts_with("Error fetching information about Unit Testing:"));
    }

    #[tokio::test]
    async fn test_failed_extraction_yields_empty_skills() {
        let (status, body) = send(app_with(None), multipart(Some("cv.pdf"), &[])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categorized_skills"], json!({}));
    }

    #[tokio::test]
    async fn test_analyze_skills_rejects_bad_input() {
        let (status, _) = send(app(), multipart(Some("cv.txt"), &[])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(app(), multipart(None, &[("target_role", "Data Scientist")])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let request = multipart(Some("cv.pdf"), &[("target_role", "Astronaut")]);
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_skill_match_endpoint() {
        let request = post_json(
            "/api/skill-match",
            json!({
                "categorized_skills": {"Version Control": ["git"], "DevOps & Deployment": ["docker"]},
                "target_role": "Software Developer / Engineer"
            }),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill_match"]["matched_skills"], json!(["Version Control (Git)"]));
    }

    #[tokio::test]
    async fn test_skill_match_requires_fields() {
        let request = post_json("/api/skill-match", json!({"target_role": "Full Stack Developer"}));
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ai_advice_endpoint() {
        let request = post_json("/api/ai-advice", json!({"missing_skills": ["Docker", " "]}));
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"advice": {"Docker": "Learn Docker"}}));

        let request = post_json("/api/ai-advice", json!({"missing_skills": []}));
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_job_roles_in_catalog_order() {
        let (status, body) = send(app(), get_request("/api/job-roles")).await;
        assert_eq!(status, StatusCode::OK);
        let roles = body["roles"].as_array().unwrap();
        assert_eq!(roles[0], "Software Developer / Engineer");
        assert_eq!(roles[1], "Full Stack Developer");
    }

    #[tokio::test]
    async fn test_career_recommendations() {
        let request = post_json(
            "/api/career-recommendations",
            json!({"current_role": "software engineer", "years_experience": 3, "current_salary": 10}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body.as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r["salary_increase"].as_f64().unwrap() > 0.0));
        assert!(recs.iter().all(|r| r.get("skill_match").is_none()));
    }

    #[tokio::test]
    async fn test_career_no_match_message() {
        let request = post_json(
            "/api/career-recommendations",
            json!({"current_role": "Help Desk Technician", "current_salary": 10}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"message": "No suitable career transitions found."}]));
    }

    #[tokio::test]
    async fn test_career_fresher_redirect_and_errors() {
        let (status, body) = send(
            app(),
            post_json("/api/career-recommendations", json!({"current_role": "fresher"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "Use /api/fresher-recommendations for fresher queries"})
        );

        let (status, body) = send(
            app(),
            post_json("/api/career-recommendations", json!({"current_role": "Astronaut"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Role not recognized.");
    }

    #[tokio::test]
    async fn test_fresher_recommendations() {
        let request = post_json("/api/fresher-recommendations", json!({"skills": ["python"]}));
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["next_role"], "Data Scientist");
        assert_eq!(body[0]["skill_match"], 1);

        let (status, _) = send(app(), post_json("/api/fresher-recommendations", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cultural_match() {
        let request = post_json(
            "/api/cultural-match",
            json!({"preferences": "remote flexible hours", "top_n": 2}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["company_name"], "Acme Labs");
        let first = recs[0]["similarity_score"].as_f64().unwrap();
        let second = recs[1]["similarity_score"].as_f64().unwrap();
        assert!(first >= second);
    }

    #[tokio::test]
    async fn test_wrong_typed_json_is_a_validation_error() {
        let cases = [
            (
                "/api/cultural-match",
                json!({"preferences": "remote", "top_n": "3"}),
            ),
            ("/api/fresher-recommendations", json!({"skills": "python"})),
            (
                "/api/career-recommendations",
                json!({"current_role": "Data Analyst", "current_salary": "lots"}),
            ),
            (
                "/api/skill-match",
                json!({"categorized_skills": ["git"], "target_role": "SDET"}),
            ),
            ("/api/ai-advice", json!({"missing_skills": "Docker"})),
        ];
        for (uri, payload) in cases {
            let (status, body) = send(app(), post_json(uri, payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{uri}");
        }

        let request = Request::post("/api/cultural-match")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_career_salary_as_string() {
        let request = post_json(
            "/api/career-recommendations",
            json!({"current_role": "Software Engineer", "current_salary": "10"}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cultural_match_defaults_and_validation() {
        let (status, body) = send(
            app(),
            post_json("/api/cultural-match", json!({"preferences": "mentorship"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);

        let request = post_json("/api/cultural-match", json!({"preferences": ""}));
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            app(),
            post_json("/api/cultural-match", json!({"preferences": "remote", "top_n": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::harness::context::InvocationContext;
use crate::models::envelope::{InvocationMetadata, ResponseEnvelope};

/// Runs function handlers locally against generated events.
#[derive(Debug, Clone, Default)]
pub struct LocalRunner {
    pub context: InvocationContext,
    pub metadata: InvocationMetadata,
}

impl LocalRunner {
    pub fn new(metadata: InvocationMetadata) -> Self {
        LocalRunner {
            context: InvocationContext::new(),
            metadata,
        }
    }

    pub fn run<F>(&self, handler: F, additional_body: Option<Map<String, Value>>) -> ResponseEnvelope
    where
        F: Fn(&Value, &InvocationMetadata) -> ResponseEnvelope,
    {
        let event = self.context.generate_event(additional_body);
        tracing::debug!(
            request_id = %self.metadata.aws_request_id,
            function = %self.metadata.function_name,
            "Invoking handler"
        );
        handler(&event, &self.metadata)
    }
}

/// Reads and decodes a JSON file.
pub async fn load_json_file(path: &Path) -> Result<Value> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::envelope::ResponseBody;
    use crate::profile::handler::execute;
    use serde_json::json;
    use std::io::Write;

    fn echo(event: &Value, _meta: &InvocationMetadata) -> ResponseEnvelope {
        ResponseEnvelope {
            status_code: 200,
            body: event["body"].as_str().unwrap_or_default().to_string(),
        }
    }

    #[test]
    fn test_run_passes_context_to_handler() {
        let mut runner = LocalRunner::default();
        runner.context.set_variable("run_id", "linkedin-parser-test");
        let response = runner.run(echo, None);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["context"]["run_id"], "linkedin-parser-test");
    }

    #[test]
    fn test_run_passes_metadata_to_handler() {
        let runner = LocalRunner::new(InvocationMetadata::local("profile-fn", 256));
        let response = runner.run(
            |_event, meta| ResponseEnvelope {
                status_code: 200,
                body: format!("{}:{}", meta.function_name, meta.memory_limit_in_mb),
            },
            None,
        );
        assert_eq!(response.body, "profile-fn:256");
    }

    #[test]
    fn test_run_profile_normalizer_end_to_end() {
        let mut runner = LocalRunner::default();
        runner.context.set_variable("run_id", "local");
        let mut extra = Map::new();
        extra.insert(
            "profile_data".to_string(),
            json!({"experience": [{"title": "Engineer", "company": "Acme", "start_date": "2018"}]}),
        );

        let response = runner.run(execute, Some(extra));
        let body: ResponseBody = response.decode_body().unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(body.formatted_text, "Acme\nEngineer (2018 - Present)\n\n\n");
    }

    #[tokio::test]
    async fn test_load_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"positions": [{{"title": "Engineer"}}]}}"#).unwrap();
        let value = load_json_file(file.path()).await.unwrap();
        assert_eq!(value["positions"][0]["title"], "Engineer");
    }

    #[tokio::test]
    async fn test_load_json_file_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_json_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[tokio::test]
    async fn test_sample_profile_end_to_end() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/sample_profile.json");
        let mut extra = Map::new();
        extra.insert("profile_data".to_string(), load_json_file(&path).await.unwrap());

        let body = LocalRunner::default()
            .run(execute, Some(extra))
            .decode_body()
            .unwrap();
        let companies: Vec<_> = body
            .parsed_positions
            .iter()
            .map(|p| p.company.as_str())
            .collect();
        assert_eq!(
            companies,
            vec!["Analytical Engines Ltd", "Analytical Engines Ltd", "Difference Co"]
        );
        assert_eq!(body.parsed_positions[0].date_range, "4/2021 - Present");
        assert_eq!(body.parsed_positions[1].date_range, "1/2018 - 3/2021");
        assert_eq!(body.parsed_positions[2].title, "Software Intern");
        assert_eq!(body.parsed_positions[2].date_range, "2016 - 2017");
        assert_eq!(
            body.debug_info.unwrap().profile_data_keys,
            Some(vec!["profile_id".to_string(), "position_groups".to_string()])
        );
    }

    #[tokio::test]
    async fn test_load_json_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json_file(&dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}

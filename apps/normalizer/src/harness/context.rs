use serde_json::{json, Map, Value};

pub const MOCK_USER_AGENT: &str = "Serverless-Mock-Local-Test";

/// Context variables injected into every generated event under `body.context`.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    variables: Map<String, Value>,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Merges `variables` in, overwriting keys that already exist.
    pub fn set_variables(&mut self, variables: Map<String, Value>) {
        self.variables.extend(variables);
    }

    pub fn get_variable(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    /// Builds an HTTP-API style event whose string `body` carries the context
    /// variables plus `additional_body`. Additional keys win on collision,
    /// including `context` itself.
    pub fn generate_event(&self, additional_body: Option<Map<String, Value>>) -> Value {
        let mut body = Map::new();
        body.insert("context".to_string(), Value::Object(self.variables.clone()));
        if let Some(extra) = additional_body {
            body.extend(extra);
        }

        json!({
            "body": Value::Object(body).to_string(),
            "headers": {
                "content-type": "application/json",
                "user-agent": MOCK_USER_AGENT
            },
            "requestContext": {
                "http": {
                    "method": "POST",
                    "path": "/"
                }
            },
            "isBase64Encoded": false,
            "rawPath": "/",
            "version": "2.0"
        })
    }
}

//! AWS Lambda handler for evaluating a single loan application
//!
//! Accepts the application as the invocation payload, or as the JSON `body`
//! string of a Lambda Function URL request, and returns the full result record
//! with a committee summary.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use loan_origination::{
    committee_prompt, Applicant, ApplicationResult, Assumptions, LoanPurpose, OriginationEngine,
    TemplateSummary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Input application
#[derive(Debug, Deserialize)]
pub struct ApplicationRequest {
    pub name: String,
    pub age: u8,
    pub income: f64,
    pub amount: f64,

    #[serde(default = "default_purpose")]
    pub purpose: String,

    /// Seed for score noise; omitted means a fresh draw
    #[serde(default)]
    pub seed: Option<u64>,

    /// Also return the language-model prompt for this result
    #[serde(default)]
    pub include_prompt: bool,
}

fn default_purpose() -> String { LoanPurpose::Personal.as_str().to_string() }

/// Output for one application
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ApplicationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApplicationResponse {
    fn error(message: impl Into<String>) -> Self {
        Self {
            result: None,
            prompt: None,
            error: Some(message.into()),
        }
    }
}

/// Function URL events wrap the application in a `body` field
fn is_function_url(payload: &Value) -> bool {
    payload.get("body").is_some()
}

/// Parse the application from a Function URL body or a direct payload
fn extract_request(payload: Value) -> Result<ApplicationRequest, String> {
    if let Some(body) = payload.get("body").and_then(Value::as_str) {
        return serde_json::from_str(body).map_err(|e| format!("invalid request body: {}", e));
    }
    serde_json::from_value(payload).map_err(|e| format!("invalid request: {}", e))
}

fn process(engine: &OriginationEngine, request: ApplicationRequest) -> ApplicationResponse {
    let purpose: LoanPurpose = match request.purpose.parse() {
        Ok(p) => p,
        Err(e) => return ApplicationResponse::error(e.to_string()),
    };
    let applicant = match Applicant::new(request.name, request.age, request.income, request.amount, purpose) {
        Ok(a) => a,
        Err(e) => return ApplicationResponse::error(e.to_string()),
    };

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match engine.evaluate_with_summary(&applicant, &mut rng, &TemplateSummary) {
        Ok(result) => {
            let prompt = request.include_prompt.then(|| committee_prompt(&result));
            ApplicationResponse {
                result: Some(result),
                prompt,
                error: None,
            }
        }
        Err(e) => ApplicationResponse::error(e.to_string()),
    }
}

fn http_response(status: u16, body: &ApplicationResponse) -> Value {
    json!({
        "statusCode": status,
        "headers": { "Content-Type": "application/json" },
        "body": serde_json::to_string(body).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e)),
    })
}

/// Answer in the shape the caller used: HTTP envelope for Function URLs,
/// the bare response object for direct invocations
fn respond(engine: &OriginationEngine, payload: Value) -> Value {
    let is_http = is_function_url(&payload);

    let response = match extract_request(payload) {
        Ok(request) => process(engine, request),
        Err(message) => {
            log::warn!("{}", message);
            ApplicationResponse::error(message)
        }
    };

    if is_http {
        let status = if response.error.is_some() { 400 } else { 200 };
        http_response(status, &response)
    } else {
        serde_json::to_value(&response).unwrap_or_else(|e| json!({ "error": e.to_string() }))
    }
}

async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, _context) = event.into_parts();
    let engine = OriginationEngine::new(Assumptions::default_pricing());
    Ok(respond(&engine, payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

//! AWS Lambda handler for pension projections
//!
//! Accepts the projection inputs as JSON and returns the yearly records and a
//! summary. Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::{info, warn};
use pension_projection::{
    input::RawInput,
    projection::{ProjectionEngine, ProjectionSummary, YearRecord},
    PolicyLimits,
};
use serde::{Deserialize, Serialize};

/// Input for a projection
///
/// Numeric fields may be JSON numbers or strings; percentages are whole
/// numbers ("5" means 5%).
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub input: RawInput,

    /// Overrides for the contribution allowance and thresholds
    #[serde(default)]
    pub limits: Option<PolicyLimits>,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub summary: ProjectionSummary,
    pub records: Vec<YearRecord>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

fn error_response(status: u16, error: String, field: Option<&'static str>) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorBody { error, field })
}

/// Request body as text; `None` when a binary body is not valid UTF-8
fn body_text(body: &Body) -> Option<String> {
    match body {
        Body::Text(s) => Some(s.clone()),
        Body::Binary(b) => String::from_utf8(b.clone()).ok(),
        Body::Empty => Some("{}".to_string()),
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match body_text(event.body()) {
        Some(text) => text,
        None => return error_response(400, "Request body is not valid UTF-8".to_string(), None),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e), None),
    };

    let input = match request.input.parse() {
        Ok(input) => input,
        Err(e) => {
            warn!("rejected request: {}", e);
            return error_response(400, e.to_string(), e.field());
        }
    };

    let limits = request.limits.unwrap_or_default();
    if let Err(e) = limits.validate() {
        return error_response(400, format!("Invalid limits: {}", e), None);
    }

    let engine = ProjectionEngine::new(limits);
    let result = match engine.project(&input) {
        Ok(result) => result,
        Err(e) => return error_response(400, e.to_string(), e.field()),
    };

    let execution_time_ms = start.elapsed().as_millis() as u64;
    info!("projected {} years in {} ms", result.len(), execution_time_ms);

    let response = ProjectionResponse {
        summary: result.summary(),
        records: result.records,
        execution_time_ms,
    };

    json_response(200, &response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

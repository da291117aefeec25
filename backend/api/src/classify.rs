//! Pure classification of raw API responses into semantic outcomes.
//!
//! Missing fields substitute documented literal defaults; absence is never an
//! error. The defaults here are an exact contract with the renderer.

use serde_json::Value;

use carebridge_core::{ApiOutcome, Endpoint, StatusDashboard};

/// Classify one raw response. Non-200 wins over everything else.
pub fn classify(endpoint: Endpoint, status: u16, body: &Value) -> ApiOutcome {
    if status != 200 {
        return ApiOutcome::ApiError {
            detail: field_or(body, "detail", "Unknown error"),
        };
    }

    match endpoint {
        Endpoint::Health | Endpoint::Status => ApiOutcome::Healthy {
            version: field_or(body, "version", "Unknown"),
            status: field_or(body, "status", "Unknown"),
            message: field_or(body, "message", "No message"),
        },
        Endpoint::Eligibility => {
            if body["eligible"].as_bool().unwrap_or(false) {
                ApiOutcome::Eligible {
                    coverage_pct: field_or(body, "coverage_pct", "N/A"),
                }
            } else {
                ApiOutcome::Ineligible {
                    reason: field_or(body, "reason", "Coverage not available"),
                }
            }
        }
        Endpoint::Prescription => {
            if body["valid"].as_bool().unwrap_or(false) {
                ApiOutcome::Valid {
                    cross_chain_oracle: field_or(body, "cross_chain_oracle", "Verified"),
                }
            } else {
                ApiOutcome::Invalid {
                    reason: field_or(body, "reason", "Unknown"),
                }
            }
        }
    }
}

/// Fold `/health` and `/status` bodies into the dashboard fields. Either body
/// may be an empty object when its call came back non-200.
pub fn dashboard(health: &Value, status: &Value) -> StatusDashboard {
    let fl = &status["federated_learning"];
    StatusDashboard {
        api_status: field_or(health, "status", "Unknown"),
        api_version: field_or(health, "version", "Unknown"),
        current_round: fl["current_round"].as_u64().unwrap_or(0),
        participants: fl["participants"].as_u64().unwrap_or(0),
    }
}

/// String value of `body[key]`, or `default` when missing or null. Non-string
/// scalars (`coverage_pct` arrives as a bare number) render without quotes.
fn field_or(body: &Value, key: &str, default: &str) -> String {
    match body.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

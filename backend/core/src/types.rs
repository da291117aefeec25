//! Domain types shared across the CareBridge workspace.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Patient reference
// ---------------------------------------------------------------------------

/// Patient reference sent to the verification API.
///
/// The "encrypted" fields are placeholder strings derived from the identifier
/// by concatenation; the remote API owns the real privacy pipeline. All four
/// fields are non-empty whenever `patient_id` is non-empty. Built fresh per
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRef {
    pub patient_id: String,
    pub encrypted_data: String,
    /// Wire name is `ipfs_cid`; the value is a placeholder, not a real CID.
    #[serde(rename = "ipfs_cid")]
    pub data_pointer_id: String,
    pub data_hash: String,
}

impl PatientRef {
    pub fn new(patient_id: impl Into<String>) -> Self {
        let patient_id = patient_id.into();
        Self {
            encrypted_data: "sample_encrypted_data".to_string(),
            data_pointer_id: format!("Qm{patient_id}Hash"),
            data_hash: format!("hash_{patient_id}"),
            patient_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Verification request
// ---------------------------------------------------------------------------

/// One verification request, built per command invocation and sent once.
///
/// Untagged so the wire shape stays flat: `{patient_data, procedure_code}` or
/// `{patient_data, drug_code}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum VerificationRequest {
    Eligibility {
        patient_data: PatientRef,
        procedure_code: String,
    },
    Prescription {
        patient_data: PatientRef,
        drug_code: String,
    },
}

impl VerificationRequest {
    pub fn eligibility(patient_id: &str, procedure_code: &str) -> Self {
        Self::Eligibility {
            patient_data: PatientRef::new(patient_id),
            procedure_code: procedure_code.to_string(),
        }
    }

    pub fn prescription(patient_id: &str, drug_code: &str) -> Self {
        Self::Prescription {
            patient_data: PatientRef::new(patient_id),
            drug_code: drug_code.to_string(),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Eligibility { .. } => Endpoint::Eligibility,
            Self::Prescription { .. } => Endpoint::Prescription,
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// The remote verification API's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Status,
    Eligibility,
    Prescription,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::Status => "/status",
            Endpoint::Eligibility => "/verify-eligibility",
            Endpoint::Prescription => "/validate-prescription",
        }
    }

    /// Verification endpoints take a JSON body via POST; the rest are GETs.
    pub fn is_post(&self) -> bool {
        matches!(self, Endpoint::Eligibility | Endpoint::Prescription)
    }
}

// ---------------------------------------------------------------------------
// Responses and outcomes
// ---------------------------------------------------------------------------

/// Raw result of one API call. Input to the classifier; a non-200 status is
/// not an error at this layer.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Classified result of an API response.
///
/// Closed set: the renderer has exactly one template per variant and no
/// unknown-outcome case. `Ineligible` and `Invalid` are well-formed negative
/// verdicts, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Healthy {
        version: String,
        status: String,
        message: String,
    },
    Eligible {
        coverage_pct: String,
    },
    Ineligible {
        reason: String,
    },
    Valid {
        cross_chain_oracle: String,
    },
    Invalid {
        reason: String,
    },
    ApiError {
        detail: String,
    },
    Transport {
        message: String,
    },
}

/// Fields shown on the `/status` dashboard. Missing fields degrade to the
/// defaults below rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDashboard {
    pub api_status: String,
    pub api_version: String,
    pub current_round: u64,
    pub participants: u64,
}

//! Markdown templates for every outcome and static reply.
//!
//! Rendering is total and deterministic: one template per `ApiOutcome`
//! variant, fields interpolated verbatim, no clock values ("Last Updated" on
//! the dashboard is a fixed label).

use carebridge_core::{ApiOutcome, StatusDashboard};

use crate::types::{Button, CallbackAction, CommandKind, Keyboard};

/// Interpolation context for the outcome templates. Verification verdicts
/// need the patient id and procedure/drug code; the other variants only use
/// the API base URL.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub api_base_url: &'a str,
    pub patient_id: &'a str,
    pub code: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn bare(api_base_url: &'a str) -> Self {
        Self {
            api_base_url,
            patient_id: "",
            code: "",
        }
    }

    pub fn verification(api_base_url: &'a str, patient_id: &'a str, code: &'a str) -> Self {
        Self {
            api_base_url,
            patient_id,
            code,
        }
    }
}

/// One template per variant.
pub fn outcome_message(outcome: &ApiOutcome, ctx: &RenderContext<'_>) -> String {
    match outcome {
        ApiOutcome::Healthy {
            version,
            status,
            message,
        } => format!(
            "**System Status: Healthy**\n\n\
             - **Version:** {version}\n\
             - **Status:** {status}\n\
             - **Message:** {message}\n\
             - **API URL:** {}\n\n\
             All healthcare agents are operational!",
            ctx.api_base_url
        ),
        ApiOutcome::Eligible { coverage_pct } => format!(
            "**Eligibility Confirmed**\n\n\
             - **Patient:** {}\n\
             - **Procedure:** {}\n\
             - **Status:** Eligible\n\
             - **Coverage:** {coverage_pct}%\n\
             - **ZK Proof:** Verified\n\n\
             The patient is eligible for this procedure!",
            ctx.patient_id, ctx.code
        ),
        ApiOutcome::Ineligible { reason } => format!(
            "**Eligibility Denied**\n\n\
             - **Patient:** {}\n\
             - **Procedure:** {}\n\
             - **Status:** Not Eligible\n\
             - **Reason:** {reason}\n\n\
             Please check with insurance provider.",
            ctx.patient_id, ctx.code
        ),
        ApiOutcome::Valid { cross_chain_oracle } => format!(
            "**Prescription Validated**\n\n\
             - **Patient:** {}\n\
             - **Drug:** {}\n\
             - **Safety:** Safe to prescribe\n\
             - **Interactions:** Checked\n\
             - **Cross-chain:** {cross_chain_oracle}\n\n\
             Prescription is safe to dispense!",
            ctx.patient_id, ctx.code
        ),
        ApiOutcome::Invalid { reason } => format!(
            "**Prescription Warning**\n\n\
             - **Patient:** {}\n\
             - **Drug:** {}\n\
             - **Safety:** Potential issues\n\
             - **Reason:** {reason}\n\n\
             Please consult with physician before dispensing.",
            ctx.patient_id, ctx.code
        ),
        ApiOutcome::ApiError { detail } => format!("**API Error:** {detail}"),
        ApiOutcome::Transport { message } => format!("**Connection Error:** {message}"),
    }
}

/// The `/status` dashboard. "Last Updated" is a fixed string by contract.
pub fn status_dashboard(d: &StatusDashboard) -> String {
    format!(
        "**System Status Dashboard**\n\n\
         **Healthcare API**\n\
         - Status: {}\n\
         - Version: {}\n\n\
         **Federated Learning**\n\
         - Current Round: {}\n\
         - Participants: {}\n\n\
         **Privacy Features**\n\
         - Zero-Knowledge Proofs: Active\n\
         - Data Encryption: AES-256\n\
         - Blockchain: Solana\n\n\
         Last Updated: Just now",
        d.api_status, d.api_version, d.current_round, d.participants
    )
}

pub fn status_error(detail: &str) -> String {
    format!("**Error getting status:** {detail}")
}

// ---------------------------------------------------------------------------
// Static texts
// ---------------------------------------------------------------------------

/// Welcome menu with its inline keyboard.
pub fn welcome(api_base_url: &str) -> (String, Keyboard) {
    let text = "**Healthcare Agents Bot**\n\n\
                Welcome to the privacy-preserving healthcare system!\n\n\
                I can help you with:\n\
                - **Eligibility Verification** - Check insurance coverage\n\
                - **Prescription Validation** - Verify drug safety\n\
                - **Federated Learning** - Contribute to AI training\n\
                - **System Status** - Check API health\n\n\
                All your data is encrypted and processed with zero-knowledge proofs \
                for maximum privacy!\n\n\
                Choose an option below or type a command:"
        .to_string();

    let keyboard = vec![
        vec![
            Button::callback("Check Eligibility", CallbackAction::Eligibility),
            Button::callback("Validate Prescription", CallbackAction::Prescription),
        ],
        vec![
            Button::callback("System Status", CallbackAction::Status),
            Button::callback("Help", CallbackAction::Help),
        ],
        vec![Button::url("API Docs", format!("{api_base_url}/docs"))],
    ];

    (text, keyboard)
}

pub fn help(api_base_url: &str) -> String {
    format!(
        "**Healthcare Bot Commands**\n\n\
         **Basic Commands:**\n\
         - `/start` - Show main menu\n\
         - `/help` - Show this help message\n\
         - `/health` - Check API status\n\n\
         **Healthcare Commands:**\n\
         - `/eligibility <patient_id> <procedure>` - Check eligibility\n\
         - `/prescription <patient_id> <drug_code>` - Validate prescription\n\
         - `/status` - Show system status\n\n\
         **Examples:**\n\
         ```\n\
         /eligibility PATIENT_001 PROC001\n\
         /prescription PATIENT_001 DRUG001\n\
         ```\n\n\
         **Privacy Features:**\n\
         - All data is encrypted\n\
         - Zero-knowledge proofs\n\
         - HIPAA compliant\n\
         - Blockchain verified\n\n\
         **Need more help?** Check the [API Documentation]({api_base_url}/docs)"
    )
}

/// Usage string sent when a command is missing required arguments.
pub fn usage(kind: CommandKind) -> String {
    match kind {
        CommandKind::Eligibility => "**Usage:** `/eligibility <patient_id> <procedure_code>`\n\n\
                                     **Example:** `/eligibility PATIENT_001 PROC001`"
            .to_string(),
        CommandKind::Prescription => "**Usage:** `/prescription <patient_id> <drug_code>`\n\n\
                                      **Example:** `/prescription PATIENT_001 DRUG001`"
            .to_string(),
        // The remaining commands take no arguments and never reach here.
        _ => "Type `/help` for usage.".to_string(),
    }
}

/// Inline-button guidance for the eligibility flow.
pub fn eligibility_guidance() -> String {
    "**Eligibility Check**\n\n\
     Use: `/eligibility <patient_id> <procedure_code>`\n\n\
     **Example:** `/eligibility PATIENT_001 PROC001`\n\n\
     This will check if the patient is eligible for the specified medical procedure."
        .to_string()
}

/// Inline-button guidance for the prescription flow.
pub fn prescription_guidance() -> String {
    "**Prescription Validation**\n\n\
     Use: `/prescription <patient_id> <drug_code>`\n\n\
     **Example:** `/prescription PATIENT_001 DRUG001`\n\n\
     This will validate if the drug is safe for the patient and check for interactions."
        .to_string()
}

/// Keyword-routed hint for eligibility questions in free text.
pub fn eligibility_hint() -> String {
    "To check eligibility, use:\n\
     `/eligibility <patient_id> <procedure_code>`\n\n\
     Example: `/eligibility PATIENT_001 PROC001`"
        .to_string()
}

/// Keyword-routed hint for prescription questions in free text.
pub fn prescription_hint() -> String {
    "To validate a prescription, use:\n\
     `/prescription <patient_id> <drug_code>`\n\n\
     Example: `/prescription PATIENT_001 DRUG001`"
        .to_string()
}

/// Capability summary for free text that no keyword group matches.
pub fn fallback() -> String {
    "I'm a healthcare bot! I can help with:\n\n\
     - `/eligibility` - Check insurance coverage\n\
     - `/prescription` - Validate medications\n\
     - `/status` - System health\n\
     - `/help` - Show all commands\n\n\
     Type `/help` for more details!"
        .to_string()
}

/// Provisional texts shown while a verification call is in flight.
pub fn loading(kind: CommandKind) -> Option<&'static str> {
    match kind {
        CommandKind::Eligibility => Some("Checking eligibility... Please wait."),
        CommandKind::Prescription => Some("Validating prescription... Please wait."),
        _ => None,
    }
}

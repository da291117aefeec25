//! Command dispatch: route parsed commands, button presses, and free text to
//! their flows and produce exactly one reply each.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use carebridge_api::{classify, dashboard};
use carebridge_core::{ApiOutcome, Endpoint, VerificationApi, VerificationRequest};

use crate::keywords::{route_text, TextRoute};
use crate::registry::CommandRegistry;
use crate::render::{self, RenderContext};
use crate::types::{CallbackAction, CommandInvocation, CommandKind, CommandResponse};

/// Stateless across invocations: holds only the immutable dispatch table and
/// a handle to the API client, so concurrent commands need no locking.
pub struct Dispatcher {
    api: Arc<dyn VerificationApi>,
    registry: CommandRegistry,
    api_base_url: String,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn VerificationApi>, api_base_url: impl Into<String>) -> Self {
        Self {
            api,
            registry: CommandRegistry::new(),
            api_base_url: api_base_url.into(),
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Provisional message to show while a verification call is in flight.
    /// `None` for commands that answer immediately or will short-circuit to
    /// a usage reply.
    pub fn loading_text(&self, inv: &CommandInvocation) -> Option<&'static str> {
        let spec = self.registry.find(&inv.name)?;
        if inv.args.len() < spec.min_args {
            return None;
        }
        render::loading(spec.kind)
    }

    /// Route one parsed command.
    pub async fn dispatch_command(&self, inv: &CommandInvocation) -> CommandResponse {
        let Some(spec) = self.registry.find(&inv.name) else {
            return CommandResponse::text(render::fallback());
        };

        // Precondition check before any request is built; the API client is
        // never invoked for a malformed command.
        if inv.args.len() < spec.min_args {
            info!("[Commands] /{} missing arguments, sending usage", spec.name);
            return CommandResponse::text(render::usage(spec.kind));
        }

        match spec.kind {
            CommandKind::Menu => {
                let (text, keyboard) = render::welcome(&self.api_base_url);
                CommandResponse::text(text).with_keyboard(keyboard)
            }
            CommandKind::Help => CommandResponse::text(render::help(&self.api_base_url)),
            CommandKind::Health => CommandResponse::text(self.health_check().await),
            CommandKind::Status => CommandResponse::text(self.status_dashboard().await),
            CommandKind::Eligibility => CommandResponse::text(
                self.verify(
                    VerificationRequest::eligibility(&inv.args[0], &inv.args[1]),
                    &inv.args[0],
                    &inv.args[1],
                )
                .await,
            ),
            CommandKind::Prescription => CommandResponse::text(
                self.verify(
                    VerificationRequest::prescription(&inv.args[0], &inv.args[1]),
                    &inv.args[0],
                    &inv.args[1],
                )
                .await,
            ),
        }
    }

    /// Route an inline-button press. Acknowledging the callback itself is the
    /// channel adapter's side effect, distinct from this reply.
    pub async fn dispatch_callback(&self, action: CallbackAction) -> CommandResponse {
        info!("[Commands] Callback action: {}", action.as_str());
        match action {
            CallbackAction::Eligibility => CommandResponse::text(render::eligibility_guidance()),
            CallbackAction::Prescription => CommandResponse::text(render::prescription_guidance()),
            CallbackAction::Status => CommandResponse::text(self.status_dashboard().await),
            CallbackAction::Help => CommandResponse::text(render::help(&self.api_base_url)),
        }
    }

    /// Route free text through the keyword groups.
    pub async fn dispatch_text(&self, text: &str) -> CommandResponse {
        match route_text(text) {
            TextRoute::EligibilityGuidance => CommandResponse::text(render::eligibility_hint()),
            TextRoute::PrescriptionGuidance => CommandResponse::text(render::prescription_hint()),
            TextRoute::Help => CommandResponse::text(render::help(&self.api_base_url)),
            TextRoute::Health => CommandResponse::text(self.health_check().await),
            TextRoute::Fallback => CommandResponse::text(render::fallback()),
        }
    }

    async fn health_check(&self) -> String {
        let ctx = RenderContext::bare(&self.api_base_url);
        match self.api.fetch(Endpoint::Health, None).await {
            Ok(resp) => {
                let outcome = classify(Endpoint::Health, resp.status, &resp.body);
                render::outcome_message(&outcome, &ctx)
            }
            Err(err) => {
                warn!("[Commands] Health check failed: {err}");
                render::outcome_message(
                    &ApiOutcome::Transport {
                        message: err.detail(),
                    },
                    &ctx,
                )
            }
        }
    }

    async fn verify(&self, request: VerificationRequest, patient_id: &str, code: &str) -> String {
        let endpoint = request.endpoint();
        let ctx = RenderContext::verification(&self.api_base_url, patient_id, code);
        match self.api.fetch(endpoint, Some(&request)).await {
            Ok(resp) => {
                let outcome = classify(endpoint, resp.status, &resp.body);
                render::outcome_message(&outcome, &ctx)
            }
            Err(err) => {
                warn!("[Commands] {} call failed: {err}", endpoint.path());
                render::outcome_message(
                    &ApiOutcome::Transport {
                        message: err.detail(),
                    },
                    &ctx,
                )
            }
        }
    }

    /// Dashboard flow: a non-200 on either endpoint degrades its body to an
    /// empty object; only a failed connection produces the error template.
    async fn status_dashboard(&self) -> String {
        let health = self.api.fetch(Endpoint::Health, None).await;
        let status = self.api.fetch(Endpoint::Status, None).await;
        match (health, status) {
            (Ok(h), Ok(s)) => {
                let health_body = body_if_ok(h.status, h.body);
                let status_body = body_if_ok(s.status, s.body);
                render::status_dashboard(&dashboard(&health_body, &status_body))
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!("[Commands] Status dashboard failed: {err}");
                render::status_error(&err.detail())
            }
        }
    }
}

fn body_if_ok(status: u16, body: Value) -> Value {
    if status == 200 {
        body
    } else {
        Value::Object(serde_json::Map::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use carebridge_core::{ApiResponse, BridgeError};

    /// Mock API that counts calls and returns a canned response.
    struct MockApi {
        calls: AtomicUsize,
        response: Result<(u16, Value), String>,
    }

    impl MockApi {
        fn ok(status: u16, body: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response: Ok((status, body)),
            })
        }

        fn transport(message: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response: Err(message.to_string()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VerificationApi for MockApi {
        async fn fetch(
            &self,
            _endpoint: Endpoint,
            _body: Option<&VerificationRequest>,
        ) -> Result<ApiResponse, BridgeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok((status, body)) => Ok(ApiResponse {
                    status: *status,
                    body: body.clone(),
                }),
                Err(message) => Err(BridgeError::Transport(message.clone())),
            }
        }
    }

    fn dispatcher(api: Arc<MockApi>) -> Dispatcher {
        Dispatcher::new(api, "https://api.example.com")
    }

    fn inv(name: &str, args: &[&str]) -> CommandInvocation {
        CommandInvocation {
            name: name.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn missing_args_short_circuits_without_api_call() {
        let api = MockApi::ok(200, json!({"eligible": true}));
        let d = dispatcher(api.clone());

        for (name, args) in [
            ("eligibility", vec![]),
            ("eligibility", vec!["P1"]),
            ("prescription", vec![]),
            ("prescription", vec!["P1"]),
        ] {
            let response = d.dispatch_command(&inv(name, &args)).await;
            assert!(response.text.contains("**Usage:**"), "{name} {args:?}");
        }
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn static_commands_issue_no_calls() {
        let api = MockApi::ok(200, json!({}));
        let d = dispatcher(api.clone());

        let start = d.dispatch_command(&inv("start", &[])).await;
        assert!(start.text.contains("Healthcare Agents Bot"));
        assert!(start.keyboard.is_some());

        let help = d.dispatch_command(&inv("help", &[])).await;
        assert!(help.text.contains("Healthcare Bot Commands"));
        assert!(help.keyboard.is_none());

        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn eligibility_happy_path() {
        let api = MockApi::ok(200, json!({"eligible": true, "coverage_pct": 80}));
        let d = dispatcher(api.clone());

        let response = d
            .dispatch_command(&inv("eligibility", &["PATIENT_001", "PROC001"]))
            .await;
        assert!(response.text.contains("Eligibility Confirmed"));
        assert!(response.text.contains("**Patient:** PATIENT_001"));
        assert!(response.text.contains("**Coverage:** 80%"));
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn ineligible_renders_default_reason() {
        let api = MockApi::ok(200, json!({"eligible": false}));
        let d = dispatcher(api);

        let response = d
            .dispatch_command(&inv("eligibility", &["P1", "PROC001"]))
            .await;
        assert!(response.text.contains("Eligibility Denied"));
        assert!(response.text.contains("Coverage not available"));
    }

    #[tokio::test]
    async fn prescription_warning_carries_reason() {
        let api = MockApi::ok(200, json!({"valid": false, "reason": "interaction"}));
        let d = dispatcher(api);

        let response = d
            .dispatch_command(&inv("prescription", &["P1", "DRUG001"]))
            .await;
        assert!(response.text.contains("Prescription Warning"));
        assert!(response.text.contains("**Reason:** interaction"));
    }

    #[tokio::test]
    async fn api_error_surfaces_server_detail() {
        let api = MockApi::ok(404, json!({"detail": "not found"}));
        let d = dispatcher(api);

        let response = d
            .dispatch_command(&inv("eligibility", &["P1", "PROC001"]))
            .await;
        assert_eq!(response.text, "**API Error:** not found");
    }

    #[tokio::test]
    async fn transport_error_renders_connection_message() {
        let api = MockApi::transport("connection refused");
        let d = dispatcher(api);

        let response = d.dispatch_command(&inv("health", &[])).await;
        assert_eq!(response.text, "**Connection Error:** connection refused");
    }

    #[tokio::test]
    async fn status_dashboard_degrades_on_non_200() {
        let api = MockApi::ok(503, json!({"detail": "down"}));
        let d = dispatcher(api.clone());

        let response = d.dispatch_command(&inv("status", &[])).await;
        assert!(response.text.contains("System Status Dashboard"));
        assert!(response.text.contains("- Status: Unknown"));
        assert!(response.text.contains("- Current Round: 0"));
        // One GET each for /health and /status.
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn status_dashboard_transport_error() {
        let api = MockApi::transport("dns failure");
        let d = dispatcher(api);

        let response = d.dispatch_command(&inv("status", &[])).await;
        assert_eq!(response.text, "**Error getting status:** dns failure");
    }

    #[tokio::test]
    async fn callbacks_map_to_guidance_or_flows() {
        let api = MockApi::ok(200, json!({"status": "healthy"}));
        let d = dispatcher(api.clone());

        let eligibility = d.dispatch_callback(CallbackAction::Eligibility).await;
        assert!(eligibility.text.contains("Eligibility Check"));

        let prescription = d.dispatch_callback(CallbackAction::Prescription).await;
        assert!(prescription.text.contains("Prescription Validation"));

        let help = d.dispatch_callback(CallbackAction::Help).await;
        assert!(help.text.contains("Healthcare Bot Commands"));
        assert_eq!(api.calls(), 0);

        let status = d.dispatch_callback(CallbackAction::Status).await;
        assert!(status.text.contains("System Status Dashboard"));
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn free_text_routes_by_keyword_group() {
        let api = MockApi::ok(200, json!({}));
        let d = dispatcher(api.clone());

        let insurance = d.dispatch_text("check my insurance coverage").await;
        assert!(insurance.text.contains("To check eligibility"));

        let meds = d.dispatch_text("question about my medication").await;
        assert!(meds.text.contains("To validate a prescription"));

        let unknown = d.dispatch_text("good morning").await;
        assert!(unknown.text.contains("I'm a healthcare bot!"));
        assert_eq!(api.calls(), 0);

        let health = d.dispatch_text("are you online?").await;
        assert!(health.text.contains("System Status: Healthy"));
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn loading_text_only_when_args_are_valid() {
        let api = MockApi::ok(200, json!({}));
        let d = dispatcher(api);

        assert_eq!(
            d.loading_text(&inv("eligibility", &["P1", "PROC001"])),
            Some("Checking eligibility... Please wait.")
        );
        assert_eq!(
            d.loading_text(&inv("prescription", &["P1", "DRUG001"])),
            Some("Validating prescription... Please wait.")
        );
        assert_eq!(d.loading_text(&inv("eligibility", &["P1"])), None);
        assert_eq!(d.loading_text(&inv("health", &[])), None);
    }
}

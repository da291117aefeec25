pub mod error;
pub mod traits;
pub mod types;

pub use error::BridgeError;
pub use traits::VerificationApi;
pub use types::{
    ApiOutcome, ApiResponse, Endpoint, PatientRef, StatusDashboard, VerificationRequest,
};

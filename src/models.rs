//! Wire models for the YesCaptcha API.

use crate::error::{CaptchaError, Result};
use serde::Deserialize;

/// Supported task types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    /// reCAPTCHA v2, solved server-side without a proxy
    NoCaptchaTaskProxyless,
    /// reCAPTCHA v3, solved server-side without a proxy
    RecaptchaV3TaskProxyless,
    /// hCaptcha, solved server-side without a proxy
    HCaptchaTaskProxyless,
}

impl TaskType {
    /// Returns the wire string sent in the `task.type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::NoCaptchaTaskProxyless => "NoCaptchaTaskProxyless",
            TaskType::RecaptchaV3TaskProxyless => "RecaptchaV3TaskProxyless",
            TaskType::HCaptchaTaskProxyless => "HCaptchaTaskProxyless",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response envelope shared by every endpoint.
///
/// `errorId == 0` means the call was accepted and the endpoint-specific body
/// is meaningful; otherwise `errorCode`/`errorDescription` describe the
/// rejection.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "errorId")]
    pub error_id: i64,
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
    #[serde(rename = "errorDescription", default)]
    pub error_description: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    /// The body when the service accepted the call, the verbatim remote
    /// error otherwise.
    pub fn into_body(self) -> Result<T> {
        if self.error_id == 0 {
            Ok(self.body)
        } else {
            Err(self.remote_error())
        }
    }

    /// Build a remote error from the payload's `errorCode`/`errorDescription`.
    /// Both fields may be absent; the error then carries empty strings.
    pub fn remote_error(self) -> CaptchaError {
        CaptchaError::Remote {
            code: self.error_code.unwrap_or_default(),
            description: self.error_description.unwrap_or_default(),
        }
    }
}

/// Body of a `getSoftID` response.
#[derive(Debug, Deserialize)]
pub struct SoftIdBody {
    #[serde(rename = "softID", default)]
    pub soft_id: i64,
}

/// Body of a `getBalance` response.
#[derive(Debug, Deserialize)]
pub struct BalanceBody {
    #[serde(default)]
    pub balance: i64,
}

/// Body of a `createTask` response.
#[derive(Debug, Deserialize)]
pub struct TaskBody {
    #[serde(rename = "taskId", default)]
    pub task_id: String,
}

/// Body of a `getTaskResult` response. `status` is the service's word on the
/// task; anything other than `ready`/`processing` is unrecognized and treated
/// as a rejection by the caller.
#[derive(Debug, Deserialize)]
pub struct ResultBody {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub solution: Option<Solution>,
}

/// Nested solution payload, present once a task is ready.
#[derive(Debug, Deserialize)]
pub struct Solution {
    #[serde(rename = "gRecaptchaResponse", default)]
    pub g_recaptcha_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_wire_strings() {
        assert_eq!(
            TaskType::NoCaptchaTaskProxyless.as_str(),
            "NoCaptchaTaskProxyless"
        );
        assert_eq!(
            TaskType::RecaptchaV3TaskProxyless.to_string(),
            "RecaptchaV3TaskProxyless"
        );
    }

    #[test]
    fn test_soft_id_envelope() {
        let env: Envelope<SoftIdBody> =
            serde_json::from_str(r#"{"errorId":0,"softID":1234}"#).unwrap();
        assert_eq!(env.error_id, 0);
        assert_eq!(env.into_body().unwrap().soft_id, 1234);
    }

    #[test]
    fn test_rejection_envelope_is_verbatim() {
        let env: Envelope<TaskBody> = serde_json::from_str(
            r#"{"errorId":1,"errorCode":"ERROR_ZERO_BALANCE","errorDescription":"Account balance is empty"}"#,
        )
        .unwrap();
        let err = env.into_body().unwrap_err();
        assert_eq!(err.code(), "ERROR_ZERO_BALANCE");
        assert!(err.to_string().contains("Account balance is empty"));
    }

    #[test]
    fn test_rejection_without_code_fields() {
        let env: Envelope<ResultBody> =
            serde_json::from_str(r#"{"errorId":27,"status":"failed"}"#).unwrap();
        match env.remote_error() {
            CaptchaError::Remote { code, description } => {
                assert_eq!(code, "");
                assert_eq!(description, "");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ready_result_body() {
        let env: Envelope<ResultBody> = serde_json::from_str(
            r#"{"errorId":0,"status":"ready","solution":{"gRecaptchaResponse":"TOKEN123"}}"#,
        )
        .unwrap();
        let body = env.into_body().unwrap();
        assert_eq!(body.status, "ready");
        assert_eq!(body.solution.unwrap().g_recaptcha_response, "TOKEN123");
    }

    #[test]
    fn test_processing_result_body_has_no_solution() {
        let env: Envelope<ResultBody> =
            serde_json::from_str(r#"{"errorId":0,"status":"processing"}"#).unwrap();
        let body = env.into_body().unwrap();
        assert_eq!(body.status, "processing");
        assert!(body.solution.is_none());
    }
}

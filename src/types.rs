use serde::{Deserialize, Serialize};

/// Job status values reported by fax.to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Delivered
    Success,
    /// Delivery failed; see `msg_code` and `message`
    Failed,
    /// Accepted and queued; the outcome arrives later
    Executed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Check if the job has reached an outcome that will not change
    pub fn is_final(&self) -> bool {
        matches!(self, JobStatus::Success | JobStatus::Failed)
    }
}

/// Typed view of a fax job status.
///
/// Deserializes both the status endpoint's body and the payload fax.to
/// posts to a callback URL, which names the id `fax_job_id`:
///
/// ```
/// use faxto::{FaxStatus, JobStatus};
///
/// let status: FaxStatus = serde_json::from_value(serde_json::json!({
///     "fax_job_id": 223561,
///     "status": "failed",
///     "msg_code": "no_answer",
///     "message": "Fax Failed - No Answer from Fax machine"
/// })).unwrap();
///
/// assert_eq!(status.job_id, Some(223561));
/// assert_eq!(status.status, JobStatus::Failed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaxStatus {
    #[serde(default, alias = "fax_job_id", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<u64>,

    pub status: JobStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

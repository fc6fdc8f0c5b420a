/// Parameters for sending a fax.
///
/// The document comes either from a previously uploaded file
/// (`document_id`) or from a local file (`file`). When both are given the
/// local file wins and `document_id` is not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaxSendRequest {
    pub fax_number: String,
    pub document_id: Option<u64>,
    pub file: Option<String>,
    /// Transmitting station identifier shown to the recipient
    pub tsi_number: Option<String>,
    /// Passed through to the service unchanged when set
    pub delete_file: Option<bool>,
}

impl FaxSendRequest {
    pub fn new(fax_number: impl Into<String>) -> Self {
        FaxSendRequest {
            fax_number: fax_number.into(),
            ..Default::default()
        }
    }

    pub fn document_id(mut self, document_id: u64) -> Self {
        self.document_id = Some(document_id);
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn tsi_number(mut self, tsi_number: impl Into<String>) -> Self {
        self.tsi_number = Some(tsi_number.into());
        self
    }

    pub fn delete_file(mut self, delete_file: bool) -> Self {
        self.delete_file = Some(delete_file);
        self
    }

    /// Local file to attach, ignoring empty paths
    pub(crate) fn local_file(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.is_empty())
    }

    /// Uploaded document to reference, ignoring the zero id
    pub(crate) fn uploaded_document(&self) -> Option<u64> {
        self.document_id.filter(|id| *id != 0)
    }
}

/// Paging for the fax history listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl HistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Query pairs for the parameters that are set
    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

/// Multipart field name for a regular upload
pub const FILE_FIELD: &str = "file";
/// Multipart field name when the document is registered as a remote file
pub const REMOTE_FILE_FIELD: &str = "AddRemoteFile";

/// A document to add to the account's file storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file: String,
    pub is_remote: bool,
}

impl DocumentUpload {
    pub fn new(file: impl Into<String>) -> Self {
        DocumentUpload {
            file: file.into(),
            is_remote: false,
        }
    }

    pub fn remote(mut self, is_remote: bool) -> Self {
        self.is_remote = is_remote;
        self
    }

    pub(crate) fn field_name(&self) -> &'static str {
        if self.is_remote {
            REMOTE_FILE_FIELD
        } else {
            FILE_FIELD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_sources() {
        let request = FaxSendRequest::new("+49123456789").document_id(0).file("");
        assert_eq!(request.uploaded_document(), None);
        assert_eq!(request.local_file(), None);

        let request = FaxSendRequest::new("+49123456789").document_id(42).file("a.pdf");
        assert_eq!(request.uploaded_document(), Some(42));
        assert_eq!(request.local_file(), Some("a.pdf"));
    }

    #[test]
    fn test_history_query() {
        assert!(HistoryQuery::new().to_query().is_empty());
        assert_eq!(
            HistoryQuery::new().page(3).to_query(),
            vec![("page", "3".to_string())]
        );
    }

    #[test]
    fn test_upload_field_name() {
        assert_eq!(DocumentUpload::new("a.pdf").field_name(), "file");
        assert_eq!(DocumentUpload::new("a.pdf").remote(true).field_name(), "AddRemoteFile");
    }
}

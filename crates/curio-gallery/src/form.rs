//! Upload form state

/// Outcome of the most recent submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Failed,
}

/// State of the model upload form
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub name: String,
    pub description: String,
    pub model_url: String,
    pub status: UploadStatus,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit is allowed only with a model URL and no submit in flight
    pub fn can_submit(&self) -> bool {
        !self.model_url.trim().is_empty() && self.status != UploadStatus::Uploading
    }

    /// Mark the form as submitting; returns false when submit is not allowed
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.status = UploadStatus::Uploading;
        true
    }

    /// Upload confirmed by the server; clear the fields for the next entry
    pub fn submit_succeeded(&mut self) {
        self.name.clear();
        self.description.clear();
        self.model_url.clear();
        self.status = UploadStatus::Success;
    }

    pub fn submit_failed(&mut self) {
        self.status = UploadStatus::Failed;
    }

    /// Optional field helpers for the API client
    pub fn name_opt(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn description_opt(&self) -> Option<&str> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_model_url() {
        let mut form = UploadForm::new();
        form.name = "Cube".to_string();
        assert!(!form.can_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.status, UploadStatus::Idle);

        form.model_url = "https://x/cube.glb".to_string();
        assert!(form.begin_submit());
        assert_eq!(form.status, UploadStatus::Uploading);
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = UploadForm::new();
        form.model_url = "https://x/cube.glb".to_string();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = UploadForm::new();
        form.name = "Cube".to_string();
        form.description = "test".to_string();
        form.model_url = "https://x/cube.glb".to_string();
        form.begin_submit();
        form.submit_succeeded();

        assert_eq!(form.status, UploadStatus::Success);
        assert!(form.model_url.is_empty());
        assert!(form.name.is_empty());
        assert!(form.name_opt().is_none());
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let mut form = UploadForm::new();
        form.model_url = "https://x/cube.glb".to_string();
        form.begin_submit();
        form.submit_failed();
        assert_eq!(form.status, UploadStatus::Failed);
        assert_eq!(form.model_url, "https://x/cube.glb");
    }
}

use thiserror::Error;
use url::Url;

/// Placeholder substituted with the candidate bucket name.
pub const BUCKET_PLACEHOLDER: &str = "{bucket}";

/// Virtual-hosted S3 endpoint. `?uploads=` makes the service answer 200 only
/// for buckets that exist and allow listing multipart uploads.
pub const DEFAULT_TEMPLATE: &str = "https://{bucket}.s3.amazonaws.com/?uploads=";

const SAMPLE_LABEL: &str = "bucket-sample";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template must contain the {{bucket}} placeholder: {0}")]
    MissingPlaceholder(String),
    #[error("template does not render a valid url: {0}")]
    InvalidUrl(String),
    #[error("{{bucket}} must be the first host label of the template: {0}")]
    NotHostLabel(String),
}

/// Probe URL pattern with a `{bucket}` placeholder in the first host label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTemplate {
    pattern: String,
}

impl TargetTemplate {
    pub fn new(pattern: impl Into<String>) -> Result<Self, TemplateError> {
        let pattern = pattern.into();
        if !pattern.contains(BUCKET_PLACEHOLDER) {
            return Err(TemplateError::MissingPlaceholder(pattern));
        }

        let sample = pattern.replace(BUCKET_PLACEHOLDER, SAMPLE_LABEL);
        let parsed = Url::parse(&sample)
            .map_err(|err| TemplateError::InvalidUrl(format!("{pattern}: {err}")))?;
        let first_label = parsed
            .host_str()
            .and_then(|host| host.split('.').next())
            .unwrap_or_default();
        if first_label != SAMPLE_LABEL {
            return Err(TemplateError::NotHostLabel(pattern));
        }

        Ok(Self { pattern })
    }

    pub fn render(&self, bucket: &str) -> String {
        self.pattern.replace(BUCKET_PLACEHOLDER, bucket)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for TargetTemplate {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

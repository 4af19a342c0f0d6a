use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("url too short")]
    UrlTooShort,
    #[error("malformed header '{value}'. Expected 'key:value' pairs separated by ','")]
    MalformedHeader { value: String },
    #[error("malformed body: {source}")]
    MalformedBody {
        #[source]
        source: serde_json::Error,
    },
    #[error("vus must be >= 1")]
    VirtualUsersZero,
    #[error("missing url (set --url or provide it in the config file)")]
    MissingUrl,
    #[error("missing duration (set --duration or provide it in the config file)")]
    MissingDuration,
    #[error("missing body (set --body or provide it in the config file)")]
    MissingBody,
}

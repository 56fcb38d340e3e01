use thiserror::Error;

/// Every failure is terminal for the current request; the pipeline never
/// retries beyond the designed search fallback query.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Transport failure, timeout, or non-2xx while talking to the job page
    /// or the model endpoint.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The model's reply was not valid JSON after fence stripping.
    #[error("unparsable model reply: {0}")]
    ModelResponse(String),

    /// The model's reply was valid JSON but did not match the expected
    /// four-field shape.
    #[error("model reply failed schema validation: {0}")]
    Schema(String),

    /// Non-2xx from the search provider. Zero results is not an error.
    #[error("search API error ({status}): {body}")]
    SearchApi { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, FinderError>;

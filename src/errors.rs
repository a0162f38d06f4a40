//! Error taxonomy for the connector crate.

/// Alias for `Result` carrying an `error_stack` report.
pub type CustomResult<T, E> = Result<T, error_stack::Report<E>>;

/// Errors raised by connector operations before, during, or after a call
/// to the payment service.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    #[error("Invalid data format for field: {field_name}")]
    InvalidDataFormat { field_name: &'static str },
    #[error("Failed to convert amount to the required type")]
    AmountConversionFailed,
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed at connector's HTTP processing step")]
    ProcessingStepFailed,
}

/// Errors raised by the HTTP transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("URL encoding of the request failed")]
    UrlEncodingFailed,
    #[error("Connector request timed out")]
    RequestTimeoutReceived,
    #[error("Unable to send request to connector: {0}")]
    RequestNotSent(String),
    #[error("Failed to read the connector response body")]
    ResponseDecodingFailed,
}

/// Errors raised while converting between amount representations.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    #[error("Unable to convert i64 to decimal")]
    I64ToDecimalConversionFailure,
}

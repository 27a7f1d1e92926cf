//! Domain types and models

pub mod credentials;
pub mod endpoint;
pub mod environment;
pub mod http;
pub mod publish;
pub mod validation;

pub use credentials::Credentials;
pub use endpoint::Endpoint;
pub use environment::Environment;
pub use http::{ApiRequest, ApiResponse, HttpMethod, ResponseBody};
pub use publish::PublishFormat;
pub use validation::{PackageUpload, SubmissionAck, ValidationJob};

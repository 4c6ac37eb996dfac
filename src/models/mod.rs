// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Activity, PrimaryLocation, ReligiousOrientation, SearchCriteria, Sex, MUNICIPALITIES, REGION};
pub use requests::{FormError, SearchForm};
pub use responses::{ErrorResponse, HealthResponse, ResultBlock, SearchOutcome};

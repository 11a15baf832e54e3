use thiserror::Error;

/// Problems found while loading the region catalog. These are configuration
/// faults and are reported once, at start-up.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Catalog JSON could not be parsed: {message}")]
    Parse { message: String },

    #[error("Catalog contains no regions")]
    Empty,

    #[error("Catalog entry has a blank {kind} name")]
    BlankName { kind: &'static str },

    #[error("Catalog {kind} name contains the reserved separator ';': {name}")]
    ReservedSeparator { kind: &'static str, name: String },

    #[error("Catalog lists {kind} {name} more than once")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Region {region} has no locations")]
    RegionWithoutLocations { region: String },

    #[error("Location {region};{location} has no schemes")]
    LocationWithoutSchemes { region: String, location: String },

    #[error("Location {region};{location} lists scheme {scheme} more than once")]
    DuplicateScheme {
        region: String,
        location: String,
        scheme: String,
    },

    #[error("Catalog shape error at {path}: expected {expected}")]
    Shape { path: String, expected: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreferenceError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Malformed location value: {value}")]
    MalformedLocationValue { value: String },

    #[error("Preselected region is not in the catalog: {region}")]
    UnknownRegion { region: String },

    #[error("Preselected location is not in the catalog: {region};{location}")]
    UnknownLocation { region: String, location: String },

    #[error("Preselected location {location} given without a region")]
    LocationWithoutRegion { location: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Initial selection could not be parsed: {message}")]
    InitialSelection { message: String },
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;

impl PreferenceError {
    /// Get error severity for logging purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PreferenceError::Catalog(_) => ErrorSeverity::Critical,
            PreferenceError::Configuration { .. } => ErrorSeverity::Medium,
            PreferenceError::UnknownRegion { .. }
            | PreferenceError::UnknownLocation { .. }
            | PreferenceError::LocationWithoutRegion { .. }
            | PreferenceError::InitialSelection { .. } => ErrorSeverity::High,
            PreferenceError::MalformedLocationValue { .. } => ErrorSeverity::Low,
        }
    }

    /// Whether the page can still offer a usable (empty) selector after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PreferenceError::Catalog(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

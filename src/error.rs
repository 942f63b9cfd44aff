use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the resolution pipeline. None of these are retried by
/// the library itself; they propagate unmodified to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// A lookup service answered with a failure status or a body that is not
    /// the expected JSON document.
    #[error("ugyldig svar fra {service}: {reason}")]
    Upstream {
        service: &'static str,
        reason: String,
    },

    /// Address search returned zero candidates. Distinct from [`Error::Upstream`]
    /// so callers can present a misspelt address differently from a transport
    /// failure.
    #[error("fant ikke eiendom for adresse: {0}")]
    AddressNotFound(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
}

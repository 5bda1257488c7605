use serde::Serialize;
use thiserror::Error;

/// Failure raised while discovering the public IP or talking to the update
/// endpoint. Callers of [`crate::ddns::perform_update`] never see it: it is
/// folded into one of the [`ErrorKind`] messages.
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("malformed XML response: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to read response: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    XmlParse,
    Network,
    Unknown,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::XmlParse => "Update failed (XML parse error)",
            ErrorKind::Network => "Update failed (network error)",
            ErrorKind::Unknown => "Update failed (unknown error)",
        }
    }
}

impl UpdateError {
    /// Classifies the error. XML problems win over network problems, which
    /// win over everything else; an opaque error is classified by walking its
    /// source chain in that same order.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UpdateError::Xml(_) => ErrorKind::XmlParse,
            UpdateError::Network(_) | UpdateError::Io(_) => ErrorKind::Network,
            UpdateError::Other(err) => {
                if err.chain().any(|e| e.is::<roxmltree::Error>()) {
                    ErrorKind::XmlParse
                } else if err
                    .chain()
                    .any(|e| e.is::<reqwest::Error>() || e.is::<std::io::Error>())
                {
                    ErrorKind::Network
                } else {
                    ErrorKind::Unknown
                }
            }
        }
    }
}

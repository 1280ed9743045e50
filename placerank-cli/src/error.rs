//! Error types emitted by the placerank CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use placerank_core::AttributeSetError;
use placerank_scorer::{ConfigError, RankingError};
use thiserror::Error;

/// Errors emitted by the placerank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The supplied attribute names do not form a usable set.
    #[error("invalid attribute list: {0}")]
    InvalidAttributes(#[source] AttributeSetError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the rank request file failed.
    #[error("failed to open rank request at {path:?}: {source}")]
    OpenRankRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Rank request JSON could not be decoded.
    #[error("failed to parse rank request JSON at {path:?}: {source}")]
    ParseRankRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The ranking configuration was rejected.
    #[error("invalid ranking configuration: {0}")]
    BuildEngine(#[from] ConfigError),
    /// The engine rejected the request.
    #[error("failed to rank {path:?}: {source}")]
    Rank {
        /// Request path.
        path: Utf8PathBuf,
        /// Ranking failure.
        #[source]
        source: RankingError,
    },
    /// Serialising the ranking failed.
    #[error("failed to serialise ranking: {0}")]
    SerialiseRanking(#[source] serde_json::Error),
    /// Writing the ranking to the requested output file failed.
    #[error("failed to write ranking to {path:?}: {source}")]
    WriteRankingFile {
        /// Output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

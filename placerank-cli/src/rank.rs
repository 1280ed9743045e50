//! Rank command implementation for the placerank CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placerank_core::AttributeSet;
use placerank_fs::{open_utf8_file, write_utf8_file};
use placerank_scorer::{
    KeywordAttributeScorer, LexiconSentimentScorer, RankRequest, Ranking, RankingConfig,
    RankingEngine,
};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_ATTRIBUTE, ARG_MAX_DISTANCE_KM, ARG_OUTPUT, ARG_PRETTY, ARG_RANK_REQUEST, CliError,
    ENV_RANK_REQUEST,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the places in a JSON-encoded RankRequest using the \
                 keyword attribute scorer and the lexicon sentiment scorer. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank places for a user"
)]
#[ortho_config(prefix = "PLACERANK")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing a RankRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Distance in kilometres at which proximity reaches zero.
    #[arg(long = ARG_MAX_DISTANCE_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) max_distance_km: Option<f64>,
    /// Attribute to score against; repeat for several. Defaults to the
    /// built-in catalogue.
    #[arg(long = ARG_ATTRIBUTE, value_name = "name")]
    #[serde(default)]
    pub(crate) attributes: Vec<String>,
    /// Write the ranking to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Pretty-print the JSON output.
    #[arg(long = ARG_PRETTY)]
    #[serde(default)]
    pub(crate) pretty: bool,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Cutoff overriding the request's own value.
    pub(crate) max_distance_km: Option<f64>,
    /// Attributes scored and weighted.
    pub(crate) attributes: AttributeSet,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Pretty-print the JSON output.
    pub(crate) pretty: bool,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_RANK_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match placerank_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_REQUEST,
            env: ENV_RANK_REQUEST,
        })?;
        let attributes = if args.attributes.is_empty() {
            AttributeSet::catalogue()
        } else {
            AttributeSet::new(args.attributes).map_err(CliError::InvalidAttributes)?
        };
        Ok(Self {
            request_path,
            max_distance_km: args.max_distance_km,
            attributes,
            output: args.output,
            pretty: args.pretty,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let ranking = execute_rank(&config)?;
    let payload = if config.pretty {
        serde_json::to_string_pretty(&ranking)
    } else {
        serde_json::to_string(&ranking)
    }
    .map_err(CliError::SerialiseRanking)?;
    match &config.output {
        Some(path) => write_utf8_file(path, &format!("{payload}\n")).map_err(|source| {
            CliError::WriteRankingFile {
                path: path.clone(),
                source,
            }
        }),
        None => write_payload(writer, &payload),
    }
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_rank(config: &RankConfig) -> Result<Ranking, CliError> {
    let mut request = load_rank_request(&config.request_path)?;
    if let Some(km) = config.max_distance_km {
        request.max_distance_km = Some(km);
    }
    let engine = RankingEngine::new(
        RankingConfig::new(config.attributes.clone()),
        KeywordAttributeScorer::new(&config.attributes),
        LexiconSentimentScorer::default(),
    )?;
    let ranking = engine.rank(&request).map_err(|source| CliError::Rank {
        path: config.request_path.clone(),
        source,
    })?;
    log::info!(
        "ranked {} places from {}",
        ranking.places.len(),
        config.request_path
    );
    Ok(ranking)
}

/// Loads a JSON-encoded [`RankRequest`] from disk.
pub(super) fn load_rank_request(path: &Utf8Path) -> Result<RankRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRankRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRankRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}

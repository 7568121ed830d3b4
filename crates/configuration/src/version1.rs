//! Version 1 of the on-disk configuration format.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use query_engine_metadata::metadata;

use crate::error::ParseConfigurationError;

const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";

/// Initial configuration as written on disk, just enough to elaborate
/// a full runtime 'Configuration'.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ParsedConfiguration {
    /// Which version of the configuration format are we using.
    pub version: u32,
    #[serde(default)]
    pub metadata: metadata::Metadata,
}

impl ParsedConfiguration {
    pub fn initial() -> Self {
        ParsedConfiguration::empty()
    }

    pub fn empty() -> Self {
        Self {
            version: CURRENT_VERSION,
            metadata: metadata::Metadata::empty(),
        }
    }
}

/// Read and parse the configuration file from a directory.
pub fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_text = std::fs::read_to_string(&configuration_file).map_err(|_| {
        ParseConfigurationError::CouldNotFindConfigurationFile(configuration_file.clone())
    })?;

    let parsed: ParsedConfiguration =
        serde_json::from_str(&configuration_text).map_err(|error| {
            ParseConfigurationError::ParseError {
                file_path: configuration_file.clone(),
                error,
            }
        })?;

    if parsed.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion(parsed.version));
    }

    tracing::info!(
        file = %configuration_file.display(),
        collections = parsed.metadata.collections.0.len(),
        "parsed configuration"
    );

    Ok(parsed)
}

/// Write a configuration file to a directory.
pub fn write_parsed_configuration(
    parsed_config: &ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), ParseConfigurationError> {
    let configuration_file = out_dir.as_ref().join(CONFIGURATION_FILENAME);
    let pretty = serde_json::to_string_pretty(parsed_config).map_err(|error| {
        ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            error,
        }
    })?;
    std::fs::write(&configuration_file, pretty)?;
    Ok(())
}

//! Configuration for the adapter.

use query_engine_metadata::metadata;

use crate::version1::ParsedConfiguration;

/// The 'Configuration' type collects all the information necessary to
/// serve queries at runtime.
///
/// 'ParsedConfiguration' deals with the concrete serialized format, and
/// each version is responsible for interpreting itself into the current
/// 'Configuration'. Values of this type are produced from a
/// 'ParsedConfiguration' using 'make_runtime_configuration'.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
}

/// Take a parsed configuration and elaborate the runtime configuration
/// the translation layer is handed.
pub fn make_runtime_configuration(parsed_config: ParsedConfiguration) -> Configuration {
    Configuration {
        metadata: parsed_config.metadata,
    }
}

use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to encode a guild ID list for storage.
    #[error("Failed to encode guild ID list as JSON: {source}")]
    EncodeGuildIds {
        #[source]
        source: serde_json::Error,
    },

    /// Failure to decode a stored guild ID list.
    ///
    /// The `guild_ids` column should always hold a JSON array of strings;
    /// anything else means the row was written outside the repository.
    #[error("Failed to decode stored guild ID list: {source}")]
    DecodeGuildIds {
        #[source]
        source: serde_json::Error,
    },
}

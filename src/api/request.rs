//! Request types for the solver API.

use serde::{Deserialize, Serialize};

/// Query parameters of `GET /solution`.
///
/// A missing parameter is treated as an empty equation, which then fails to
/// parse like any other malformed input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolutionQuery {
    /// The first equation, e.g. `2x+3y=12`.
    #[serde(default)]
    pub equation1: String,
    /// The second equation, e.g. `x-y=1`.
    #[serde(default)]
    pub equation2: String,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for nearby recommendations
///
/// `top_n` and `radius` are optional; the handler fills them from the
/// configured defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    pub place: String,
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub radius: Option<f64>,
}

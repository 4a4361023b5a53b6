use serde::{Deserialize, Serialize};

use crate::shared_prediction_game::UserSummary;

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub referral_code: Option<String>,
}

/// Referral summary counters. The network tree itself is not fetched.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlmStats {
    #[serde(default)]
    pub direct_referrals: u32,
    #[serde(default)]
    pub team_size: u32,
    #[serde(default)]
    pub total_earnings: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stats_tolerate_missing_fields() {
        let stats: MlmStats = serde_json::from_value(json!({ "teamSize": 12 })).unwrap();
        assert_eq!(stats.team_size, 12);
        assert_eq!(stats.direct_referrals, 0);
    }
}

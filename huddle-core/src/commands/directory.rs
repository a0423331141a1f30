// Directory Commands

use serde::{Deserialize, Serialize};

use crate::infrastructure::AppState;
use crate::modules::directory::{CounterpartDirectory, CounterpartId, CounterpartProfile};
use crate::shared::{AppError, AppResult, CounterpartView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub counterpart_id: String,
}

/// 联系人资料卡（花名册条目 + 扩展资料）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub counterpart: CounterpartView,
    #[serde(flatten)]
    pub profile: CounterpartProfile,
}

pub async fn directory_list(state: &AppState) -> AppResult<Vec<CounterpartView>> {
    let roster = state.directory.list().await?;
    Ok(roster.iter().map(CounterpartView::from).collect())
}

pub async fn directory_get_profile(
    state: &AppState,
    request: ProfileRequest,
) -> AppResult<ProfileResponse> {
    let id = CounterpartId::from(request.counterpart_id);
    let counterpart = state
        .directory
        .get(&id)
        .await?
        .ok_or_else(|| AppError::CounterpartNotFound(id.to_string()))?;
    let profile = state.directory.profile(&id).await?.unwrap_or_default();

    Ok(ProfileResponse {
        counterpart: CounterpartView::from(&counterpart),
        profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_profile_lookup() {
        let state = AppState::in_memory().await.unwrap();

        let roster = directory_list(&state).await.unwrap();
        assert_eq!(roster.len(), 5);

        let profile = directory_get_profile(
            &state,
            ProfileRequest {
                counterpart_id: "4".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(profile.profile.title, "Software Developer");

        let missing = directory_get_profile(
            &state,
            ProfileRequest {
                counterpart_id: "99".to_string(),
            },
        )
        .await;
        assert!(matches!(missing, Err(AppError::CounterpartNotFound(_))));
    }
}

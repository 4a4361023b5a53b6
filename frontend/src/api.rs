//! REST client for the game and wallet endpoints.
//!
//! Every authenticated call checks the session for a token first and hands
//! authentication failures back to the session, which logs the user out.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::constants::{LOGIN_ENDPOINT, MLM_STATS_ENDPOINT, PROFILE_ENDPOINT, WALLET_ENDPOINT};
use shared::error::{ApiResponse, ClientError};
use shared::session::{check_auth, require_token};
use shared::shared_account::{LoginRequest, LoginResponse, MlmStats, UserProfile};
use shared::shared_prediction_game::{
    GameKind, GameRoom, JoinReceipt, JoinRoomRequest, RoomDetail, WalletBalance,
};

use crate::config::api_url;
use crate::session::SessionHandle;

fn network(err: gloo_net::Error) -> ClientError {
    log::error!("network error: {}", err);
    ClientError::Network(err.to_string())
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ClientError> {
    let status = response.status();
    if !response.ok() {
        log::warn!("{} answered {}", response.url(), status);
        if !matches!(status, 401 | 403 | 429) {
            // Error bodies usually carry a message worth showing verbatim.
            if let Ok(body) = response.json::<ApiResponse<serde_json::Value>>().await {
                if let Some(message) = body.message.filter(|m| !m.trim().is_empty()) {
                    return Err(ClientError::Rejected { message });
                }
            }
        }
        return Err(ClientError::from_status(status));
    }

    response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|err| ClientError::Decode(err.to_string()))
}

async fn get_envelope<T: DeserializeOwned>(
    session: &SessionHandle,
    path: &str,
) -> Result<ApiResponse<T>, ClientError> {
    let token = require_token(session)?;
    let result = async {
        let response = Request::get(&api_url(path))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(network)?;
        read_envelope::<T>(response).await
    }
    .await;
    check_auth(session, result)
}

async fn post_envelope<B: Serialize, T: DeserializeOwned>(
    session: &SessionHandle,
    path: &str,
    body: &B,
) -> Result<ApiResponse<T>, ClientError> {
    let token = require_token(session)?;
    let result = async {
        let response = Request::post(&api_url(path))
            .header("Authorization", &format!("Bearer {}", token))
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_envelope::<T>(response).await
    }
    .await;
    check_auth(session, result)
}

fn game_path(kind: GameKind, rest: &str) -> String {
    format!("/{}{}", kind.slug(), rest)
}

pub async fn fetch_rooms(session: &SessionHandle, kind: GameKind) -> Result<Vec<GameRoom>, ClientError> {
    get_envelope::<Vec<GameRoom>>(session, &game_path(kind, "/rooms"))
        .await?
        .into_data_or_default()
}

pub async fn fetch_room(
    session: &SessionHandle,
    kind: GameKind,
    room_id: &str,
) -> Result<RoomDetail, ClientError> {
    get_envelope::<RoomDetail>(session, &game_path(kind, &format!("/room/{}", room_id)))
        .await?
        .into_data()
}

pub async fn join_room(
    session: &SessionHandle,
    kind: GameKind,
    request: &JoinRoomRequest,
) -> Result<JoinReceipt, ClientError> {
    post_envelope::<_, JoinReceipt>(session, &game_path(kind, "/room/join"), request)
        .await?
        .into_data_or_default()
}

pub async fn fetch_wallet(session: &SessionHandle) -> Result<WalletBalance, ClientError> {
    get_envelope::<WalletBalance>(session, WALLET_ENDPOINT)
        .await?
        .into_data()
}

pub async fn fetch_profile(session: &SessionHandle) -> Result<UserProfile, ClientError> {
    get_envelope::<UserProfile>(session, PROFILE_ENDPOINT)
        .await?
        .into_data()
}

pub async fn fetch_mlm_stats(session: &SessionHandle) -> Result<MlmStats, ClientError> {
    get_envelope::<MlmStats>(session, MLM_STATS_ENDPOINT)
        .await?
        .into_data_or_default()
}

/// The only unauthenticated call.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ClientError> {
    let response = Request::post(&api_url(LOGIN_ENDPOINT))
        .json(request)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    if response.status() == 401 {
        return Err(ClientError::Rejected {
            message: "Invalid email or password".to_string(),
        });
    }
    read_envelope::<LoginResponse>(response).await?.into_data()
}


use std::sync::Arc;

use auth::TokenPair;
use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RefreshTokenRequest;
use crate::proto::RefreshTokenResponse;

pub async fn refresh<S: AuthServicePort>(
    service: Arc<S>,
    request: RefreshTokenRequest,
) -> Result<RefreshTokenResponse, Status> {
    let tokens = service.refresh(&request.refresh_token).await?;

    Ok(tokens.into())
}

impl From<TokenPair> for RefreshTokenResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

use std::sync::Arc;

use auth::TokenPair;
use tonic::Status;

use crate::domain::auth::models::AuthenticateCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::AuthenticateRequest;
use crate::proto::AuthenticateResponse;

pub async fn authenticate<S: AuthServicePort>(
    service: Arc<S>,
    request: AuthenticateRequest,
) -> Result<AuthenticateResponse, Status> {
    let command = AuthenticateCommand::new(request.username, request.password);

    let tokens = service.authenticate(command).await?;

    Ok(tokens.into())
}

impl From<TokenPair> for AuthenticateResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

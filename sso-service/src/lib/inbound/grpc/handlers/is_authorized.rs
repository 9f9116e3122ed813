use std::sync::Arc;

use crate::domain::auth::ports::AuthServicePort;
use crate::proto::IsAuthorizedRequest;
use crate::proto::IsAuthorizedResponse;

/// Never fails: every validation problem reads as `is_authorized = false`.
pub async fn is_authorized<S: AuthServicePort>(
    service: Arc<S>,
    request: IsAuthorizedRequest,
) -> IsAuthorizedResponse {
    IsAuthorizedResponse {
        is_authorized: service.is_authorized(&request.token).await,
    }
}

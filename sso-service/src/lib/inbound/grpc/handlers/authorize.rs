use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::proto::AuthorizeRequest;
use crate::proto::AuthorizeResponse;

pub async fn authorize<S: AuthServicePort>(
    service: Arc<S>,
    request: AuthorizeRequest,
) -> Result<AuthorizeResponse, Status> {
    let user_id = service.authorize(&request.token).await?;

    Ok(AuthorizeResponse { user_id: user_id.0 })
}

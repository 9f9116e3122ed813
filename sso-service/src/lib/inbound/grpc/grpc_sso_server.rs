use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::authenticate;
use super::handlers::authorize;
use super::handlers::is_authorized;
use super::handlers::refresh;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::sso_service_server::SsoService as SsoServiceProto;
use crate::proto::AuthenticateRequest;
use crate::proto::AuthenticateResponse;
use crate::proto::AuthorizeRequest;
use crate::proto::AuthorizeResponse;
use crate::proto::IsAuthorizedRequest;
use crate::proto::IsAuthorizedResponse;
use crate::proto::RefreshTokenRequest;
use crate::proto::RefreshTokenResponse;

pub struct SsoGrpcService<S: AuthServicePort> {
    service: Arc<S>,
}

impl<S: AuthServicePort> SsoGrpcService<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<S: AuthServicePort> SsoServiceProto for SsoGrpcService<S> {
    async fn authenticate(
        &self,
        request: Request<AuthenticateRequest>,
    ) -> Result<Response<AuthenticateResponse>, Status> {
        let response =
            authenticate::authenticate(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn authorize(
        &self,
        request: Request<AuthorizeRequest>,
    ) -> Result<Response<AuthorizeResponse>, Status> {
        let response = authorize::authorize(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn refresh(
        &self,
        request: Request<RefreshTokenRequest>,
    ) -> Result<Response<RefreshTokenResponse>, Status> {
        let response = refresh::refresh(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn is_authorized(
        &self,
        request: Request<IsAuthorizedRequest>,
    ) -> Result<Response<IsAuthorizedResponse>, Status> {
        let response =
            is_authorized::is_authorized(self.service.clone(), request.into_inner()).await;
        Ok(Response::new(response))
    }
}

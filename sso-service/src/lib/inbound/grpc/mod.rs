pub mod grpc_sso_server;
pub mod handlers;

pub use grpc_sso_server::SsoGrpcService;

pub mod api_client_factory;
pub mod pg_user_resolver;

pub mod basic_auth;
pub mod request_id;

pub mod audit_action;
pub mod audit_event;
pub mod email;
pub mod identity;
pub mod request_context;
pub mod user_settings;

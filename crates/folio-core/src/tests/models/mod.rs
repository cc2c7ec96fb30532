mod audit_action;
mod email;
mod identity;

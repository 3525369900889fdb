pub mod build_info;
pub mod build_state;
pub mod build_status;
pub mod build_type;
pub mod project;
pub mod queued_build;

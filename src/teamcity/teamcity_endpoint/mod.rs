pub mod build_info;
pub mod build_queue;
pub mod build_types;
pub mod projects;

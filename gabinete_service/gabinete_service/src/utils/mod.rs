pub mod app_state;
pub mod env_setting_center;
pub mod response;

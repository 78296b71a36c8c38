pub mod demo_form;
pub mod home;
pub mod schema_form;

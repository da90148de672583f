pub(crate) mod config;
pub(crate) mod display;
pub(crate) mod frame;
pub(crate) mod layout;

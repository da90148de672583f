pub(crate) mod alphabet;
pub(crate) mod scheduler;
pub(crate) mod slot;
pub(crate) mod surface;
pub(crate) mod timeline;

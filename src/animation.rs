pub(crate) mod ease;
pub(crate) mod rng;
pub(crate) mod ticker;

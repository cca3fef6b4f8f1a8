pub(crate) mod burst;
pub(crate) mod starfield;
pub(crate) mod supernova;

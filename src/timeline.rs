pub(crate) mod controller;
pub(crate) mod lock;
pub(crate) mod phase;
pub(crate) mod recoil;

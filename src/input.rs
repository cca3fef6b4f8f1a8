pub(crate) mod clock;
pub(crate) mod script;
pub(crate) mod scroll;

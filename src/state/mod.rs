pub(crate) mod favorites;
pub(crate) mod overlay;
pub(crate) mod store;

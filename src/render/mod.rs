pub(crate) mod composite;
pub(crate) mod decode;
pub(crate) mod loader;
pub(crate) mod renderer;
pub(crate) mod text;

pub(crate) mod manifest;
pub(crate) mod source;
pub(crate) mod view;

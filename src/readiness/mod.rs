pub(crate) mod wait;

pub(crate) mod butterfly;
pub(crate) mod outline;
pub(crate) mod sampler;

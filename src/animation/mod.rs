pub(crate) mod animator;
pub(crate) mod clock;
pub(crate) mod ease;
pub(crate) mod particles;

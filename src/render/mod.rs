pub(crate) mod camera;
pub(crate) mod cpu;
pub(crate) mod frame_loop;
pub(crate) mod surface;

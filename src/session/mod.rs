pub(crate) mod landing_session;

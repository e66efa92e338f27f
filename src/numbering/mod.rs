pub(crate) mod code;
pub(crate) mod scene;
pub(crate) mod shot;

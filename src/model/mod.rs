pub(crate) mod file;
pub(crate) mod project;
pub(crate) mod sheet;
pub(crate) mod status;

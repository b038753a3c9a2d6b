//! Admin

pub(crate) mod items;

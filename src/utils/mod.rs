// src/utils/mod.rs
mod reference;

pub(crate) use reference::*;

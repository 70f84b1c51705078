//! Movement domain: system modules for input sampling.

pub(crate) mod input;

pub(crate) use input::read_input;

//! `wondergray` converts RGB images to grayscale using the luminosity method.
//! This interface is unstable and subject to change at any time.
//! Please use this documentation only if you are developing `wondergray`.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
mod filename_utils;
pub mod help;
pub mod image;
pub mod operations;

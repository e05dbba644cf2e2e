//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches web-sys directly lives here, behind the `csr`
//! feature, so components and state models stay free of DOM plumbing.

pub mod anchors;
pub mod lazy_images;
#[cfg(feature = "csr")]
pub mod listener;
pub mod markdown;
pub mod scroll;
pub mod storage;
pub mod theme;

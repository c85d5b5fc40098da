//! The views module contains Maud templates that correspond to entire pages.
//! That is, each one corresponds to a route in the main router.
//!
//! Views are constructed from partials, which are contained in the components
//! module.

pub(crate) mod demo;
pub(crate) mod preview;

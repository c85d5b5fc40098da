//! The components module contains Maud "partials" that are not complete pages
//! in themselves - complete pages are stored in the views folder.
//!
//! The highest-level component is 'page', which provides the common header and
//! the tabs for all views.

pub(crate) mod page;
pub(crate) mod tabs;

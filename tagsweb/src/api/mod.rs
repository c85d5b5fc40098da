//! Endpoints that return fragments rather than whole pages, for hosts that
//! want to fetch server-rendered tags and splice them into their own markup.

pub(crate) mod handlers;

//! Day-Off Handlers

pub(crate) mod check;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod search;

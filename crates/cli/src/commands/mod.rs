pub(crate) mod browse;
pub(crate) mod catalog;
pub(crate) mod history;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod show;

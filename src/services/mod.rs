pub mod cluster_service;
pub mod event_catalog;
pub mod event_matcher;
pub mod recommendation_service;

#[cfg(test)]
pub(crate) mod test_support;

pub(crate) mod chain;
pub(crate) mod combine;
pub(crate) mod diff_mappings;

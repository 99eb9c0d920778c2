//! Generated lookup types. Their declarations live in `schema/targets.rs`.

include!(concat!(env!("OUT_DIR"), "/test_elements_class_lookup.rs"));
include!(concat!(env!("OUT_DIR"), "/test_elements_class_constants.rs"));

include!(concat!(env!("OUT_DIR"), "/described_elements_lookup.rs"));
include!(concat!(env!("OUT_DIR"), "/described_elements_constants.rs"));

include!(concat!(env!("OUT_DIR"), "/status_record_lookup.rs"));
include!(concat!(env!("OUT_DIR"), "/status_record_constants.rs"));

include!(concat!(env!("OUT_DIR"), "/priority_class_lookup.rs"));
include!(concat!(env!("OUT_DIR"), "/priority_class_constants.rs"));

/// Crate-visible accessor for the priority lookup, used by the tests.
#[must_use]
pub fn priority_by_repr(repr: i64) -> (crate::elements::priority::Priority, bool) {
    let item = PriorityClass::from_repr(repr);

    (*item.value(), item.is_empty())
}

/// Name of the empty priority.
#[must_use]
pub fn priority_empty_name() -> &'static str {
    PriorityClass::empty().name()
}

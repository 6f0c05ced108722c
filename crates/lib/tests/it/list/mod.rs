//! OrderedList integration tests
//!
//! Tests are grouped by operation family: construction and accessors,
//! single-element mutation, bulk mutation, search, ordering and views, and
//! iteration. `model_tests` cross-checks random operation sequences against
//! a plain `Vec`.

mod mutation_tests;
mod ordering_tests;

//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{AssignContext, assign_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/transform_assign.feature",
    fixtures = [assign_context: AssignContext]
);

//! `rstest-bdd` behavioural tests for `r_assign`.
//!
//! Step implementations live in [`steps`], and [`scenarios`] binds the
//! feature files to the shared fixtures.

mod fixtures;
mod scenarios;
mod steps;

//! Shared test harness modules for the placerank CLI.

use super::*;

mod helpers;

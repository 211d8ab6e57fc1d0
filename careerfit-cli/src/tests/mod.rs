//! Shared test harness modules for the Careerfit CLI.

use super::*;

mod check_unit;
mod helpers;
mod setup_unit;

//! Service test support: one migrated database per test and a clock the
//! test controls.

mod clock;

pub(crate) use clock::kitchen_time;
pub(crate) use context::TestContext;

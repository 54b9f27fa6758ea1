//! Extension traits

mod day;
mod depot;
mod result;

pub(crate) use day::DayExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;

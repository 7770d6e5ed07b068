//! BPS data harvester: fixed dataset catalog, Indonesia province boundary
//! download, and simulated per-province statistic tables as CSV.
//! Output layout: data/bps/datasets.json, data/bps/<id>_<name>.csv,
//! data/indonesia.geojson.

pub mod boundary;
pub mod catalog;
pub mod cli;
pub mod pipeline;
pub mod provinces;
pub mod rng;
pub mod tables;
pub mod validate;

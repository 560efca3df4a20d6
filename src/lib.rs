#[macro_use]
pub mod macros;

pub mod api;
pub mod chart;
pub mod chrono_util;
pub mod fs_json_util;
pub mod layout;
pub mod opts;
pub mod parser;
pub mod pipeline;
pub mod reshape;
pub mod schema;
pub mod season;

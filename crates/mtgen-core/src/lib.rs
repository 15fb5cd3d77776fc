pub mod config;
pub mod error;
pub mod io;
pub mod manifest;
pub mod microtrigger;
pub mod naming;
pub mod output;
pub mod paths;
pub mod permission;
pub mod permission_set;
pub mod pipeline;
pub mod row;
pub mod xml;

pub use config::GenConfig;
pub use error::{GenError, Result};
pub use pipeline::{generate, RunSummary};
pub use row::{read_rows, InputRow};

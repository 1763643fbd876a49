//! Pokemon GO species subset builder.
//!
//! Turns a Game Master snapshot plus positional English/Korean name lists
//! into two lookup files: a `"<dex>__<FORM>"` keyed species map and a
//! display-name index pointing into it.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod fields;
pub mod forms;
pub mod ids;
pub mod mapping;
pub mod models;
pub mod name_index;
pub mod output;
pub mod pipeline;

pub use error::{Error, Result};
pub use forms::FormRules;
pub use mapping::FormSelection;
pub use models::{MappingEntry, NameIndex, NameIndexEntry, SpeciesMap, StatTriple};
pub use pipeline::{run_pipeline, Outputs, PipelineOptions, Sources};

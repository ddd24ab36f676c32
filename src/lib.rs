pub mod chars;
pub mod config;
pub mod convert;
pub mod index;
pub mod output;
pub mod pipeline;

pub use chars::{CharsError, TargetChars};
pub use config::{Config, DEFAULT_OUTPUT};
pub use convert::{ConvertError, ScriptConverter, simplified_converter};
pub use index::{CharIndex, DEFAULT_TOP_N, IndexBuilder, IndexError};
pub use output::{OutputError, to_json, write_index};
pub use pipeline::{RunError, RunSummary, run};

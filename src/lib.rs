//! Template Builder Library
//!
//! This library expands command scripts into text. Commands and their
//! argument choices come from a declarative definition file; each script line
//! names a command and picks arguments positionally, and the engine
//! substitutes the chosen values into the command's template.
//!
//! ```no_run
//! use std::path::Path;
//! use template_builder::{convert, Definitions};
//!
//! let definitions = Definitions::load(Path::new("Templates/Template.toml"))?;
//! let output = convert("echo hi\n", &definitions);
//! # Ok::<(), template_builder::definitions::LoadError>(())
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod definitions;
pub mod editor;
pub mod engine;
pub mod session;

pub use config::Config;
pub use definitions::{check, Definitions, LoadError};
pub use editor::{RefreshPolicy, ScriptEditor};
pub use engine::{convert, convert_with, expand, resolve, Conversion, ConvertOptions};
pub use session::{SelectionSession, SessionStart, SessionStep};

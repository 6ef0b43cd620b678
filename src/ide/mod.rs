//! IDE features — High-level APIs for editor requests.
//!
//! Each function corresponds to one navigation request. They sit on top of
//! the dialect (to find the symbol under the cursor) and the symbol index (to
//! resolve it).
//!
//! ## Usage
//!
//! ```ignore
//! use ffinav::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new(dialect);
//! host.set_file_content("src/sim/sim_object.hh", "class SimObject {");
//! host.set_file_content("configs/se.py", "obj = SimObject()");
//!
//! let result = host.goto_definition("configs/se.py", Position::new(0, 8));
//! ```

mod analysis;
mod goto;
mod references;

pub use analysis::AnalysisHost;
pub use goto::{GotoResult, goto_definition};
pub use references::{ReferenceResult, find_references};

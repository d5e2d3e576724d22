//! Compare RPM package version strings.
//!
//! The core is `vercmp()` and its C-convention twin `rpmvercmp()`,
//! rpm's segment-based comparison over plain version strings. On top
//! of it sit `Version`, a version string with a total order, and
//! `Evr`, the full `epoch:version-release` identity of a package.

mod error;
mod evr;
mod vercmp;

pub use error::{Error, Result};
pub use evr::{Evr, Version};
pub use vercmp::{rpmvercmp, vercmp};

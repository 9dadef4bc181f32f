//! Output file naming

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension appended to the full input name
pub const OUTPUT_SUFFIX: &str = ".c";

/// Derive the output path: `./` + input path as given + `.c`.
///
/// The suffix is appended, not swapped in: `foo.lsp` becomes `./foo.lsp.c`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = OsString::from("./");
    name.push(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

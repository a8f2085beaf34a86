//! Source file discovery.

use std::path::Path;

/// Names of entries in `dir` ending with `suffix`, sorted.
///
/// Only the top level is listed. Names that are not valid UTF-8 are skipped.
pub fn find_sources(dir: &Path, suffix: &str) -> crate::Result<Vec<String>> {
    let mut sources = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::warn!("skipping non UTF-8 entry {:?}", name);
            continue;
        };
        if name.ends_with(suffix) {
            sources.push(name.to_string());
        }
    }

    sources.sort();
    Ok(sources)
}

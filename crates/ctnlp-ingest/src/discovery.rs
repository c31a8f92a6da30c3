//! Trial file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists every `.xml` file under `dir`, recursing into subdirectories.
///
/// The extension check is case-insensitive. Paths are sorted so repeated
/// runs see files in the same order.
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_xml_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_xml_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let read_error = |e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    };

    for entry_result in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry_result.map_err(read_error)?.path();

        if path.is_dir() {
            collect_xml_files(&path, files)?;
        } else if path.is_file() && has_xml_extension(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

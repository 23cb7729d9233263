use std::{
    fs::{self, File},
    io,
    path::Path,
};

use tracing::{info, warn};

use crate::error::{Error, Result};

/// Fetches `file` from the first mirror that answers and stores it at `dest`.
///
/// The payload is streamed to a `.part` sibling first so an interrupted
/// transfer never leaves a truncated file under the final name.
pub(crate) fn fetch(mirrors: &[&str], file: &str, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    let partial = dest.with_extension("part");

    let mut last = None;
    for mirror in mirrors {
        let url = format!("{mirror}{file}");
        info!(%url, dest = %dest.display(), "downloading");
        match ureq::get(&url).call() {
            Ok(response) => {
                let mut output = File::create(&partial)?;
                io::copy(&mut response.into_reader(), &mut output)?;
                output.sync_all()?;
                fs::rename(&partial, dest)?;
                return Ok(());
            }
            Err(e) => {
                warn!(%url, error = %e, "mirror failed");
                last = Some(Error::Download {
                    url,
                    message: e.to_string(),
                });
            }
        }
    }

    Err(last.unwrap_or_else(|| Error::Download {
        url: file.to_owned(),
        message: "no mirrors configured".to_owned(),
    }))
}

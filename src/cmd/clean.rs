use crate::config::Config;
use crate::error::{Error, Result};
use std::io::ErrorKind;
use tokio::fs;

/// Removes the build output; a missing output directory is already clean.
pub async fn clean(config: &Config) -> Result<()> {
    let out_dir = config.build.out_dir.as_str();

    match fs::remove_dir_all(out_dir).await {
        Ok(()) => {
            log::info!("removed {}", out_dir);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Io(e)),
    }
}

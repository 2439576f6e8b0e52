use crate::Config;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StartupCheckError {
    #[error("Images directory does not exist: {0}")]
    ImagesDirectoryMissing(String),

    #[error("Images directory is not readable: {0}")]
    ImagesDirectoryUnreadable(#[from] std::io::Error),
}

pub async fn perform_startup_checks(config: &Config) -> Result<(), Vec<StartupCheckError>> {
    let mut errors = Vec::new();

    info!("Performing startup checks...");

    let images_dir = &config.images.directory;
    if !images_dir.exists() {
        errors.push(StartupCheckError::ImagesDirectoryMissing(
            images_dir.display().to_string(),
        ));
    } else {
        info!("Images directory exists: {:?}", images_dir);

        match std::fs::read_dir(images_dir) {
            Ok(entries) => {
                let mut variant_count = 0usize;
                for entry in entries.flatten() {
                    let path = entry.path();
                    if let Some(ext) = path.extension().and_then(|e| e.to_str())
                        && (ext.eq_ignore_ascii_case("avif") || ext.eq_ignore_ascii_case("webp"))
                    {
                        variant_count += 1;
                    }
                }
                if variant_count == 0 {
                    warn!(
                        "No .avif or .webp variants found in {:?}; all clients will \
                         receive original files",
                        images_dir
                    );
                } else {
                    info!("Found {} pre-generated format variants", variant_count);
                }
            }
            Err(e) => {
                errors.push(StartupCheckError::ImagesDirectoryUnreadable(e));
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_yes_no, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the active log store aside, optionally compressing the copy.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<PathBuf> {
        // The source depends on the configured backend.
        let src = match cfg.store.trim().to_ascii_lowercase().as_str() {
            "sqlite" => cfg.database_path(),
            _ => cfg.log_path(),
        };
        let dest = Path::new(dest_file);

        // 1. Check the store file exists
        if !src.exists() {
            return Err(AppError::SourceMissing(src.display().to_string()));
        }

        // 2. Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 2.5 If destination file exists, ask for confirmation
        if dest.exists() {
            warning(format!("The file '{}' already exists.", dest.display()));
            if !ask_yes_no("Do you want to overwrite it?")? {
                println!("❌ Backup cancelled by user.");
                return Ok(dest.to_path_buf());
            }
            println!();
        }

        // 3. Copy the store file
        fs::copy(&src, dest)?;
        println!("✅ Backup created: {}", dest.display());

        // 4. Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup".to_string());
    zip.start_file(name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}

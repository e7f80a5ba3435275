//! Hotelgal CLI — drives a gallery session against the remote service.
//!
//! Set GALLERY_API_URL (or API_URL) to point at the backend.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use hotelgal_api_client::GalleryClient;
use hotelgal_cli::{init_tracing, parse_confirmation};
use hotelgal_core::constants::{ADVISORY_MAX_IMAGE_BYTES, MAX_NEW_IMAGES};
use hotelgal_core::{PendingFile, RejectionReason};
use hotelgal_session::{GalleryController, UploadOutcome};

#[derive(Parser)]
#[command(
    name = "hotelgal",
    about = "Hotel gallery manager",
    long_about = "Hotel gallery manager.\n\nBulk uploads accept at most 20 new (non-duplicate) images per \
submission; keep each image under 500 KB (advisory, enforced server-side)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all hotels
    Hotels,
    /// List the images of one hotel
    Images {
        /// Hotel id
        hotel_id: String,
    },
    /// Upload images for one hotel (duplicates by filename are skipped)
    Upload {
        /// Hotel id
        hotel_id: String,
        /// Paths of the image files to upload
        files: Vec<PathBuf>,
    },
    /// Delete one image (asks for confirmation)
    Delete {
        /// Hotel id the image belongs to
        hotel_id: String,
        /// Image id
        image_id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn read_batch(files: &[PathBuf]) -> anyhow::Result<Vec<PendingFile>> {
    let mut batch = Vec::with_capacity(files.len());
    for path in files {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Invalid file name: {}", path.display()))?
            .to_string();
        if bytes.len() > ADVISORY_MAX_IMAGE_BYTES {
            eprintln!(
                "warning: {} is {} KB, above the advised 500 KB ceiling",
                name,
                bytes.len() / 1024
            );
        }
        batch.push(PendingFile::new(name, bytes));
    }
    Ok(batch)
}

fn ask_confirmation(prompt: &str) -> anyhow::Result<bool> {
    use std::io::Write;

    print!("{} [y/N] ", prompt);
    std::io::stdout().flush().context("Flush stdout")?;
    let mut reply = String::new();
    std::io::stdin()
        .read_line(&mut reply)
        .context("Read confirmation")?;
    Ok(parse_confirmation(&reply))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = GalleryClient::from_env().context("Failed to create API client")?;
    let (mut controller, _snapshots) = GalleryController::new(Arc::new(client));

    let cli = Cli::parse();

    match cli.command {
        Commands::Hotels => {
            controller.init().await?;
            print_json(&controller.hotels())?;
        }
        Commands::Images { hotel_id } => {
            controller.select_hotel(&hotel_id).await?;
            print_json(&controller.images(&hotel_id).unwrap_or(&[]))?;
        }
        Commands::Upload { hotel_id, files } => {
            if files.is_empty() {
                anyhow::bail!("No files given");
            }
            let batch = read_batch(&files)?;
            // Load the existing images first so dedup sees server truth.
            controller.select_hotel(&hotel_id).await?;
            controller.request_expand();
            match controller.upload_batch(batch).await? {
                UploadOutcome::Uploaded { count } => {
                    println!("Uploaded {} image(s) for hotel {}", count, hotel_id);
                    print_json(&controller.images(&hotel_id).unwrap_or(&[]))?;
                }
                UploadOutcome::Rejected(RejectionReason::AllDuplicates) => {
                    anyhow::bail!("All selected files are duplicates");
                }
                UploadOutcome::Rejected(RejectionReason::BatchTooLarge) => {
                    anyhow::bail!(
                        "You can only upload up to {} new (non-duplicate) images at once",
                        MAX_NEW_IMAGES
                    );
                }
            }
        }
        Commands::Delete {
            hotel_id,
            image_id,
            yes,
        } => {
            controller.select_hotel(&hotel_id).await?;
            if !controller.request_delete(&image_id) {
                anyhow::bail!("Image {} not found for hotel {}", image_id, hotel_id);
            }
            let confirmed =
                yes || ask_confirmation("Are you sure you want to delete this image?")?;
            if !confirmed {
                controller.cancel_delete(&image_id);
                println!("Delete cancelled");
                return Ok(());
            }
            controller.confirm_delete(&image_id).await?;
            println!("Image {} deleted", image_id);
            print_json(&controller.images(&hotel_id).unwrap_or(&[]))?;
        }
    }

    Ok(())
}

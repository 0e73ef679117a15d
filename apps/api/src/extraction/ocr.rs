//! OCR fallback for scanned PDF pages — pdftoppm + tesseract.
//!
//! Pipeline: PDF → pdftoppm (render the one page to PNG) → tesseract → text.
//! Only invoked for pages whose embedded text layer came back empty.

use std::io::Write;

use tempfile::{NamedTempFile, TempDir};
use tokio::process::Command;
use tracing::debug;

use crate::errors::AppError;

const OCR_DPI: u32 = 300;
const OCR_LANGUAGE: &str = "eng";
/// Upper bound for each external command.
const CMD_TIMEOUT_SECS: u64 = 60;

/// OCRs a single page of the given PDF.
pub async fn ocr_pdf_page(pdf_bytes: &[u8], page: u32) -> Result<String, AppError> {
    if pdf_bytes.is_empty() {
        return Err(AppError::Extraction(
            "cannot OCR empty PDF data".to_string(),
        ));
    }

    let mut tmpfile = NamedTempFile::new().map_err(|e| AppError::Internal(e.into()))?;
    tmpfile
        .write_all(pdf_bytes)
        .map_err(|e| AppError::Internal(e.into()))?;
    let pdf_path = tmpfile.path().to_string_lossy().to_string();

    let img_dir = TempDir::new().map_err(|e| AppError::Internal(e.into()))?;
    let img_prefix = img_dir.path().join("page").to_string_lossy().to_string();

    debug!(page, dpi = OCR_DPI, "Rasterizing PDF page for OCR");
    run_command(
        Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(OCR_DPI.to_string())
            .arg("-f")
            .arg(page.to_string())
            .arg("-l")
            .arg(page.to_string())
            .arg(&pdf_path)
            .arg(&img_prefix),
    )
    .await?;

    // pdftoppm names its output page-N.png; with -f/-l there is exactly one.
    let mut images: Vec<_> = std::fs::read_dir(img_dir.path())
        .map_err(|e| AppError::Internal(e.into()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("png"))
        .collect();
    images.sort();
    let image = images.into_iter().next().ok_or_else(|| {
        AppError::Extraction(format!("no image rendered for page {page}"))
    })?;

    let output_base = img_dir.path().join(format!("ocr_{page}"));
    run_command(
        Command::new("tesseract")
            .arg(&image)
            .arg(&output_base)
            .arg("-l")
            .arg(OCR_LANGUAGE),
    )
    .await?;

    let text = std::fs::read_to_string(output_base.with_extension("txt"))
        .map_err(|e| AppError::Internal(e.into()))?;
    debug!(page, chars = text.len(), "OCR complete");
    Ok(text)
}

/// Runs an external command with a timeout, failing on non-zero exit.
async fn run_command(cmd: &mut Command) -> Result<(), AppError> {
    let output = tokio::time::timeout(
        std::time::Duration::from_secs(CMD_TIMEOUT_SECS),
        cmd.output(),
    )
    .await
    .map_err(|_| {
        AppError::Extraction(format!(
            "external command timed out after {CMD_TIMEOUT_SECS}s"
        ))
    })?
    .map_err(|e| AppError::Extraction(format!("failed to execute command: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::Extraction(format!(
            "command failed (exit {}): {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ocr_rejects_empty_input() {
        let result = ocr_pdf_page(b"", 1).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}

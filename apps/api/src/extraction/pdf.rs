//! PDF text extraction.
//!
//! Pages are read in order from the embedded text layer; a page with no text
//! layer is rasterized on its own and run through OCR. Mixed documents
//! (native pages interleaved with scanned pages) still come out complete.

use lopdf::Document;
use tracing::warn;

use crate::errors::AppError;
use crate::extraction::ocr;

pub async fn extract_pdf(data: Vec<u8>) -> Result<String, AppError> {
    // lopdf parsing is CPU-bound; keep it off the request-accepting path.
    let parse_data = data.clone();
    let pages = tokio::task::spawn_blocking(move || extract_text_layers(&parse_data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))??;

    let mut outputs = Vec::with_capacity(pages.len());
    for (page_number, text) in pages {
        if !text.trim().is_empty() {
            outputs.push(text.trim().to_string());
            continue;
        }
        // No text layer on this page, likely a scan. OCR just this page.
        match ocr::ocr_pdf_page(&data, page_number).await {
            Ok(ocr_text) if !ocr_text.trim().is_empty() => {
                outputs.push(ocr_text.trim().to_string());
            }
            Ok(_) => warn!(page = page_number, "OCR produced no text for page"),
            Err(e) => warn!(page = page_number, error = %e, "OCR failed for page, skipping"),
        }
    }

    let text = outputs.join("\n");
    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "no text recoverable from PDF".to_string(),
        ));
    }
    Ok(text)
}

/// Extracts the embedded text layer of every page, in page order.
/// A page whose extraction fails contributes an empty string so the caller
/// can decide whether to OCR it.
fn extract_text_layers(data: &[u8]) -> Result<Vec<(u32, String)>, AppError> {
    let doc =
        Document::load_mem(data).map_err(|e| AppError::Extraction(format!("invalid PDF: {e}")))?;

    let mut pages = Vec::new();
    for page_number in doc.get_pages().keys() {
        let text = doc.extract_text(&[*page_number]).unwrap_or_default();
        pages.push((*page_number, text));
    }
    if pages.is_empty() {
        return Err(AppError::Extraction("PDF has no pages".to_string()));
    }
    Ok(pages)
}

//! Integration tests for proposal export.
//!
//! These tests run the export handler against the real adapters:
//! 1. The template generator renders the record
//! 2. The pulldown/docx export service converts it
//! 3. Local file storage writes it into a temporary output directory

use std::sync::Arc;

use tempfile::TempDir;

use proposal_assistant::adapters::{
    LocalExportFileStorage, PulldownExportService, TemplateProposalGenerator,
};
use proposal_assistant::application::{ExportProposalCommand, ExportProposalHandler};
use proposal_assistant::domain::document::MarkdownContent;
use proposal_assistant::domain::proposal::ProposalRecord;
use proposal_assistant::ports::{ExportFileStorage, ExportFormat, GenerationOptions};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn handler(out_dir: &TempDir) -> ExportProposalHandler {
    ExportProposalHandler::new(
        Arc::new(TemplateProposalGenerator::new()),
        Arc::new(PulldownExportService::new()),
        Arc::new(LocalExportFileStorage::new(out_dir.path())),
    )
}

fn titled(title: &str) -> ProposalRecord {
    ProposalRecord {
        title: title.to_string(),
        ..ProposalRecord::default()
    }
}

fn docx_paragraph_texts(bytes: &[u8]) -> Vec<String> {
    let docx = docx_rs::read_docx(bytes).unwrap();
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(
                para.children
                    .iter()
                    .filter_map(|pc| match pc {
                        docx_rs::ParagraphChild::Run(run) => Some(
                            run.children
                                .iter()
                                .filter_map(|rc| match rc {
                                    docx_rs::RunChild::Text(t) => Some(t.text.clone()),
                                    _ => None,
                                })
                                .collect::<String>(),
                        ),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Filenames
// =============================================================================

#[tokio::test]
async fn title_whitespace_becomes_underscores_in_filename() {
    let dir = TempDir::new().unwrap();

    let result = handler(&dir)
        .handle(ExportProposalCommand::in_memory(
            titled("My  Grant Title"),
            GenerationOptions::default(),
            ExportFormat::Docx,
        ))
        .await
        .unwrap();

    assert_eq!(result.document.filename, "My_Grant_Title.docx");
    assert!(result.stored.is_none());
}

#[tokio::test]
async fn blank_title_uses_fallback_filename() {
    let dir = TempDir::new().unwrap();

    let result = handler(&dir)
        .handle(ExportProposalCommand::in_memory(
            ProposalRecord::default(),
            GenerationOptions::default(),
            ExportFormat::Markdown,
        ))
        .await
        .unwrap();

    assert_eq!(result.document.filename, "DBT_Proposal_Draft.md");
}

// =============================================================================
// Formats
// =============================================================================

#[tokio::test]
async fn markdown_export_is_generated_text() {
    let dir = TempDir::new().unwrap();

    let result = handler(&dir)
        .handle(ExportProposalCommand::in_memory(
            titled("Biobank"),
            GenerationOptions::default(),
            ExportFormat::Markdown,
        ))
        .await
        .unwrap();

    let text = String::from_utf8(result.document.content).unwrap();
    assert!(text.starts_with("# Biobank\n\n## Abstract"));
    assert_eq!(result.document.content_type, "text/markdown; charset=utf-8");
}

#[tokio::test]
async fn docx_export_maps_each_line_to_a_paragraph() {
    let dir = TempDir::new().unwrap();

    let result = handler(&dir)
        .handle(ExportProposalCommand::in_memory(
            titled("Biobank"),
            GenerationOptions::default(),
            ExportFormat::Docx,
        ))
        .await
        .unwrap();

    assert_eq!(&result.document.content[..2], b"PK");
    let texts = docx_paragraph_texts(&result.document.content);
    assert_eq!(texts[0], "Biobank");
    assert_eq!(texts[1], "");
    assert_eq!(texts[2], "Abstract");
    assert!(texts.iter().any(|t| t.starts_with("\u{2022} WP1")));
    assert!(texts.contains(&"**Proposed duration:** 3 years".to_string()));
}

#[tokio::test]
async fn html_export_contains_section_headings() {
    let dir = TempDir::new().unwrap();

    let result = handler(&dir)
        .handle(ExportProposalCommand::in_memory(
            titled("Imaging Biobank: Phase I"),
            GenerationOptions::default(),
            ExportFormat::Html,
        ))
        .await
        .unwrap();

    let html = String::from_utf8(result.document.content).unwrap();
    assert!(html.contains("<title>Imaging Biobank</title>"));
    assert!(html.contains("<h2>AI Methodology and MLOps</h2>"));
    assert!(html.contains("<h2>Expected Outcomes and Impact</h2>"));
    assert!(html.contains("<strong>Planned sites:</strong>"));
}

// =============================================================================
// Storage
// =============================================================================

#[tokio::test]
async fn stored_export_matches_returned_document() {
    let dir = TempDir::new().unwrap();
    let storage = LocalExportFileStorage::new(dir.path());

    let result = handler(&dir)
        .handle(ExportProposalCommand::to_file(
            titled("Stored Draft"),
            GenerationOptions::default(),
            ExportFormat::Markdown,
        ))
        .await
        .unwrap();

    let stored = result.stored.unwrap();
    assert_eq!(stored.path, dir.path().join("Stored_Draft.md"));
    assert_eq!(stored.size_bytes, result.document.size_bytes() as u64);

    let on_disk = storage.read("Stored_Draft.md").await.unwrap();
    assert_eq!(on_disk, result.document.content);
    let text = String::from_utf8(on_disk).unwrap();
    assert_eq!(stored.checksum, MarkdownContent::compute_checksum(&text));
}

#[tokio::test]
async fn configured_fallback_stem_names_untitled_exports() {
    let dir = TempDir::new().unwrap();

    let result = handler(&dir)
        .with_fallback_stem("Untitled")
        .handle(ExportProposalCommand::to_file(
            ProposalRecord::default(),
            GenerationOptions::default(),
            ExportFormat::Html,
        ))
        .await
        .unwrap();

    assert_eq!(result.document.filename, "Untitled.html");
    assert!(dir.path().join("Untitled.html").exists());
}

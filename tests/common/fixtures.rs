//! Test fixtures and document builders.
//!
//! Provides builders for creating test documents with specific content,
//! following the Builder pattern for clean test setup.

use anonymizer::{Document, Table};
use anyhow::Result;
use std::path::Path;

/// Builder for creating test documents with custom content.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let document = TestDocumentBuilder::new()
///     .with_paragraph("이름: 김민준, 학번: 202312345")
///     .with_table(&[&["이름", "김민준"], &["학번", "202312345"]])
///     .write(Path::new("/tmp/김민준_202312345.docx"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestDocumentBuilder {
    document: Document,
}

impl TestDocumentBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a paragraph.
    pub fn with_paragraph(mut self, text: &str) -> Self {
        self.document.paragraphs.push(text.to_string());
        self
    }

    /// Appends a table from rows of cells.
    pub fn with_table(mut self, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        self.document.tables.push(Table::new(rows));
        self
    }

    /// Returns the built document.
    pub fn build(self) -> Document {
        self.document
    }

    /// Saves the built document to disk and returns it.
    pub fn write(self, path: &Path) -> Result<Document> {
        let document = self.build();
        document.save(path)?;
        Ok(document)
    }
}

/// A typical student report carrying the owner's identity in both region
/// types: paragraph text and table cells.
pub fn student_report(name: &str, student_id: &str) -> Document {
    TestDocumentBuilder::new()
        .with_paragraph(&format!("이름: {name}, 학번: {student_id}"))
        .with_paragraph("본 보고서는 수업 과제로 제출되었습니다.")
        .with_table(&[&["이름", name], &["학번", student_id]])
        .build()
}

/// Writes a student report named `<name>_<student_id>.docx` into `dir`.
pub fn write_student_report(dir: &Path, name: &str, student_id: &str) -> Result<Document> {
    let document = student_report(name, student_id);
    document.save(&dir.join(format!("{name}_{student_id}.docx")))?;
    Ok(document)
}

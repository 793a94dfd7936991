//! 解析結果のターミナル表示

use chrono::Local;
use persona_ai_common::{DetailView, FileEntry, ResultsView, SelectedFiles};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// 結果JSONの保存先（フォルダ指定なら日時付きファイル名）
pub fn result_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(format!("analysis-{}.json", Local::now().format("%Y%m%d-%H%M%S")))
    } else {
        target.to_path_buf()
    }
}

/// 選択ファイル一覧
pub fn format_file_list<F: FileEntry>(files: &SelectedFiles<F>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", files.label());
    for (i, name) in files.names().iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", i + 1, name);
    }
    out
}

pub fn format_results(view: &ResultsView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "── Metadata ──");
    for item in &view.metadata {
        let _ = writeln!(out, "  {:<16}{}", item.label, item.value);
    }

    let _ = writeln!(out, "\n── Top Sections ──");
    for card in &view.sections {
        let _ = write!(out, "  [{}] {}", card.rank, card.title);
        if let Some(badge) = &card.badge {
            let _ = write!(out, "  ({})", badge);
        }
        let _ = writeln!(out, "\n      📄 {}  📖 {}", card.document, card.page);
    }

    let _ = writeln!(out, "\n── Detailed Analysis ──");
    for card in &view.analyses {
        let _ = writeln!(out, "  {}. {} ({})", card.index + 1, card.document, card.page);
        let _ = writeln!(out, "      {}", card.text);
    }

    out
}

pub fn format_detail(detail: &DetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "══ {} ══", detail.title);
    let _ = writeln!(out, "Section Information");
    let _ = writeln!(out, "  Document:  {}", detail.document);
    let _ = writeln!(out, "  Page:      {}", detail.page);
    let _ = writeln!(out, "  Rank:      {}", detail.rank);
    if let Some(relevance) = &detail.relevance {
        let _ = writeln!(out, "  Relevance: {}", relevance);
    }
    let _ = writeln!(out, "\nFull Analysis");
    let _ = writeln!(out, "  {}", detail.full_text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_ai_common::{AnalysisResult, ExtractedSection, NamedFile, SubSectionAnalysis};

    fn sample() -> AnalysisResult {
        AnalysisResult {
            extracted_sections: vec![ExtractedSection {
                section_title: "Coastal Adventures".into(),
                document: "trip.pdf".into(),
                page_number: 2,
                importance_rank: 1,
                relevance_score: Some(55.1),
            }],
            sub_section_analysis: vec![SubSectionAnalysis {
                document: "trip.pdf".into(),
                page_number: 2,
                refined_text: "Beach hopping along the coast".into(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_results() {
        let text = format_results(&ResultsView::from_result(&sample()));
        assert!(text.contains("[1] Coastal Adventures  (55.1% Match)"));
        assert!(text.contains("📄 trip.pdf  📖 Page 2"));
        assert!(text.contains("1. trip.pdf (Page 2)"));
        assert!(text.contains("Beach hopping along the coast"));
    }

    #[test]
    fn test_format_detail() {
        let detail = DetailView::from_result(&sample(), 0).unwrap();
        let text = format_detail(&detail);
        assert!(text.starts_with("══ Coastal Adventures ══"));
        assert!(text.contains("Rank:      #1"));
        assert!(text.contains("Relevance: 55.1% Match"));
    }

    #[test]
    fn test_result_path() {
        let dir = tempfile::tempdir().unwrap();
        let in_dir = result_path(dir.path());
        assert_eq!(in_dir.parent(), Some(dir.path()));
        assert!(in_dir.file_name().unwrap().to_string_lossy().starts_with("analysis-"));

        let explicit = dir.path().join("out.json");
        assert_eq!(result_path(&explicit), explicit);
    }

    #[test]
    fn test_format_file_list() {
        let mut files = SelectedFiles::new();
        files.add(vec![NamedFile::pdf("a.pdf"), NamedFile::pdf("b.pdf")]);
        let text = format_file_list(&files);
        assert!(text.starts_with("2 files selected"));
        assert!(text.contains(" 2. b.pdf"));
    }
}

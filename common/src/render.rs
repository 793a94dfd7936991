//! 解析結果の表示用モデル
//!
//! ブラウザ（Leptos）とCLI（ターミナル出力）で同じ文言・並びを使う。

use chrono::{DateTime, Utc};

use crate::types::{AnalysisResult, ExtractedSection, Metadata, SubSectionAnalysis};

/// メタデータ1項目
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataItem {
    pub label: &'static str,
    pub value: String,
}

/// 抽出セクションのカード
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCard {
    pub index: usize,
    pub rank: u32,
    pub title: String,
    pub document: String,
    pub page: String,
    /// "61.27% Match"。スコア無し・0なら表示しない
    pub badge: Option<String>,
}

/// サブセクション解析のカード
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisCard {
    pub index: usize,
    pub document: String,
    pub page: String,
    pub text: String,
}

/// 詳細オーバーレイ
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub index: usize,
    pub title: String,
    pub document: String,
    pub page: u32,
    pub rank: String,
    pub relevance: Option<String>,
    pub full_text: String,
}

/// 結果画面全体
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub metadata: Vec<MetadataItem>,
    pub sections: Vec<SectionCard>,
    pub analyses: Vec<AnalysisCard>,
}

impl ResultsView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            metadata: metadata_items(&result.metadata),
            sections: result
                .extracted_sections
                .iter()
                .enumerate()
                .map(|(i, s)| section_card(i, s))
                .collect(),
            analyses: result
                .sub_section_analysis
                .iter()
                .enumerate()
                .map(|(i, a)| analysis_card(i, a))
                .collect(),
        }
    }
}

pub fn metadata_items(metadata: &Metadata) -> Vec<MetadataItem> {
    vec![
        MetadataItem {
            label: "Documents",
            value: metadata.input_documents.len().to_string(),
        },
        MetadataItem {
            label: "Persona",
            value: metadata.persona.clone(),
        },
        MetadataItem {
            label: "Processing Time",
            value: format!("{}s", metadata.processing_time),
        },
        MetadataItem {
            label: "Timestamp",
            value: format_timestamp(&metadata.processing_timestamp),
        },
    ]
}

/// RFC 3339 の時刻を表示用に整形（解析できなければそのまま）
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

fn relevance_text(score: Option<f64>) -> Option<String> {
    score.filter(|s| *s != 0.0).map(|s| format!("{}% Match", s))
}

pub fn section_card(index: usize, section: &ExtractedSection) -> SectionCard {
    SectionCard {
        index,
        rank: section.importance_rank,
        title: section.section_title.clone(),
        document: section.document.clone(),
        page: format!("Page {}", section.page_number),
        badge: relevance_text(section.relevance_score),
    }
}

pub fn analysis_card(index: usize, analysis: &SubSectionAnalysis) -> AnalysisCard {
    AnalysisCard {
        index,
        document: analysis.document.clone(),
        page: format!("Page {}", analysis.page_number),
        text: analysis.refined_text.clone(),
    }
}

impl DetailView {
    pub fn new(index: usize, section: &ExtractedSection, analysis: &SubSectionAnalysis) -> Self {
        Self {
            index,
            title: section.section_title.clone(),
            document: section.document.clone(),
            page: section.page_number,
            rank: format!("#{}", section.importance_rank),
            relevance: relevance_text(section.relevance_score),
            full_text: analysis.refined_text.clone(),
        }
    }

    /// 格納済み結果から位置指定で作る（ペアが無ければNone）
    pub fn from_result(result: &AnalysisResult, index: usize) -> Option<Self> {
        result
            .pair(index)
            .map(|(section, analysis)| Self::new(index, section, analysis))
    }
}

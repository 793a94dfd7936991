//! 解析サービスとやり取りする型定義
//!
//! `/api/analyze` と `/api/health` のJSONをそのまま写した型:
//! - AnalysisResult: 解析結果（メタデータ + 抽出セクション + サブセクション解析）
//! - HealthStatus: ヘルスチェック結果
//! - ErrorBody: 非OKレスポンスのボディ

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 解析メタデータ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    /// 処理時間（秒）
    pub processing_time: f64,
    /// ISO 8601 (UTC)
    pub processing_timestamp: String,
}

/// 抽出セクション（重要度順）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub section_title: String,
    pub document: String,
    pub page_number: u32,
    pub importance_rank: u32,

    /// 関連度（%）。古いサービスは返さない
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

/// サブセクション解析（抽出セクションと同じ位置に対応）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubSectionAnalysis {
    pub document: String,
    pub page_number: u32,
    pub refined_text: String,
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub metadata: Metadata,

    #[serde(default)]
    pub extracted_sections: Vec<ExtractedSection>,

    #[serde(default)]
    pub sub_section_analysis: Vec<SubSectionAnalysis>,
}

impl AnalysisResult {
    /// 指定位置のセクションと解析のペア
    pub fn pair(&self, index: usize) -> Option<(&ExtractedSection, &SubSectionAnalysis)> {
        let section = self.extracted_sections.get(index)?;
        let analysis = self.sub_section_analysis.get(index)?;
        Some((section, analysis))
    }

    /// 成功応答の本文を解釈
    ///
    /// モデル未ロード時などは200でも `{"error": ...}` だけが返る
    pub fn from_body(body: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| Error::from_transport(e.to_string()))?;

        if value.get("metadata").is_none() {
            if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
                return Err(Error::from_response(Some(message.to_string())));
            }
        }

        serde_json::from_value(value).map_err(|e| Error::from_transport(e.to_string()))
    }
}

/// `/api/health` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

/// 非OKレスポンスのボディ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

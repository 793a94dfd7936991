mod mime;

use crate::error::{PersonaAiError, Result};
use persona_ai_common::FileEntry;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ローカルファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl LocalFile {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
            mime_type: mime::detect(path),
        }
    }
}

impl FileEntry for LocalFile {
    fn name(&self) -> String {
        self.file_name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// コマンドライン引数1つ分の入力
///
/// ファイル指定は「選択」、フォルダ指定は中身をまとめて「ドロップ」として扱う
#[derive(Debug, Clone, PartialEq)]
pub enum InputBatch {
    Selected(Vec<LocalFile>),
    Dropped { folder: PathBuf, files: Vec<LocalFile> },
}

pub fn scan_inputs(paths: &[PathBuf]) -> Result<Vec<InputBatch>> {
    let mut batches = Vec::new();
    let mut selected = Vec::new();

    for path in paths {
        if path.is_dir() {
            batches.push(InputBatch::Dropped {
                folder: path.clone(),
                files: scan_folder(path)?,
            });
        } else if path.is_file() {
            selected.push(LocalFile::from_path(path));
        } else {
            return Err(PersonaAiError::FileNotFound(path.display().to_string()));
        }
    }

    if !selected.is_empty() {
        batches.insert(0, InputBatch::Selected(selected));
    }

    Ok(batches)
}

/// フォルダ直下のファイル一覧（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<LocalFile>> {
    if !folder.exists() {
        return Err(PersonaAiError::FolderNotFound(folder.display().to_string()));
    }

    let mut files: Vec<LocalFile> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| LocalFile::from_path(e.path()))
        .collect();

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

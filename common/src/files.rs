//! 選択ファイル管理
//!
//! ファイル名で重複排除した順序付き集合。ブラウザでは `web_sys::File`、
//! CLIではローカルパスを `FileEntry` 経由で同じように扱う。

/// 受け付けるMIMEタイプ
pub const ACCEPTED_MIME: &str = "application/pdf";

/// ファイル選択前のラベル
pub const LABEL_EMPTY: &str = "Choose PDF files or drag & drop";

/// 選択可能なファイルハンドル
pub trait FileEntry {
    /// ファイル名（重複判定のキー）
    fn name(&self) -> String;

    /// MIMEタイプ（不明なら空文字）
    fn mime_type(&self) -> String;

    fn is_pdf(&self) -> bool {
        self.mime_type() == ACCEPTED_MIME
    }
}

/// 選択済みファイル
#[derive(Debug, Clone)]
pub struct SelectedFiles<F> {
    files: Vec<F>,
}

impl<F> Default for SelectedFiles<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: FileEntry> SelectedFiles<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを追加（同名ファイルは無視）。追加した件数を返す
    pub fn add(&mut self, incoming: impl IntoIterator<Item = F>) -> usize {
        let mut added = 0;
        for file in incoming {
            let name = file.name();
            if self.contains(&name) {
                tracing::debug!(file = %name, "duplicate file ignored");
                continue;
            }
            self.files.push(file);
            added += 1;
        }
        added
    }

    /// ドロップされたファイルからPDFのみ追加
    ///
    /// PDFが1件も無ければ `Error::UnsupportedFile`（選択は変化しない）
    pub fn add_dropped(&mut self, dropped: impl IntoIterator<Item = F>) -> crate::Result<usize> {
        let pdfs: Vec<F> = dropped.into_iter().filter(|f| f.is_pdf()).collect();
        if pdfs.is_empty() {
            return Err(crate::Error::UnsupportedFile);
        }
        Ok(self.add(pdfs))
    }

    /// 位置指定で削除（範囲外は無視）
    pub fn remove(&mut self, index: usize) -> Option<F> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name() == name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.files.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name()).collect()
    }

    /// 件数ラベル
    pub fn label(&self) -> String {
        match self.files.len() {
            0 => LABEL_EMPTY.to_string(),
            1 => "1 file selected".to_string(),
            n => format!("{} files selected", n),
        }
    }
}

/// 名前とMIMEタイプだけを持つハンドル（テスト・CLI用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFile {
    pub name: String,
    pub mime_type: String,
}

impl NamedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn pdf(name: impl Into<String>) -> Self {
        Self::new(name, ACCEPTED_MIME)
    }
}

impl FileEntry for NamedFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

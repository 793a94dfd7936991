//! 拡張子からMIMEタイプを判定

use std::path::Path;

/// 不明な拡張子は空文字（ブラウザの `File.type` と同じ扱い）
pub fn detect(path: &Path) -> String {
    mime_guess::from_path(path).first_raw().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_case_insensitive() {
        assert_eq!(detect(Path::new("a.pdf")), "application/pdf");
        assert_eq!(detect(Path::new("B.PDF")), "application/pdf");
    }

    #[test]
    fn test_detect_other() {
        assert_eq!(detect(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(detect(Path::new("notes.zzqx")), "");
        assert_eq!(detect(Path::new("README")), "");
    }
}

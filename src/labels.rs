//! User-facing text of both pages.

pub const ALL_TAGS: &str = "Tümü";
pub const OPEN_GAME: &str = "Oyunu Aç";
pub const OPEN_STUDENT: &str = "Öğrenci";
pub const VIEW_GAMES: &str = "Oyunlarını Gör";
pub const ALL_STUDENTS_OPTION: &str = "Tüm öğrenciler";
pub const ALL_TAGS_OPTION: &str = "Tüm etiketler";
pub const SEARCH_PLACEHOLDER: &str = "Oyun, öğrenci veya açıklama ara";
pub const STUDENT_SEARCH_PLACEHOLDER: &str = "Öğrenci ara";
pub const CLEAR: &str = "Temizle";
pub const NO_GAMES: &str = "Sonuç bulunamadı.";
pub const NO_STUDENTS: &str = "Öğrenci bulunamadı.";
pub const LOAD_FAILED_TITLE: &str = "Veri yüklenemedi";

pub fn total_label(count: usize) -> String {
    format!("Toplam: {count}")
}

pub fn shown_label(count: usize) -> String {
    format!("Gösterilen: {count}")
}

pub fn game_count_label(count: usize) -> String {
    format!("Oyun sayısı: {count}")
}

pub fn cover_alt(title: &str) -> String {
    format!("{title} kapak")
}

/// Hint pointing the viewer at the catalog resource.
pub fn load_failed_hint(catalog_url: &str) -> String {
    format!("{catalog_url} kontrol edin.")
}

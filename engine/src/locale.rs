use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, Display, Serialize, Deserialize, Hash, PartialEq, Eq, EnumIter, Default,
)]
pub enum Language {
    #[default]
    English,
    #[strum(to_string = "Bahasa Indonesia")]
    Indonesian,
}

/// User-facing texts of the studio window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texts {
    pub tagline: &'static str,
    pub prompt_label: &'static str,
    pub prompt_placeholder: &'static str,
    pub enhance_button: &'static str,
    pub generate_button: &'static str,
    pub download_button: &'static str,
    pub result_placeholder: &'static str,
    pub generating: &'static str,
    pub generation_failed: &'static str,
}

const ENGLISH: Texts = Texts {
    tagline: "Turn words into spectacular images with state of the art AI.",
    prompt_label: "Your imagination",
    prompt_placeholder: "Describe the image you want to create... (e.g. A cyberpunk Jakarta in 2077)",
    enhance_button: "Enhance prompt",
    generate_button: "Create image",
    download_button: "Download",
    result_placeholder: "Your artwork will appear here",
    generating: "Painting your imagination...",
    generation_failed: "Oops! Something went wrong while creating the image. Please try again.",
};

const INDONESIAN: Texts = Texts {
    tagline: "Ubah kata-kata menjadi gambar spektakuler dengan kekuatan AI tercanggih.",
    prompt_label: "Imaginasi Anda",
    prompt_placeholder: "Deskripsikan gambar yang ingin Anda buat... (contoh: Pemandangan cyberpunk Jakarta di tahun 2077)",
    enhance_button: "Perbagus Prompt",
    generate_button: "Buat Gambar",
    download_button: "Unduh",
    result_placeholder: "Karya seni Anda akan muncul di sini",
    generating: "Sedang melukis imajinasi Anda...",
    generation_failed: "Ups! Terjadi kesalahan saat membuat gambar. Silakan coba lagi.",
};

impl Language {
    pub fn texts(&self) -> &'static Texts {
        match self {
            Language::English => &ENGLISH,
            Language::Indonesian => &INDONESIAN,
        }
    }

    /// The one message shown for every kind of generation failure
    pub fn generation_failed(&self) -> &'static str {
        self.texts().generation_failed
    }
}

/// Cartoonization styles offered by the conversion vendor. The list is a
/// convenience for clients; the gateway forwards whatever code it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CartoonType {
    MagicMirrorAvatar,
    FairyAvatar,
    DreamlandAvatar,
    MangaAvatar,
    KPopAvatar,
    KPop,
    Pixel,
    SmileAvatar,
    MagicMirror,
    AmericanComicAvatar,
    #[default]
    AmericanComic,
    PixarHeader,
    PixarFull,
    PinkyHeader,
    PinkyFull,
    RetouchHeader,
    RetouchFull,
}

pub const DEFAULT_CARTOON_TYPE: &str = "10";

impl CartoonType {
    pub const ALL: [CartoonType; 17] = [
        Self::MagicMirrorAvatar,
        Self::FairyAvatar,
        Self::DreamlandAvatar,
        Self::MangaAvatar,
        Self::KPopAvatar,
        Self::KPop,
        Self::Pixel,
        Self::SmileAvatar,
        Self::MagicMirror,
        Self::AmericanComicAvatar,
        Self::AmericanComic,
        Self::PixarHeader,
        Self::PixarFull,
        Self::PinkyHeader,
        Self::PinkyFull,
        Self::RetouchHeader,
        Self::RetouchFull,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::MagicMirrorAvatar => "0",
            Self::FairyAvatar => "1",
            Self::DreamlandAvatar => "2",
            Self::MangaAvatar => "3",
            Self::KPopAvatar => "4",
            Self::KPop => "5",
            Self::Pixel => "6",
            Self::SmileAvatar => "7",
            Self::MagicMirror => "8",
            Self::AmericanComicAvatar => "9",
            Self::AmericanComic => "10",
            Self::PixarHeader => "11_header",
            Self::PixarFull => "11_full",
            Self::PinkyHeader => "12_header",
            Self::PinkyFull => "12_full",
            Self::RetouchHeader => "13_header",
            Self::RetouchFull => "13_full",
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::MagicMirrorAvatar => "Magic Mirror Avatar",
            Self::FairyAvatar => "Fairy Avatar",
            Self::DreamlandAvatar => "Dreamland Avatar",
            Self::MangaAvatar => "Manga Avatar",
            Self::KPopAvatar => "K-POP Avatar",
            Self::KPop => "K-POP",
            Self::Pixel => "Pixel",
            Self::SmileAvatar => "Smile Avatar",
            Self::MagicMirror => "Magic Mirror",
            Self::AmericanComicAvatar => "American Comic Avatar",
            Self::AmericanComic => "American Comic",
            Self::PixarHeader => "Pixar Avatar (Head)",
            Self::PixarFull => "Pixar (Full Body)",
            Self::PinkyHeader => "Pinky Avatar (Head)",
            Self::PinkyFull => "Pinky (Full Body)",
            Self::RetouchHeader => "Retouch (Head)",
            Self::RetouchFull => "Retouch (Full Body)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

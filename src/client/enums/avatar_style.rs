#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarStyle {
    #[default]
    ThreeD,
    Cartoon,
    Realistic,
    Anime,
}

impl AvatarStyle {
    pub const ALL: [AvatarStyle; 4] = [Self::ThreeD, Self::Cartoon, Self::Realistic, Self::Anime];

    /// Text sent to the backend and prefixed to the prompt.
    pub fn value(&self) -> &'static str {
        match *self {
            Self::ThreeD => "3D Avatar",
            Self::Cartoon => "Cartoon Style",
            Self::Realistic => "Realistic",
            Self::Anime => "Anime",
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::ThreeD => "3D Avatar",
            Self::Cartoon => "Cartoon",
            Self::Realistic => "Realistic",
            Self::Anime => "Anime",
        }
    }
}

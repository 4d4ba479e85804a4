/// Panels that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Predictions,
    Matrix,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Self::Predictions => Self::Matrix,
            Self::Matrix => Self::Predictions,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Predictions => "Upcoming",
            Self::Matrix => "Head to head",
        }
    }
}

/// Which participant of a match a pick refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

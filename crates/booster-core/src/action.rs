/// What the user did with a presented booster card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    PrimaryActionTapped(String),
    Dismissed(String),
}

impl UserAction {
    pub fn booster_id(&self) -> &str {
        match self {
            UserAction::PrimaryActionTapped(id) | UserAction::Dismissed(id) => id,
        }
    }
}

/// Raw answer from a presentation surface, before it is tied to a booster id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceResponse {
    PrimaryAction,
    Dismissed,
}

impl SurfaceResponse {
    pub fn into_action(self, booster_id: &str) -> UserAction {
        match self {
            SurfaceResponse::PrimaryAction => UserAction::PrimaryActionTapped(booster_id.to_string()),
            SurfaceResponse::Dismissed => UserAction::Dismissed(booster_id.to_string()),
        }
    }
}

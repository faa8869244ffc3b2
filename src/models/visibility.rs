use serde::{Deserialize, Serialize};

/// Who gets to see a check-in in other users' feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Friends,
    Private,
}

impl Visibility {
    pub fn code(&self) -> &str {
        match self {
            Visibility::Public => "public",
            Visibility::Friends => "friends",
            Visibility::Private => "private",
        }
    }

    /// Convert enum → stored string
    pub fn to_db_str(&self) -> &str {
        self.code()
    }

    /// Convert stored string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Visibility::Public),
            "friends" => Some(Visibility::Friends),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        Visibility::from_db_str(&code.to_lowercase())
    }

    /// Visible in feeds of users other than the owner.
    pub fn shown_to_others(&self) -> bool {
        matches!(self, Visibility::Public | Visibility::Friends)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Friends
    }
}

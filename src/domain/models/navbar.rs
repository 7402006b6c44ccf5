use serde::Deserialize;

use super::menu::MenuIcon;

/// Static icon action shown in the navbar row
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavAction {
    pub label: String,
    pub icon: MenuIcon,
}

impl NavAction {
    pub fn new(label: impl Into<String>, icon: MenuIcon) -> Self {
        Self {
            label: label.into(),
            icon,
        }
    }
}

/// Entries of the profile dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    Settings,
    Language,
    Help,
    Logout,
}

impl ProfileAction {
    pub fn all() -> [ProfileAction; 4] {
        [
            ProfileAction::Settings,
            ProfileAction::Language,
            ProfileAction::Help,
            ProfileAction::Logout,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileAction::Settings => "Settings",
            ProfileAction::Language => "Language",
            ProfileAction::Help => "Help",
            ProfileAction::Logout => "Logout",
        }
    }

    /// Rendered apart, in a warning color
    pub fn is_destructive(&self) -> bool {
        matches!(self, ProfileAction::Logout)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Initials shown when no avatar image is configured
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_logout_is_destructive() {
        let destructive: Vec<_> = ProfileAction::all()
            .into_iter()
            .filter(ProfileAction::is_destructive)
            .collect();
        assert_eq!(destructive, vec![ProfileAction::Logout]);
    }

    #[test]
    fn test_initials() {
        let profile = UserProfile {
            name: "john doe".to_string(),
            title: "Software Engineer".to_string(),
            avatar_url: None,
        };
        assert_eq!(profile.initials(), "JD");
    }
}

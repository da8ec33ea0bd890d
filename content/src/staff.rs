use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Leadership,
    Academic,
    Administrative,
}

impl StaffRole {
    pub fn all() -> [Self; 3] {
        [Self::Leadership, Self::Academic, Self::Administrative]
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Leadership => "leadership",
            Self::Academic => "academic",
            Self::Administrative => "administrative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Leadership => "Leadership",
            Self::Academic => "Academic",
            Self::Administrative => "Administrative",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Leadership => "fas fa-crown",
            Self::Academic => "fas fa-graduation-cap",
            Self::Administrative => "fas fa-briefcase",
        }
    }

    // derive a role from a job title when the config does not name one
    pub fn classify(title: &str) -> Self {
        let title = title.trim().to_lowercase();

        if title.contains("principal") {
            Self::Leadership
        } else if title.contains("head") {
            Self::Academic
        } else {
            Self::Administrative
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub title: String,
    pub qualification: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub role: Option<StaffRole>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl StaffMember {
    pub fn role(&self) -> StaffRole {
        self.role.unwrap_or_else(|| StaffRole::classify(&self.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_title_keywords() {
        assert_eq!(StaffRole::classify("Principal"), StaffRole::Leadership);
        assert_eq!(StaffRole::classify("Deputy Principal"), StaffRole::Leadership);
        assert_eq!(StaffRole::classify("Head of Science"), StaffRole::Academic);
        assert_eq!(StaffRole::classify("  SECTIONAL HEAD "), StaffRole::Academic);
        assert_eq!(StaffRole::classify("Office Manager"), StaffRole::Administrative);
    }

    #[test]
    fn explicit_role_wins_over_title() {
        let member = StaffMember {
            name: "A".into(),
            title: "Head Librarian".into(),
            qualification: "BA".into(),
            description: "".into(),
            image: "a.jpg".into(),
            role: Some(StaffRole::Administrative),
            email: None,
            phone: None,
        };

        assert_eq!(member.role(), StaffRole::Administrative);
        assert_eq!(StaffMember { role: None, ..member }.role(), StaffRole::Academic);
    }
}

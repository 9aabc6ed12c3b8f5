use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Location value meaning the user will take a listing anywhere
pub const NO_PREFERENCE: &str = "No Preference";

/// Location value for users (or listings) spread over several cities
pub const MULTIPLE_LOCATIONS: &str = "Multiple Locations";

/// Single internship opportunity from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(alias = "required_skills", default)]
    pub required_skills: Vec<String>,
    pub sector: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub stipend: Option<String>,
}

impl Listing {
    /// Whether the listing asks for `skill` (exact match, surrounding whitespace ignored)
    pub fn requires(&self, skill: &str) -> bool {
        self.required_skills.iter().any(|s| s.trim() == skill)
    }
}

/// Preferences submitted by a user for one recommendation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub interest: String,
    pub location: String,
}

impl UserProfile {
    /// Build a profile, trimming every field and dropping blank or repeated skills.
    /// Submission order of the remaining skills is preserved.
    pub fn new<I, S>(skills: I, interest: &str, location: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique: Vec<String> = Vec::new();
        for skill in skills {
            let skill = skill.as_ref().trim();
            if !skill.is_empty() && seen.insert(skill.to_string()) {
                unique.push(skill.to_string());
            }
        }

        Self {
            skills: unique,
            interest: interest.trim().to_string(),
            location: location.trim().to_string(),
        }
    }
}

/// Listing paired with its score and the top reasons it was picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub listing: Listing,
    pub score: i32,
    pub reasons: Vec<String>,
}

/// Integer contribution of every scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub skill: i32,
    pub sector: i32,
    pub location_exact: i32,
    pub location_no_preference: i32,
    pub location_flexible: i32,
    pub location_mismatch: i32,
    pub high_demand: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 12,
            sector: 18,
            location_exact: 10,
            location_no_preference: 4,
            location_flexible: 2,
            location_mismatch: -1,
            high_demand: 3,
        }
    }
}

/// Read-only internship catalog shared by every request
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Arc<[Listing]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_dedups_and_trims_skills() {
        let profile = UserProfile::new(
            vec![" Python ", "SQL", "", "Python", "  "],
            " Technology ",
            "Remote",
        );

        assert_eq!(profile.skills, vec!["Python", "SQL"]);
        assert_eq!(profile.interest, "Technology");
    }

    #[test]
    fn test_profile_handles_large_skill_lists() {
        let mut skills: Vec<String> = (0..50_000).map(|i| format!("s{}", i)).collect();
        skills.extend((0..50_000).map(|i| format!("s{}", i)));

        let profile = UserProfile::new(&skills, "", "");

        assert_eq!(profile.skills.len(), 50_000);
        assert_eq!(profile.skills[0], "s0");
        assert_eq!(profile.skills[49_999], "s49999");
    }

    #[test]
    fn test_listing_accepts_snake_case_skills() {
        let json = r#"{
            "title": "Data Intern",
            "required_skills": ["Python", "Excel"],
            "sector": "Technology",
            "location": "Remote"
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.required_skills, vec!["Python", "Excel"]);
        assert!(listing.company.is_none());
        assert!(listing.requires("Excel"));
    }

    #[test]
    fn test_catalog_shares_listings() {
        let catalog = Catalog::new(vec![]);
        let clone = catalog.clone();

        assert!(clone.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}

/// Reply used when a question is about how to apply
pub const APPLY_REPLY: &str = "To apply for the internship scheme: 1) Register on the official internship portal with your basic details. 2) Complete your profile with your education and skills. 3) Browse the available internships or use the recommendation tool on this site. 4) Submit applications for up to five internships that match your profile. 5) Track the status of your applications from your dashboard.";

pub const SKILLS_REPLY: &str = "Internships in the scheme ask for a wide range of skills, from programming, data analysis and digital marketing to communication, accounting and field work. Select the skills you already have in the recommendation form and we will match you with internships that need them.";

pub const LOCATION_REPLY: &str = "Internships are offered in urban, rural and remote settings across the country. Choose a specific location in the form, or pick 'No Preference' or 'Multiple Locations' if you are flexible about where you work.";

pub const REQUIREMENTS_REPLY: &str = "To be eligible you should generally be between 21 and 24 years old, not enrolled in full-time education or employment, and have completed at least secondary school, a diploma or an undergraduate degree. Check the official portal for the full eligibility criteria.";

pub const SECTOR_REPLY: &str = "The scheme covers many sectors including Technology, Healthcare, Finance, Environment, Education, Manufacturing and Agriculture. Pick the sector that interests you most in the form to get better matched recommendations.";

pub const GREETING_REPLY: &str = "Hello! I am the internship assistant. Ask me about eligibility, how to apply, required skills, sectors or locations, or use the form to get personalised internship recommendations.";

pub const OFF_TOPIC_REPLY: &str = "I can only help with questions about the internship scheme. Try asking about eligibility, the application process, skills, sectors or locations.";

pub const GENERAL_REPLY: &str = "I'm not sure I understood that. I can answer questions about the internship scheme, such as how to apply, eligibility requirements, skills, sectors and locations. You can also fill in the form above to get internship recommendations.";

/// Keyword category a message falls into
///
/// Categories are checked in declaration order and the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCategory {
    Skills,
    Apply,
    Location,
    Requirements,
    Sector,
    Greeting,
    OffTopic,
    General,
}

impl FallbackCategory {
    const ORDERED: [FallbackCategory; 7] = [
        Self::Skills,
        Self::Apply,
        Self::Location,
        Self::Requirements,
        Self::Sector,
        Self::Greeting,
        Self::OffTopic,
    ];

    /// Words and phrases that select this category
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Skills => &["skill", "skills", "skillset", "learn", "programming", "coding"],
            Self::Apply => &[
                "apply", "applying", "application", "register", "registration", "sign up",
                "enroll", "how to apply",
            ],
            Self::Location => &[
                "location", "locations", "city", "cities", "where", "remote", "place", "state",
                "relocate",
            ],
            Self::Requirements => &[
                "eligible", "eligibility", "requirement", "requirements", "qualification",
                "qualifications", "criteria", "age", "documents",
            ],
            Self::Sector => &["sector", "sectors", "industry", "industries", "field", "domain"],
            Self::Greeting => &[
                "hi", "hello", "hey", "namaste", "good morning", "good afternoon", "good evening",
            ],
            Self::OffTopic => &[
                "weather", "movie", "movies", "cricket", "football", "joke", "politics", "recipe",
                "song", "music", "game", "games",
            ],
            Self::General => &[],
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            Self::Skills => SKILLS_REPLY,
            Self::Apply => APPLY_REPLY,
            Self::Location => LOCATION_REPLY,
            Self::Requirements => REQUIREMENTS_REPLY,
            Self::Sector => SECTOR_REPLY,
            Self::Greeting => GREETING_REPLY,
            Self::OffTopic => OFF_TOPIC_REPLY,
            Self::General => GENERAL_REPLY,
        }
    }

    pub fn classify(message: &str) -> Self {
        let normalized = normalize(message);

        Self::ORDERED
            .into_iter()
            .find(|category| {
                category
                    .keywords()
                    .iter()
                    .any(|keyword| normalized.contains(&format!(" {} ", keyword)))
            })
            .unwrap_or(Self::General)
    }
}

/// Deterministic reply for a message when the generative API is unavailable
pub fn fallback_reply(message: &str) -> &'static str {
    FallbackCategory::classify(message).reply()
}

/// Lowercase, replace punctuation with spaces and pad so whole-word lookups
/// can be done with a plain substring search.
fn normalize(message: &str) -> String {
    let cleaned: String = message
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    format!(" {} ", cleaned.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_question() {
        assert_eq!(fallback_reply("How to apply?"), APPLY_REPLY);
        assert_eq!(FallbackCategory::classify("Where do I register"), FallbackCategory::Apply);
    }

    #[test]
    fn test_first_category_wins() {
        // Mentions both skills and applying; skills is checked first
        assert_eq!(
            FallbackCategory::classify("Which skills do I need to apply?"),
            FallbackCategory::Skills
        );
    }

    #[test]
    fn test_whole_word_matching() {
        // "this" must not count as the greeting "hi"
        assert_eq!(FallbackCategory::classify("this"), FallbackCategory::General);
        assert_eq!(FallbackCategory::classify("Hi there!"), FallbackCategory::Greeting);
        assert_eq!(FallbackCategory::classify("GOOD   morning"), FallbackCategory::Greeting);
    }

    #[test]
    fn test_requirements_and_sector() {
        assert_eq!(FallbackCategory::classify("Am I eligible?"), FallbackCategory::Requirements);
        assert_eq!(FallbackCategory::classify("What industries are there"), FallbackCategory::Sector);
    }

    #[test]
    fn test_off_topic_and_general() {
        assert_eq!(fallback_reply("tell me a joke"), OFF_TOPIC_REPLY);
        assert_eq!(fallback_reply("qwerty"), GENERAL_REPLY);
        assert_eq!(fallback_reply(""), GENERAL_REPLY);
    }
}

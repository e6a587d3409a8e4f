use serde::{Deserialize, Serialize};

/// The user's stored career record.
///
/// Field names serialize in camelCase (`fullName`) so a record saved by the
/// browser build of the app loads unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    /// Comma- or newline-separated list.
    pub skills: String,
    pub experience: String,
    pub education: String,
}

impl Profile {
    /// True when every field is blank.
    pub fn is_empty(&self) -> bool {
        [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.location,
            &self.linkedin,
            &self.skills,
            &self.experience,
            &self.education,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }

    /// Contact lines in header order: email, phone, location, linkedin.
    /// Values are trimmed; blank fields are skipped.
    pub fn contact_lines(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location, &self.linkedin]
            .into_iter()
            .map(|field| field.trim())
            .filter(|field| !field.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        assert!(Profile::default().is_empty());
    }

    #[test]
    fn test_whitespace_only_profile_is_empty() {
        let profile = Profile {
            full_name: "   ".to_string(),
            skills: "\n".to_string(),
            ..Default::default()
        };
        assert!(profile.is_empty());
    }

    #[test]
    fn test_profile_with_education_only_is_not_empty() {
        let profile = Profile {
            education: "BSc Computer Science".to_string(),
            ..Default::default()
        };
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_contact_lines_keep_fixed_order_and_skip_blanks() {
        let profile = Profile {
            email: "ada@example.com".to_string(),
            phone: "".to_string(),
            location: "London".to_string(),
            linkedin: "linkedin.com/in/ada".to_string(),
            ..Default::default()
        };
        assert_eq!(
            profile.contact_lines(),
            vec!["ada@example.com", "London", "linkedin.com/in/ada"]
        );
    }

    #[test]
    fn test_profile_deserializes_camel_case_record() {
        let json = r#"{
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "skills": "Rust, SQL",
            "experience": "Built analytical engines."
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.full_name, "Ada Lovelace");
        assert_eq!(profile.skills, "Rust, SQL");
        assert_eq!(profile.phone, "", "missing fields default to empty");
    }

    #[test]
    fn test_profile_serializes_full_name_as_camel_case() {
        let profile = Profile {
            full_name: "Ada".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["fullName"], "Ada");
        assert!(value.get("full_name").is_none());
    }
}

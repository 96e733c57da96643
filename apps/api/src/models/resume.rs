use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Shared shape of the three resume record types.
///
/// Every field of a record is required, so `REQUIRED_FIELDS` is also the full
/// field list; `spellcheck_fields` names the free-text subset that the
/// spellcheck pass inspects, in the order it is reported.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + 'static {
    /// Human-readable section name used in response messages, e.g. "Experience".
    const SECTION: &'static str;
    const REQUIRED_FIELDS: &'static [&'static str];

    fn spellcheck_fields(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub logo: String,
}

impl Record for Experience {
    const SECTION: &'static str = "Experience";
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "title",
        "company",
        "start_date",
        "end_date",
        "description",
        "logo",
    ];

    fn spellcheck_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.company.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub course: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    /// Free text, e.g. "80%".
    pub grade: String,
    pub logo: String,
}

impl Record for Education {
    const SECTION: &'static str = "Education";
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["course", "school", "start_date", "end_date", "grade", "logo"];

    fn spellcheck_fields(&self) -> Vec<&str> {
        vec![self.course.as_str(), self.school.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Free-text level, e.g. "1-2 Years".
    pub proficiency: String,
    pub logo: String,
}

impl Record for Skill {
    const SECTION: &'static str = "Skill";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "proficiency", "logo"];

    fn spellcheck_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

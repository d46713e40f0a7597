//! Query parameters for the random-user API.

use serde::{Deserialize, Serialize};
use url::Url;

/// Public endpoint of the random-user service.
pub const RANDOM_USER_ENDPOINT: &str = "https://randomuser.me/api/";

/// Counts offered as presets.
pub const USER_COUNTS: [u16; 5] = [5, 10, 20, 50, 100];

/// Largest batch the service returns.
pub const MAX_USERS: u16 = 5000;

/// `(label, code)` for every nationality the service supports.
pub const NATIONALITIES: [(&str, &str); 21] = [
    ("Australia", "au"),
    ("Brazil", "br"),
    ("Canada", "ca"),
    ("Switzerland", "ch"),
    ("Germany", "de"),
    ("Denmark", "dk"),
    ("Spain", "es"),
    ("Finland", "fi"),
    ("France", "fr"),
    ("United Kingdom", "gb"),
    ("Ireland", "ie"),
    ("India", "in"),
    ("Iran", "ir"),
    ("Mexico", "mx"),
    ("Netherlands", "nl"),
    ("Norway", "no"),
    ("New Zealand", "nz"),
    ("Serbia", "rs"),
    ("Turkey", "tr"),
    ("Ukraine", "ua"),
    ("United States", "us"),
];

/// Whether `code` is one of [`NATIONALITIES`].
pub fn is_supported_nationality(code: &str) -> bool {
    NATIONALITIES.iter().any(|(_, c)| c.eq_ignore_ascii_case(code))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Any,
    Male,
    Female,
}

impl Gender {
    fn param(self) -> Option<&'static str> {
        match self {
            Gender::Any => None,
            Gender::Male => Some("male"),
            Gender::Female => Some("female"),
        }
    }
}

/// How many fields each user carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserDetail {
    /// Login, name, email, id, picture.
    #[default]
    Minimal,
    /// Minimal plus location.
    Expanded,
    /// Everything the service returns.
    All,
}

impl UserDetail {
    /// Value of the `inc` parameter, or `None` for every field.
    pub fn fields(self) -> Option<&'static str> {
        match self {
            UserDetail::Minimal => Some("login,name,email,id,picture"),
            UserDetail::Expanded => Some("login,name,email,id,location,picture"),
            UserDetail::All => None,
        }
    }
}

/// Response format requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    /// JSON, re-serialized with indentation.
    Pretty,
    Csv,
    Yaml,
    Xml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Json,
        ExportFormat::Pretty,
        ExportFormat::Csv,
        ExportFormat::Yaml,
        ExportFormat::Xml,
    ];

    /// Value of the `format` parameter.
    pub fn param(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Pretty => "pretty",
            ExportFormat::Csv => "csv",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Xml => "xml",
        }
    }

    /// Whether the body is JSON and decodes into typed users.
    pub fn is_json(self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Pretty)
    }
}

/// One request to the random-user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserQuery {
    /// Clamped to 1..=[`MAX_USERS`] when sent.
    pub count: u16,
    pub detail: UserDetail,
    /// Ignored for [`UserDetail::Minimal`].
    pub gender: Gender,
    /// Nationality code; ignored for [`UserDetail::Minimal`].
    pub nationality: Option<String>,
    pub format: ExportFormat,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            count: USER_COUNTS[0],
            detail: UserDetail::default(),
            gender: Gender::default(),
            nationality: None,
            format: ExportFormat::default(),
        }
    }
}

impl UserQuery {
    /// Query parameters in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("results", self.count.clamp(1, MAX_USERS).to_string()),
            ("format", self.format.param().to_string()),
        ];
        if let Some(fields) = self.detail.fields() {
            params.push(("inc", fields.to_string()));
        }
        if self.detail != UserDetail::Minimal {
            if let Some(gender) = self.gender.param() {
                params.push(("gender", gender.to_string()));
            }
            if let Some(nat) = self.nationality.as_deref().filter(|n| !n.is_empty()) {
                params.push(("nat", nat.to_ascii_lowercase()));
            }
        }
        params
    }

    /// `endpoint` with this query appended.
    pub fn url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut().extend_pairs(self.params());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn owned(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn default_query_is_minimal_json() {
        let endpoint = Url::parse(RANDOM_USER_ENDPOINT).unwrap();
        let url = UserQuery::default().url(&endpoint);
        assert_eq!(url.host_str(), Some("randomuser.me"));
        assert_eq!(url.path(), "/api/");
        assert_eq!(
            pairs(&url),
            owned(&[
                ("results", "5"),
                ("format", "json"),
                ("inc", "login,name,email,id,picture"),
            ])
        );
    }

    #[test]
    fn minimal_ignores_gender_and_nationality() {
        let query = UserQuery {
            gender: Gender::Female,
            nationality: Some("fr".into()),
            ..Default::default()
        };
        let keys: Vec<_> = query.params().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["results", "format", "inc"]);
    }

    #[test]
    fn expanded_sends_filters() {
        let query = UserQuery {
            count: 20,
            detail: UserDetail::Expanded,
            gender: Gender::Male,
            nationality: Some("GB".into()),
            format: ExportFormat::Csv,
        };
        assert_eq!(
            query.params(),
            vec![
                ("results", "20".to_string()),
                ("format", "csv".to_string()),
                ("inc", "login,name,email,id,location,picture".to_string()),
                ("gender", "male".to_string()),
                ("nat", "gb".to_string()),
            ]
        );
    }

    #[test]
    fn all_fields_omits_inc() {
        let query = UserQuery {
            detail: UserDetail::All,
            format: ExportFormat::Xml,
            ..Default::default()
        };
        assert!(query.params().iter().all(|(k, _)| *k != "inc"));
    }

    #[test]
    fn count_is_clamped() {
        let zero = UserQuery {
            count: 0,
            ..Default::default()
        };
        assert_eq!(zero.params()[0].1, "1");
        let huge = UserQuery {
            count: 9_999,
            ..Default::default()
        };
        assert_eq!(huge.params()[0].1, "5000");
    }

    #[test]
    fn only_json_formats_are_json() {
        let json: Vec<_> = ExportFormat::ALL.into_iter().filter(|f| f.is_json()).collect();
        assert_eq!(json, [ExportFormat::Json, ExportFormat::Pretty]);
    }

    #[test]
    fn nationality_lookup() {
        assert!(is_supported_nationality("nz"));
        assert!(is_supported_nationality("US"));
        assert!(!is_supported_nationality("xx"));
    }

    #[test]
    fn query_deserializes_with_defaults() {
        let query: UserQuery = serde_json::from_str(r#"{"detail":"all","format":"yaml"}"#).unwrap();
        assert_eq!(query.count, 5);
        assert_eq!(query.detail, UserDetail::All);
        assert_eq!(query.format, ExportFormat::Yaml);
    }
}

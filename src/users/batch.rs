//! A fetched batch of users together with its raw body.

use serde_json::Value;

use super::model::{ApiResponse, User};
use super::query::ExportFormat;
use super::{csv_rows, xml_rows};
use crate::error::UserError;

/// Result of one fetch.
///
/// `users` holds every decoded user; `raw` is the body for export.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBatch {
    pub format: ExportFormat,
    pub users: Vec<User>,
    /// The body as it should be exported; pretty JSON is re-indented.
    pub raw: String,
}

impl UserBatch {
    /// Decode a response body received for `format`.
    pub fn from_body(format: ExportFormat, body: String) -> Result<Self, UserError> {
        if format.is_json() {
            let value: Value = serde_json::from_str(&body)?;
            let raw = if format == ExportFormat::Pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            let response: ApiResponse = serde_json::from_value(value)?;
            return Ok(Self {
                format,
                users: response.results,
                raw,
            });
        }
        Ok(Self {
            format,
            users: decode_users(format, &body)?,
            raw: body,
        })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The raw text of a single user, in the batch's format.
    ///
    /// JSON users are re-serialized, CSV users keep the header line, XML users
    /// are the matching `<results>` element, and YAML users are dumped as a
    /// one-element list.
    pub fn user_raw(&self, index: usize) -> Option<String> {
        match self.format {
            ExportFormat::Json => serde_json::to_string(self.users.get(index)?).ok(),
            ExportFormat::Pretty => serde_json::to_string_pretty(self.users.get(index)?).ok(),
            ExportFormat::Csv => {
                let records = csv_rows::record_slices(&self.raw).ok()?;
                let header = records.first()?;
                let row = records.get(index + 1)?;
                Some(format!("{header}\n{row}"))
            }
            ExportFormat::Xml => {
                xml_rows::element_slice(&self.raw, xml_rows::USER_ELEMENT, index)
                    .map(str::to_string)
            }
            ExportFormat::Yaml => {
                let user = self.users.get(index)?;
                serde_yaml::to_string(std::slice::from_ref(user)).ok()
            }
        }
    }
}

/// Typed users from a body in any format.
fn decode_users(format: ExportFormat, body: &str) -> Result<Vec<User>, UserError> {
    match format {
        ExportFormat::Json | ExportFormat::Pretty => {
            Ok(serde_json::from_str::<ApiResponse>(body)?.results)
        }
        ExportFormat::Csv => csv_rows::parse_users(body),
        ExportFormat::Yaml => Ok(serde_yaml::from_str::<ApiResponse>(body)?.results),
        ExportFormat::Xml => xml_rows::parse_users(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const JSON_BODY: &str = r#"{"results":[
        {"name":{"title":"Ms","first":"Ava","last":"Lind"},"email":"ava@example.com"},
        {"name":{"title":"Mr","first":"Bo","last":"Ek"},"email":"bo@example.com"}
    ],"info":{"seed":"abc","results":2,"page":1,"version":"1.4"}}"#;

    #[test]
    fn json_body_decodes_users() {
        let batch = UserBatch::from_body(ExportFormat::Json, JSON_BODY.into()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.users[1].display_name(), "Mr Bo Ek");
        assert!(!batch.raw.contains('\n'));
        assert_eq!(
            batch.user_raw(0).as_deref(),
            Some(r#"{"name":{"title":"Ms","first":"Ava","last":"Lind"},"email":"ava@example.com"}"#)
        );
        assert_eq!(batch.user_raw(2), None);
    }

    #[test]
    fn pretty_body_is_reindented() {
        let batch = UserBatch::from_body(ExportFormat::Pretty, JSON_BODY.into()).unwrap();
        assert!(batch.raw.starts_with("{\n  \""));
        assert!(batch.raw.contains("\n  \"results\": ["));
        assert!(batch.user_raw(1).unwrap().contains("\n  \"email\": \"bo@example.com\""));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = UserBatch::from_body(ExportFormat::Json, "<html>".into()).unwrap_err();
        assert!(matches!(err, UserError::Json(_)));
    }

    #[test]
    fn csv_user_keeps_header() {
        let body = "name.first,email\nAva,ava@example.com\nBo,bo@example.com\n";
        let batch = UserBatch::from_body(ExportFormat::Csv, body.into()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.raw, body);
        assert_eq!(
            batch.user_raw(1).as_deref(),
            Some("name.first,email\nBo,bo@example.com")
        );
        assert_eq!(batch.user_raw(2), None);
    }

    #[test]
    fn xml_body_decodes_users() {
        let body = "<?xml version=\"1.0\"?><user><results><email>a@x</email></results>\
                    <results id=\"2\"><email>b@x</email></results><info/></user>";
        let batch = UserBatch::from_body(ExportFormat::Xml, body.into()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.users[1].email.as_deref(), Some("b@x"));
        assert_eq!(batch.raw, body);
        assert_eq!(
            batch.user_raw(1).as_deref(),
            Some("<results id=\"2\"><email>b@x</email></results>")
        );
        assert_eq!(batch.user_raw(2), None);
    }

    const YAML_BODY: &str = "results:
- gender: female
  name:
    title: Ms
    first: Ava
    last: Lind
  email: ava@example.com
- name:
    title: Mr
    first: Bo
    last: Ek
  email: bo@example.com
  nat: DK
info:
  seed: abc
  results: 2
  page: 1
  version: '1.4'
";

    #[test]
    fn yaml_body_decodes_users() {
        let batch = UserBatch::from_body(ExportFormat::Yaml, YAML_BODY.into()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.users[0].display_name(), "Ms Ava Lind");
        assert_eq!(batch.users[1].email.as_deref(), Some("bo@example.com"));
        assert_eq!(batch.raw, YAML_BODY);
    }

    #[test]
    fn yaml_user_is_a_one_item_list() {
        let batch = UserBatch::from_body(ExportFormat::Yaml, YAML_BODY.into()).unwrap();
        let dump = batch.user_raw(1).unwrap();
        assert!(dump.starts_with("- name:"), "{dump}");
        let back: Vec<User> = serde_yaml::from_str(&dump).unwrap();
        assert_eq!(back, vec![batch.users[1].clone()]);
        assert_eq!(batch.user_raw(2), None);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = UserBatch::from_body(ExportFormat::Yaml, "results: [".into()).unwrap_err();
        assert!(matches!(err, UserError::Yaml(_)));
    }

    #[test]
    fn decode_matches_json_path() {
        let users = decode_users(ExportFormat::Json, JSON_BODY).unwrap();
        let batch = UserBatch::from_body(ExportFormat::Json, JSON_BODY.into()).unwrap();
        assert_eq!(users, batch.users);
    }
}

//! The CrossRef authority record: a CSL JSON document as served by the
//! doi.org redirect service, projected onto the engine's datatypes.

use serde::Deserialize;

use crate::plugin::DataWrapper;

use super::unique;

/// The subset of a CSL JSON item the projection reads.
///
/// Example document:
///
/// ```json
/// {
///   "DOI": "10.1016/S0550-3213(01)00405-9",
///   "URL": "http://dx.doi.org/10.1016/S0550-3213(01)00405-9",
///   "author": [{"family": "McGuire", "given": "Scott"}],
///   "container-title": "Nuclear Physics B",
///   "issue": "3",
///   "issued": {"date-parts": [[2001, 11]]},
///   "page": "467-493",
///   "publisher": "Elsevier",
///   "title": "The Ising model on a dynamically triangulated disk",
///   "type": "article-journal",
///   "volume": "614"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CslRecord {
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Vec<CslName>,
    #[serde(rename = "container-title")]
    pub container_title: Option<String>,
    pub issue: Option<String>,
    pub issued: Option<CslDate>,
    pub page: Option<String>,
    pub publisher: Option<String>,
    pub title: Option<String>,
    pub volume: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CslName {
    #[serde(default)]
    pub given: String,
    #[serde(default)]
    pub family: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CslDate {
    #[serde(rename = "date-parts", default)]
    pub date_parts: Vec<Vec<i64>>,
}

impl CslRecord {
    /// Author display names, given name first.
    pub fn author_names(&self) -> Vec<String> {
        self.author
            .iter()
            .map(|name| format!("{} {}", name.given, name.family).trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Issued dates rendered at whatever granularity the record carries:
    /// `2001`, `2001-11`, or `2001-11-21`.
    pub fn issued_dates(&self) -> Vec<String> {
        let Some(issued) = &self.issued else {
            return Vec::new();
        };
        issued
            .date_parts
            .iter()
            .filter_map(|parts| match parts.as_slice() {
                [y] => Some(y.to_string()),
                [y, m] => Some(format!("{y}-{m}")),
                [y, m, d] => Some(format!("{y}-{m}-{d}")),
                _ => None,
            })
            .collect()
    }

    /// Derive a page facet from the record's hyphenated page range.
    pub fn page_facet(&self, datatype: &str) -> Option<String> {
        let range = self.page.as_deref()?;
        if matches!(datatype, "pages" | "page_range") {
            return Some(range.to_owned());
        }
        let (start, end) = range.split_once('-')?;
        match datatype {
            "start_page" => Some(start.to_owned()),
            "end_page" => Some(end.to_owned()),
            "page_count" => {
                let start: i64 = start.trim().parse().ok()?;
                let end: i64 = end.trim().parse().ok()?;
                Some((end - start).to_string())
            }
            _ => None,
        }
    }
}

/// Handle onto a CrossRef CSL record attached by the DOI validator.
pub struct CrossRefCsl {
    record: CslRecord,
}

impl CrossRefCsl {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            record: serde_json::from_str(body)?,
        })
    }
}

impl DataWrapper for CrossRefCsl {
    fn source_name(&self) -> &str {
        "crossref"
    }

    fn get(&self, datatype: &str) -> Vec<String> {
        let record = &self.record;
        let lower = datatype.to_ascii_lowercase();

        let values: Vec<String> = match lower.as_str() {
            "doi" => record.doi.iter().cloned().collect(),
            "publication_identifier" => {
                record.doi.iter().chain(record.url.iter()).cloned().collect()
            }
            "uri" | "url" => record.url.iter().cloned().collect(),
            "author" => record.author_names(),
            "journal" | "journal_name" | "journal_title" => {
                record.container_title.iter().cloned().collect()
            }
            "issue" => record.issue.iter().cloned().collect(),
            "issued_date" | "published_date" => record.issued_dates(),
            "pages" | "page_range" | "start_page" | "end_page" | "page_count" => {
                record.page_facet(&lower).into_iter().collect()
            }
            "publisher" => record.publisher.iter().cloned().collect(),
            "title" => record.title.iter().cloned().collect(),
            "volume" => record.volume.iter().cloned().collect(),
            _ => Vec::new(),
        };

        unique(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "DOI": "10.1016/S0550-3213(01)00405-9",
        "URL": "http://dx.doi.org/10.1016/S0550-3213(01)00405-9",
        "author": [
            {"family": "McGuire", "given": "Scott"},
            {"family": "Catterall", "given": "Simon"}
        ],
        "container-title": "Nuclear Physics B",
        "issue": "3",
        "issued": {"date-parts": [[2001, 11]]},
        "page": "467-493",
        "publisher": "Elsevier",
        "title": "The Ising model on a dynamically triangulated disk",
        "volume": "614"
    }"#;

    #[test]
    fn projects_identifiers() {
        let wrapper = CrossRefCsl::from_json(DOC).unwrap();
        assert_eq!(
            wrapper.get("publication_identifier"),
            [
                "10.1016/S0550-3213(01)00405-9",
                "http://dx.doi.org/10.1016/S0550-3213(01)00405-9"
            ]
        );
        assert_eq!(wrapper.get("doi"), ["10.1016/S0550-3213(01)00405-9"]);
    }

    #[test]
    fn projects_authors_and_dates() {
        let wrapper = CrossRefCsl::from_json(DOC).unwrap();
        assert_eq!(
            wrapper.get("author"),
            ["Scott McGuire", "Simon Catterall"]
        );
        assert_eq!(wrapper.get("published_date"), ["2001-11"]);
    }

    #[test]
    fn derives_page_facets() {
        let wrapper = CrossRefCsl::from_json(DOC).unwrap();
        assert_eq!(wrapper.get("start_page"), ["467"]);
        assert_eq!(wrapper.get("end_page"), ["493"]);
        assert_eq!(wrapper.get("page_count"), ["26"]);
        assert_eq!(wrapper.get("page_range"), ["467-493"]);
    }

    #[test]
    fn unknown_datatype_is_empty() {
        let wrapper = CrossRefCsl::from_json(DOC).unwrap();
        assert!(wrapper.get("embargo").is_empty());
    }

    #[test]
    fn tolerates_minimal_documents() {
        let wrapper = CrossRefCsl::from_json(r#"{"DOI": "10.1/x"}"#).unwrap();
        assert_eq!(wrapper.get("doi"), ["10.1/x"]);
        assert!(wrapper.get("author").is_empty());
        assert!(wrapper.get("page_count").is_empty());
    }
}

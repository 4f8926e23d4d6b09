//! PubMed identifier validation against the Entrez efetch service, and the
//! Entrez authority record projection.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use roxmltree::{Document, Node};

use crate::{
    options::Options,
    plugin::{Context, DataWrapper, ValidationResult, Validator},
};

use super::{dates::month_number, request, unique};

static PMID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,8}$").unwrap());

pub struct Pmid;

impl Validator for Pmid {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(datatype.to_ascii_lowercase().as_str(), "pmid" | "pubmed")
    }

    fn validate(&self, _datatype: &str, value: &str, ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();

        let stripped = match validate_format(value, &mut r) {
            Some(stripped) => stripped,
            None => return r,
        };

        validate_realism(&stripped, ctx, &mut r);
        r
    }
}

/// Strip tolerated prefixes and check the digit grammar. Returns the bare
/// identifier when it is well-formed.
fn validate_format(value: &str, r: &mut ValidationResult) -> Option<String> {
    let lower = value.to_ascii_lowercase();
    let mut stripped = lower.as_str();
    for prefix in ["pmc", "pmid"] {
        if let Some(rest) = stripped.strip_prefix(prefix) {
            stripped = rest;
        }
    }
    stripped = stripped.strip_prefix(':').unwrap_or(stripped);

    if stripped != lower {
        r.warn(
            "The PMID has a prefix; there is no standardisation of PMID expressions, \
             so this is legal, but it may confuse some systems",
        );
        r.correction(stripped);
    }

    if PMID_RE.is_match(stripped) {
        r.info("PMID meets the format criteria");
        Some(stripped.to_owned())
    } else {
        r.error("PMID does not match the form of a PMID (a number of up to 8 digits)");
        None
    }
}

fn validate_realism(pmid: &str, ctx: &Context<'_>, r: &mut ValidationResult) {
    let url = format!(
        "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi?db=pubmed&id={pmid}&retmode=xml"
    );
    let Some(response) = request(ctx, &url, None, "Entrez", r) else {
        return;
    };

    if response.is_denied() {
        r.error("Could not locate this PMID in the Entrez authority database");
    } else if response.is_server_error() {
        r.warn("Entrez returned a server error when attempting to retrieve this PMID");
    } else {
        match EntrezRecord::from_xml(&response.body) {
            Ok(record) => {
                r.info("Successfully resolved this PMID to a record in the Entrez database");
                r.data = Some(Arc::new(record));
            }
            Err(_) => {
                r.warn("the XML retrieved from Entrez for this PMID could not be parsed");
            }
        }
    }
}

/// Handle onto a PubMed article record fetched from Entrez.
///
/// The projection is extracted from the XML once, at construction.
pub struct EntrezRecord {
    article_ids: Vec<(String, String)>,
    issns: Vec<String>,
    issues: Vec<String>,
    published_dates: Vec<String>,
    journal_titles: Vec<String>,
    titles: Vec<String>,
    paginations: Vec<String>,
    languages: Vec<String>,
    publication_types: Vec<String>,
    abstracts: Vec<String>,
}

impl EntrezRecord {
    pub fn from_xml(body: &str) -> Result<Self, roxmltree::Error> {
        let doc = Document::parse(body)?;

        let mut record = Self {
            article_ids: Vec::new(),
            issns: Vec::new(),
            issues: Vec::new(),
            published_dates: Vec::new(),
            journal_titles: Vec::new(),
            titles: Vec::new(),
            paginations: Vec::new(),
            languages: Vec::new(),
            publication_types: Vec::new(),
            abstracts: Vec::new(),
        };

        for node in doc.descendants().filter(Node::is_element) {
            match node.tag_name().name() {
                "ArticleId" if has_ancestor(node, "ArticleIdList") => {
                    if let Some(text) = element_text(node) {
                        let id_type = node.attribute("IdType").unwrap_or("").to_owned();
                        record.article_ids.push((id_type, text));
                    }
                }
                "ISSN" | "ISSNLinking" => {
                    record.issns.extend(element_text(node));
                }
                "Issue" if has_ancestor(node, "JournalIssue") => {
                    record.issues.extend(element_text(node));
                }
                "PubDate" if has_ancestor(node, "JournalIssue") => {
                    record.published_dates.extend(pub_date(node));
                }
                "Title" | "ISOAbbreviation" if has_ancestor(node, "Journal") => {
                    record.journal_titles.extend(element_text(node));
                }
                "ArticleTitle" => {
                    record.titles.extend(element_text(node));
                }
                "MedlinePgn" => {
                    record.paginations.extend(element_text(node));
                }
                "Language" => {
                    record.languages.extend(element_text(node));
                }
                "PublicationType" => {
                    record.publication_types.extend(element_text(node));
                }
                "AbstractText" => {
                    record.abstracts.extend(element_text(node));
                }
                _ => {}
            }
        }

        Ok(record)
    }

    fn ids_of_type(&self, id_type: &str) -> Vec<String> {
        self.article_ids
            .iter()
            .filter(|(kind, _)| kind == id_type)
            .map(|(_, id)| id.clone())
            .collect()
    }

    fn page_facet(&self, datatype: &str) -> Vec<String> {
        self.paginations
            .iter()
            .filter_map(|range| {
                if matches!(datatype, "pages" | "page_range") {
                    return Some(range.clone());
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
            })
            .collect()
    }
}

impl DataWrapper for EntrezRecord {
    fn source_name(&self) -> &str {
        "entrez"
    }

    fn get(&self, datatype: &str) -> Vec<String> {
        let lower = datatype.to_ascii_lowercase();
        let values = match lower.as_str() {
            "doi" => self.ids_of_type("doi"),
            "pmid" => self.ids_of_type("pubmed"),
            "publication_identifier" => {
                self.article_ids.iter().map(|(_, id)| id.clone()).collect()
            }
            "issn" => self.issns.clone(),
            "issue" => self.issues.clone(),
            "published_date" | "issued_date" => self.published_dates.clone(),
            "journal_title" | "journal_name" | "journal" => self.journal_titles.clone(),
            "title" => self.titles.clone(),
            "pages" | "page_range" | "start_page" | "end_page" | "page_count" => {
                self.page_facet(&lower)
            }
            "language" | "iso-639-2" => self.languages.clone(),
            "publication_type" => self.publication_types.clone(),
            "abstract" => self.abstracts.clone(),
            _ => Vec::new(),
        };

        unique(values)
    }
}

fn element_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

fn has_ancestor(node: Node<'_, '_>, name: &str) -> bool {
    node.ancestors().skip(1).any(|a| a.tag_name().name() == name)
}

/// Assemble a `Year[-Month[-Day]]` string from a PubDate element, mapping
/// English month abbreviations onto their numbers.
fn pub_date(node: Node<'_, '_>) -> Option<String> {
    let mut year = None;
    let mut month = None;
    let mut day = None;
    for child in node.children().filter(Node::is_element) {
        let text = element_text(child);
        match child.tag_name().name() {
            "Year" => year = text,
            "Month" => month = text,
            "Day" => day = text,
            _ => {}
        }
    }

    let mut date = year?;
    if let Some(month) = month {
        let month = match month_number(&month) {
            Some(number) => format!("{number:02}"),
            None => month,
        };
        date.push('-');
        date.push_str(&month);
        if let Some(day) = day {
            date.push('-');
            date.push_str(&day);
        }
    }
    Some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <Article>
        <Journal>
          <ISSN IssnType="Print">0916-0582</ISSN>
          <JournalIssue>
            <Issue>40</Issue>
            <PubDate><Year>1994</Year><Month>Jun</Month></PubDate>
          </JournalIssue>
          <Title>Integration (Tokyo, Japan)</Title>
          <ISOAbbreviation>Integration</ISOAbbreviation>
        </Journal>
        <ArticleTitle>Denpasar Declaration on Population and Development.</ArticleTitle>
        <Pagination><MedlinePgn>27-9</MedlinePgn></Pagination>
        <Language>eng</Language>
        <PublicationTypeList>
          <PublicationType>Journal Article</PublicationType>
        </PublicationTypeList>
      </Article>
      <MedlineJournalInfo>
        <ISSNLinking>0916-0582</ISSNLinking>
      </MedlineJournalInfo>
    </MedlineCitation>
    <PubmedData>
      <ArticleIdList>
        <ArticleId IdType="pubmed">12345678</ArticleId>
        <ArticleId IdType="doi">10.1000/example</ArticleId>
      </ArticleIdList>
    </PubmedData>
  </PubmedArticle>
</PubmedArticleSet>"#;

    #[test]
    fn projects_identifiers() {
        let record = EntrezRecord::from_xml(DOC).unwrap();
        assert_eq!(record.get("pmid"), ["12345678"]);
        assert_eq!(record.get("doi"), ["10.1000/example"]);
        assert_eq!(
            record.get("publication_identifier"),
            ["12345678", "10.1000/example"]
        );
    }

    #[test]
    fn deduplicates_linking_issn() {
        let record = EntrezRecord::from_xml(DOC).unwrap();
        assert_eq!(record.get("issn"), ["0916-0582"]);
    }

    #[test]
    fn maps_month_names_in_pub_dates() {
        let record = EntrezRecord::from_xml(DOC).unwrap();
        assert_eq!(record.get("published_date"), ["1994-06"]);
    }

    #[test]
    fn projects_journal_titles_and_language() {
        let record = EntrezRecord::from_xml(DOC).unwrap();
        assert_eq!(
            record.get("journal_title"),
            ["Integration (Tokyo, Japan)", "Integration"]
        );
        assert_eq!(record.get("language"), ["eng"]);
        assert_eq!(record.get("iso-639-2"), ["eng"]);
    }

    #[test]
    fn derives_pages() {
        let record = EntrezRecord::from_xml(DOC).unwrap();
        assert_eq!(record.get("page_range"), ["27-9"]);
        assert_eq!(record.get("start_page"), ["27"]);
        assert_eq!(record.get("end_page"), ["9"]);
    }

    #[test]
    fn format_strips_prefixes() {
        let mut r = ValidationResult::new();
        let stripped = validate_format("PMID:12345678", &mut r);
        assert_eq!(stripped.as_deref(), Some("12345678"));
        assert!(r.has_warnings());
        assert_eq!(r.corrections(), ["12345678"]);
    }

    #[test]
    fn format_rejects_long_numbers() {
        let mut r = ValidationResult::new();
        assert!(validate_format("123456789", &mut r).is_none());
        assert!(r.has_errors());
    }
}

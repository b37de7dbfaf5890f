//! Integration tests for arXiv Cite
//!
//! These tests exercise the public API end to end: metadata in, BibTeX out.

use arxiv_cite::authors::{ArxivAuthorParser, AuthorParser};
use arxiv_cite::cite::{arxiv_bibtex, citation_key, normalize_whitespace, CitationBuilder};
use arxiv_cite::input::{parse_metadata, InputFormat};
use arxiv_cite::models::{AuthorEntry, DocMetadata, DocMetadataBuilder};
use chrono::{TimeZone, Utc};

fn paper(title: &str, authors: &str, year: Option<i32>, category: Option<&str>) -> DocMetadata {
    let mut builder = DocMetadataBuilder::new("1234.5678", title).authors(authors);
    if let Some(year) = year {
        builder = builder
            .version(1)
            .submitted(1, Utc.with_ymd_and_hms(year, 1, 15, 9, 30, 0).unwrap());
    }
    if let Some(category) = category {
        builder = builder.primary_category(category);
    }
    builder.build()
}

#[test]
fn test_end_to_end_bibtex() {
    let doc = paper("Deep Learning Methods", "Y. Lecun", Some(2015), Some("cs.LG"));

    assert_eq!(
        arxiv_bibtex(&doc),
        "@misc{lecun2015deep,\n      title={Deep Learning Methods}, \n      author={Y. Lecun},\n      year={2015},\n      eprint={1234.5678},\n      archivePrefix={arXiv},\n      primaryClass={cs.LG}\n}"
    );
}

#[test]
fn test_end_to_end_with_fixed_parser() {
    let builder = CitationBuilder::new(|_: &str| vec![AuthorEntry::new(["Lecun", "Y."])]);
    let doc = paper("Deep Learning Methods", "ignored", Some(2015), Some("cs.LG"));

    let citation = builder.cite(&doc);
    assert_eq!(citation.key, "lecun2015deep");
    assert_eq!(citation.authors, "Y. Lecun");
    assert_eq!(citation.year, "2015");
}

#[test]
fn test_multiline_title_and_many_authors() {
    let doc = paper(
        "The\n  Anatomy of a Large-Scale\n Hypertextual Web Search Engine",
        "Sergey Brin (Stanford), Lawrence Page (Stanford)",
        Some(1998),
        Some("cs.IR"),
    );

    let citation = CitationBuilder::default().cite(&doc);
    assert_eq!(
        citation.title,
        "The Anatomy of a Large-Scale Hypertextual Web Search Engine"
    );
    assert_eq!(citation.authors, "Sergey Brin and Lawrence Page");
    // "The\n" is not the stopword "the", so it is the key's title word
    assert_eq!(citation.key, "brin1998the");
}

#[test]
fn test_suffix_in_output() {
    let doc = paper("Quantum Gravity", "John Smith Jr., Ann Lee", Some(2001), Some("gr-qc"));
    let bibtex = arxiv_bibtex(&doc);
    assert!(bibtex.contains("author={John Smith Jr au2 and Ann Lee},\n"));
    assert!(bibtex.starts_with("@misc{smith2001quantum,\n"));
}

#[test]
fn test_fully_degraded_metadata() {
    let doc = paper("", "", None, None);
    let bibtex = arxiv_bibtex(&doc);

    assert!(bibtex.starts_with("@misc{unknownunknownunknown,\n"));
    assert!(bibtex.contains("      title={}, \n"));
    assert!(bibtex.contains("      author={},\n"));
    assert!(bibtex.contains("      year={unknown},\n"));
    assert!(bibtex.contains("      primaryClass={unknown}\n}"));
}

#[test]
fn test_output_is_deterministic() {
    let doc = paper("On the Electrodynamics of Moving Bodies", "A. Einstein", Some(1905), Some("physics.gen-ph"));
    let first = arxiv_bibtex(&doc);
    for _ in 0..10 {
        assert_eq!(arxiv_bibtex(&doc), first);
    }
    assert!(first.starts_with("@misc{einstein1905electrodynamics,"));
}

#[test]
fn test_parallel_calls_agree() {
    let doc = paper("Graph Neural Networks", "Thomas Kipf, Max Welling", Some(2016), Some("cs.LG"));
    let expected = arxiv_bibtex(&doc);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = doc.clone();
            std::thread::spawn(move || arxiv_bibtex(&doc))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_key_from_parsed_authors() {
    let doc = DocMetadata::new("1234.5678", "The Graph-Theory Problem");
    let authors = ArxivAuthorParser.parse("Kevin O'Brien");
    assert_eq!(citation_key(&doc, &authors, "2020"), "obrien2020graphtheory");
}

#[test]
fn test_normalization_properties() {
    for title in ["", "   ", "\n\t", "a  b\n c", "  Lead and trail  "] {
        let once = normalize_whitespace(title);
        assert_eq!(normalize_whitespace(&once), once);
        if title.trim().is_empty() {
            assert_eq!(once, "");
        }
    }
}

#[test]
fn test_metadata_document_to_bibtex() {
    let doc = parse_metadata(
        r#"{
            "arxiv_id": "1706.03762",
            "title": "Attention Is All You Need",
            "authors": "Ashish Vaswani, Noam Shazeer, Niki Parmar",
            "primary_category": "cs.CL",
            "version": 2,
            "version_history": [
                {"version": 1, "submitted": "2017-06-12T17:57:34Z"},
                {"version": 2, "submitted": "2017-06-19T16:32:28Z"}
            ]
        }"#,
        InputFormat::Json,
    )
    .unwrap();

    let citation = CitationBuilder::default().cite(&doc);
    assert_eq!(citation.key, "vaswani2017attention");
    assert_eq!(citation.eprint, "1706.03762");
    assert_eq!(citation.primary_class, "cs.CL");
    assert_eq!(
        citation.authors,
        "Ashish Vaswani and Noam Shazeer and Niki Parmar"
    );
}

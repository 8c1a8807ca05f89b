//! Resolution pipeline tests against a scripted transport

mod common;

use std::time::Duration;

use common::*;
use im_worldcat::config::DEFAULT_REFERER;
use im_worldcat::{
    CatalogConfig, CrossReference, IdentifierBatch, IdentifierResolver, RecordDisposition,
    ResolveError, SessionError, SessionSource,
};
use serde_json::json;

fn batch(isbns: &[&str], oclc: &[&str]) -> IdentifierBatch {
    IdentifierBatch::new(
        isbns.iter().map(|s| s.to_string()).collect(),
        oclc.iter().map(|s| s.to_string()).collect(),
    )
}

fn oclc_of(disposition: &RecordDisposition) -> Option<String> {
    match disposition {
        RecordDisposition::Normalize(record) => record.oclc_number(),
        RecordDisposition::Redirect(_) => None,
    }
}

#[tokio::test]
async fn test_empty_batch_makes_no_requests() {
    let transport = ScriptedTransport::new();
    let resolver = IdentifierResolver::new(transport.clone(), CatalogConfig::default());

    let err = resolver.resolve_collect(&batch(&[], &[])).await.unwrap_err();

    assert!(matches!(err, ResolveError::EmptyBatch));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_all_sources_failing_aborts_before_search() {
    let transport = ScriptedTransport::new();
    let resolver = IdentifierResolver::new(transport.clone(), CatalogConfig::default());

    let err = resolver
        .resolve_collect(&batch(&["9780585030159"], &["42854423"]))
        .await
        .unwrap_err();

    match err {
        ResolveError::NoSession { attempts } => {
            let names: Vec<_> = attempts.iter().map(|a| a.source_name.as_str()).collect();
            assert_eq!(names, vec!["live", "search-cache", "web-archive"]);
        }
        other => panic!("expected NoSession, got {other:?}"),
    }
    assert_eq!(transport.requests().len(), 3);
    assert!(transport.searches().is_empty());
}

#[tokio::test]
async fn test_native_numbers_single_query_with_session_headers() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.json(
        "https://www.worldcat.org/api/search?q=no%3A42854423",
        brief_records(vec![json!({"oclcNumber": "42854423", "title": "Newman"})]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&[], &["42854423"]))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(oclc_of(&records[0]).as_deref(), Some("42854423"));
    assert_eq!(summary.native_records, 1);
    assert_eq!(summary.isbn_records, 0);

    let searches = transport.searches();
    assert_eq!(searches.len(), 1);
    assert!(searches[0].url.contains("no%3A42854423"));
    assert_eq!(searches[0].header("Cookie"), Some("wc_tkn=tok%2Ben%2F1%3D"));
    assert_eq!(searches[0].header("Referer"), Some(DEFAULT_REFERER));
}

#[tokio::test]
async fn test_native_numbers_joined_with_or() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    let url = "https://www.worldcat.org/api/search?q=no%3A42854423+OR+no%3A676747555";
    transport.json(
        url,
        brief_records(vec![
            json!({"oclcNumber": "42854423"}),
            json!({"oclcNumber": 676747555}),
        ]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&[], &["42854423", "676747555"]))
        .await
        .unwrap();

    assert_eq!(transport.searches().len(), 1);
    assert_eq!(transport.searches()[0].url, url);
    assert_eq!(summary.native_records, 2);
    let numbers: Vec<_> = records.iter().filter_map(oclc_of).collect();
    assert_eq!(numbers, vec!["42854423", "676747555"]);
}

#[tokio::test]
async fn test_isbn_queried_in_hyphenated_form() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        brief_records(vec![json!({"oclcNumber": "42854423"})]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&["9780585030159"], &[]))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(summary.isbn_records, 1);
    let searches = transport.searches();
    assert_eq!(searches.len(), 1);
    assert!(searches[0].url.ends_with("q=bn%3A978-0-585-03015-9"));
}

#[tokio::test]
async fn test_partial_failure_keeps_remaining_records() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    // No range covers 979-0, so it is queried bare and finds nothing
    transport.json(&isbn_search_url(&config, "9790000000001"), brief_records(vec![]));
    transport.fail(&isbn_search_url(&config, "978-0-306-40615-7"), 500);
    transport.json(
        &isbn_search_url(&config, "978-0-321-12521-7"),
        brief_records(vec![json!({"oclcNumber": "50773245"})]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&["9790000000001", "9780306406157", "9780321125217"], &[]))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(oclc_of(&records[0]).as_deref(), Some("50773245"));
    assert_eq!(summary.failed_isbns, vec!["9780306406157"]);
    assert_eq!(summary.unmatched_isbns, vec!["9790000000001"]);
    assert_eq!(transport.searches().len(), 3);
}

#[tokio::test]
async fn test_falls_back_to_search_cache() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    transport.fail(&config.session_sources[0].document_url, 503);
    transport.document(&SessionSource::search_cache().document_url, next_data_page(BUILD_ID));
    transport.json(&token_url(&config), token_json(TOKEN));
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        brief_records(vec![json!({"oclcNumber": "42854423"})]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, _) = resolver
        .resolve_collect(&batch(&["9780585030159"], &[]))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls[0], "https://www.worldcat.org/");
    assert!(urls[1].starts_with("https://webcache.googleusercontent.com/"));
    assert_eq!(
        urls[2],
        format!("https://www.worldcat.org/_next/data/{}/en/search.json", BUILD_ID)
    );
    assert!(!urls.iter().any(|u| u.starts_with("https://web.archive.org/")));
}

#[tokio::test]
async fn test_page_without_build_id_falls_back() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    transport.document(
        &config.session_sources[0].document_url,
        "<html><body>Service maintenance</body></html>",
    );
    transport.document(&SessionSource::search_cache().document_url, next_data_page(BUILD_ID));
    transport.json(&token_url(&config), token_json(TOKEN));
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        brief_records(vec![json!({"oclcNumber": "42854423"})]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, _) = resolver
        .resolve_collect(&batch(&["9780585030159"], &[]))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        transport.searches()[0].header("Cookie"),
        Some("wc_tkn=tok%2Ben%2F1%3D")
    );
}

#[tokio::test]
async fn test_token_document_without_token_falls_back() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    transport.document(&config.session_sources[0].document_url, next_data_page("stale"));
    transport.json(&config.token_url("stale"), json!({"pageProps": {}}));
    transport.document(&SessionSource::search_cache().document_url, next_data_page(BUILD_ID));
    transport.json(&token_url(&config), token_json(TOKEN));

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let session = resolver.session().await.unwrap();

    assert_eq!(session.token(), TOKEN);
    let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls.len(), 4);
    assert!(urls[1].contains("/_next/data/stale/"));
    assert!(urls[2].starts_with("https://webcache.googleusercontent.com/"));
}

#[tokio::test]
async fn test_no_session_reports_each_parse_failure() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    for source in &config.session_sources {
        transport.document(&source.document_url, "<html></html>");
    }

    let resolver = IdentifierResolver::new(transport.clone(), config);
    match resolver.session().await.unwrap_err() {
        ResolveError::NoSession { attempts } => {
            assert_eq!(attempts.len(), 3);
            assert!(attempts
                .iter()
                .all(|a| matches!(a.error, SessionError::MissingNextData)));
        }
        other => panic!("expected NoSession, got {other:?}"),
    }
}

#[tokio::test]
async fn test_doi_record_is_redirected() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.json(
        "https://www.worldcat.org/api/search?q=no%3A4933578953",
        brief_records(vec![json!({
            "oclcNumber": "4933578953",
            "doi": "10.1016/j.asieco.2009.02.011",
        })]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&[], &["4933578953"]))
        .await
        .unwrap();

    assert_eq!(
        records,
        vec![RecordDisposition::Redirect(CrossReference::Doi(
            "10.1016/j.asieco.2009.02.011".to_string()
        ))]
    );
    assert_eq!(summary.redirected, 1);
}

#[tokio::test]
async fn test_only_first_record_per_isbn() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        brief_records(vec![
            json!({"oclcNumber": "1"}),
            json!({"oclcNumber": "2"}),
            json!({"oclcNumber": "3"}),
        ]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&["9780585030159"], &[]))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(oclc_of(&records[0]).as_deref(), Some("1"));
    assert_eq!(summary.isbn_records, 1);
}

#[tokio::test]
async fn test_zero_results_is_not_an_error() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        json!({"numberOfRecords": 0}),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&["9780585030159"], &[]))
        .await
        .unwrap();

    assert!(records.is_empty());
    assert!(summary.is_empty());
    assert_eq!(summary.unmatched_isbns, vec!["9780585030159"]);
}

#[tokio::test]
async fn test_native_query_runs_before_isbn_queries() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.json(
        "https://www.worldcat.org/api/search?q=no%3A42854423",
        brief_records(vec![json!({"oclcNumber": "42854423"})]),
    );
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        brief_records(vec![json!({"oclcNumber": "765821302"})]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, _) = resolver
        .resolve_collect(&batch(&["9780585030159"], &["42854423"]))
        .await
        .unwrap();

    let searches = transport.searches();
    assert_eq!(searches.len(), 2);
    assert!(searches[0].url.contains("no%3A"));
    assert!(searches[1].url.contains("bn%3A"));
    let numbers: Vec<_> = records.iter().filter_map(oclc_of).collect();
    assert_eq!(numbers, vec!["42854423", "765821302"]);
}

#[tokio::test]
async fn test_native_query_failure_is_contained() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.fail("https://www.worldcat.org/api/search?q=no%3A42854423", 500);
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        brief_records(vec![json!({"oclcNumber": "765821302"})]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&["9780585030159"], &["42854423"]))
        .await
        .unwrap();

    assert!(summary.native_query_failed);
    assert_eq!(summary.native_records, 0);
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_custom_session_chain() {
    let config = CatalogConfig::from_toml_str(
        r#"
        base_url = "https://catalog.test"
        referer = "https://catalog.test/search?q="

        [[session_sources]]
        name = "mirror"
        document_url = "https://mirror.test/"
        "#,
    )
    .unwrap();
    let transport = ScriptedTransport::new();
    transport.document("https://mirror.test/", next_data_page(BUILD_ID));
    transport.json(&token_url(&config), token_json("abc"));
    transport.json(
        "https://catalog.test/api/search?q=no%3A7",
        brief_records(vec![json!({"oclcNumber": "7"})]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, _) = resolver.resolve_collect(&batch(&[], &["7"])).await.unwrap();

    assert_eq!(records.len(), 1);
    let search = &transport.searches()[0];
    assert_eq!(search.header("Cookie"), Some("wc_tkn=abc"));
    assert_eq!(search.header("Referer"), Some("https://catalog.test/search?q="));
}

#[tokio::test]
async fn test_delivered_records_survive_cancellation() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        brief_records(vec![json!({"oclcNumber": "42854423"})]),
    );
    transport.pending(&isbn_search_url(&config, "978-0-321-12521-7"));

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let isbns = batch(&["9780585030159", "9780321125217"], &[]);
    let mut sink: Vec<RecordDisposition> = Vec::new();

    let outcome = tokio::time::timeout(
        Duration::from_millis(50),
        resolver.resolve(&isbns, &mut sink),
    )
    .await;

    assert!(outcome.is_err(), "resolution should still be waiting");
    assert_eq!(sink.len(), 1);
    assert_eq!(oclc_of(&sink[0]).as_deref(), Some("42854423"));
    assert_eq!(transport.searches().len(), 2);
}

#[tokio::test]
async fn test_malformed_later_element_keeps_first_record() {
    let config = CatalogConfig::default();
    let transport = ScriptedTransport::new();
    script_live_session(&transport, &config);
    transport.json(
        &isbn_search_url(&config, "978-0-585-03015-9"),
        brief_records(vec![json!({"oclcNumber": "42854423"}), json!("garbled")]),
    );

    let resolver = IdentifierResolver::new(transport.clone(), config);
    let (records, summary) = resolver
        .resolve_collect(&batch(&["9780585030159"], &[]))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(summary.isbn_records, 1);
    assert!(summary.failed_isbns.is_empty());
}

//! End-to-end tests for the catalog REPL and its image picker

use std::time::Duration;

use class_catalog::catalog::{ClassCatalog, ClassType};
use class_catalog::cli::Session;
use tokio::io::{AsyncWriteExt, BufReader};

mod common;
use common::{ScriptedClient, page, test_config};

async fn run_script(script: &str) -> (Session<ScriptedClient>, String) {
    let mut session = Session::new(
        ClassCatalog::with_sample_classes(),
        ScriptedClient::new(),
        test_config(),
    );
    let mut output = Vec::new();
    session.run(script.as_bytes(), &mut output).await.unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_list_show_and_delete() {
    let (session, output) = run_script("list\nshow 2\ndelete 1\nshow 1\nquit\n").await;

    assert!(output.starts_with("Welcome to RookieCookie!"));
    assert!(output.contains("#1 Knife Skills 101 with Ana Ortiz (30 min, On Demand)"));
    assert!(output.contains("Weeknight Pasta\n  Instructor:  Marco Bellini"));
    assert!(output.contains("Deleted 'Knife Skills 101'"));
    assert!(output.contains("Class 1 not found"));
    assert_eq!(session.catalog().len(), 2);
}

#[tokio::test]
async fn test_unknown_command_is_reported() {
    let (_, output) = run_script("dance\n").await;
    assert!(output.contains("unknown command 'dance' (try 'help')"));
}

#[tokio::test]
async fn test_create_without_image() {
    let script = "create\nSoup Night\nSam\nThree soups\nforty\n40\nlive\n:skip\nlist\n";
    let (session, output) = run_script(script).await;

    assert!(output.contains("Duration must be a whole number of minutes"));
    assert!(output.contains("Created class #4"));
    assert!(output.contains("#4 Soup Night with Sam (40 min, Live)"));

    let record = session.catalog().get(4).unwrap();
    assert_eq!(record.class_type, ClassType::Live);
    assert!(record.featured_image.is_empty());
}

#[tokio::test]
async fn test_create_reports_validation_errors() {
    let script = "create\n\nSam\n\n0\n\n:skip\nquit\n";
    let (session, output) = run_script(script).await;

    assert!(output.contains("Title is required"));
    assert!(output.contains("Description is required"));
    assert_eq!(session.catalog().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_create_with_picked_image() {
    let client = ScriptedClient::new();
    client.respond("pasta", 1, Ok(page(1, &["penne", "fusilli", "orzo"])));
    let mut session = Session::new(ClassCatalog::new(), client, test_config());

    let (mut input, reader) = tokio::io::duplex(1024);
    let handle = tokio::spawn(async move {
        let mut output = Vec::new();
        session
            .run(BufReader::new(reader), &mut output)
            .await
            .unwrap();
        (session, String::from_utf8(output).unwrap())
    });

    input
        .write_all(b"create\nPasta Lab\nMarco\nFresh shapes\n60\n\npasta\n")
        .await
        .unwrap();
    // Past the debounce interval so the search runs and renders
    tokio::time::sleep(Duration::from_secs(1)).await;
    input.write_all(b":pick 2\nquit\n").await.unwrap();
    drop(input);

    let (session, output) = handle.await.unwrap();

    assert!(output.contains("Searching for 'pasta'..."));
    assert!(output.contains("  2. photo fusilli  https://img/fusilli"));
    assert!(output.contains("page 1 of 1"));
    assert!(output.contains("Selected https://img/fusilli"));
    assert!(output.contains("Created class #1"));

    let record = session.catalog().get(1).unwrap();
    assert_eq!(record.featured_image, "https://img/fusilli");
    assert_eq!(record.class_type, ClassType::OnDemand);
}

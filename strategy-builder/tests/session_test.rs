use anyhow::Result;
use std::path::PathBuf;
use strategy::{Catalog, PoolId};
use strategy_builder::persistence::load_catalog;
use strategy_builder::session::Session;
use strategy_builder::StrategyBuilder;

fn fixture_catalog() -> Result<Catalog> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json");
    load_catalog(&path)
}

fn run_script(builder: StrategyBuilder, script: &str) -> Result<(StrategyBuilder, String)> {
    let mut session = Session::new(builder, Vec::new());
    session.run(script.as_bytes())?;
    let (builder, output) = session.into_parts();
    Ok((builder, String::from_utf8(output)?))
}

#[test]
fn test_fixture_pool_rows() -> Result<()> {
    let builder = StrategyBuilder::new(fixture_catalog()?, vec![]);
    let labels: Vec<String> = builder.pool_rows().into_iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["LUNA / UST", "ASTRO / UST", "MARS / Unknown"]);
    Ok(())
}

#[test]
fn test_session_saves_weighted_strategy() -> Result<()> {
    let builder = StrategyBuilder::new(fixture_catalog()?, vec![]);
    let script = "\
name Balanced
set A 100
set B 300
save
list
";
    let (builder, output) = run_script(builder, script)?;

    let store = builder.get_store();
    assert_eq!(store.len(), 1);
    let saved = store.get(0).unwrap();
    assert_eq!(saved.get_name(), "Balanced");
    assert!((saved.get_total_value() - 400.0).abs() < 1e-9);
    assert!(
        (saved.get_weighted_yield() - 0.175).abs() < 1e-9,
        "Yield mismatch: {}",
        saved.get_weighted_yield()
    );

    assert!(output.contains("Saved:\n#1 Balanced"));
    assert!(output.contains("Total Value:    $400.00"));
    assert!(output.contains("Expected Yield: 17.50%"));
    assert!(output.contains("ASTRO / UST  $300.00"));

    // Draft was reset after saving
    assert!(builder.get_draft().get_allocations().is_empty());
    Ok(())
}

#[test]
fn test_session_rejects_incomplete_drafts() -> Result<()> {
    let builder = StrategyBuilder::new(fixture_catalog()?, vec![]);
    let script = "\
save
set A 50
save
name Later
set A abc
save
";
    let (builder, output) = run_script(builder, script)?;

    assert!(builder.get_store().is_empty());
    assert_eq!(output.matches("Nothing saved").count(), 3);
    Ok(())
}

#[test]
fn test_session_reports_bad_commands_and_continues() -> Result<()> {
    let builder = StrategyBuilder::new(fixture_catalog()?, vec![PoolId::new("B")]);
    let script = "\
deposit 10
set
set A 100
set B 40
name Only B
save
quit
name Never
";
    let (builder, output) = run_script(builder, script)?;

    assert!(output.contains("Unknown command 'deposit'"));
    assert!(output.contains("Usage: set <pool> <amount>"));

    // Pool A is not selected, so only B was allocated
    let saved = builder.get_store().last().unwrap();
    assert_eq!(saved.get_allocations().len(), 1);
    assert_eq!(saved.get_allocations()[0].get_pool_id().as_str(), "B");
    assert!((saved.get_weighted_yield() - 0.20).abs() < 1e-9);

    // Input after quit is not processed
    assert_eq!(builder.get_draft().get_name(), "");
    Ok(())
}

#[test]
fn test_saved_strategies_are_independent_snapshots() -> Result<()> {
    let builder = StrategyBuilder::new(fixture_catalog()?, vec![]);
    let script = "\
name First
set A 10
save
name Second
set B 20
set C 20
save
";
    let (builder, _) = run_script(builder, script)?;

    let names: Vec<&str> = builder.get_store().iter().map(|s| s.get_name()).collect();
    assert_eq!(names, vec!["First", "Second"]);

    let first = builder.get_store().get(0).unwrap();
    assert!((first.get_total_value() - 10.0).abs() < 1e-9);

    // Pool C lists no APR, so it dilutes the yield
    let second = builder.get_store().get(1).unwrap();
    assert!((second.get_total_value() - 40.0).abs() < 1e-9);
    assert!((second.get_weighted_yield() - 0.10).abs() < 1e-9);
    Ok(())
}

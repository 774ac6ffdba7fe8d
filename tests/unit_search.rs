// tests/unit_search.rs
//! Tests for the on-disk context search.

use anyhow::Result;
use skillgraph_core::search::{names_pattern, ContextSearch, WalkSearch};
use std::fs;
use tempfile::tempdir;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_blocks_from_several_files_are_separated() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.md"), "intro\ncalls alpha\noutro\n")?;
    fs::write(dir.path().join("b.md"), "mentions BETA here\n")?;

    let re = names_pattern(&names(&["alpha", "beta"]))?;
    let text = WalkSearch::new(1).search(dir.path(), &re)?;
    assert_eq!(text, "intro\ncalls alpha\noutro\n--\nmentions BETA here");
    Ok(())
}

#[test]
fn test_binary_files_are_skipped() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, b'a', b'l', b'p', b'h', b'a'])?;
    fs::write(dir.path().join("text.md"), "no names\n")?;

    let re = names_pattern(&names(&["alpha"]))?;
    assert_eq!(WalkSearch::new(5).search(dir.path(), &re)?, "");
    Ok(())
}

#[test]
fn test_missing_directory_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let re = names_pattern(&names(&["alpha"]))?;
    assert!(WalkSearch::new(5).search(&dir.path().join("gone"), &re).is_err());
    Ok(())
}

#[test]
fn test_unrelated_text_outside_window_is_not_captured() -> Result<()> {
    let dir = tempdir()?;
    let mut body = String::from("requires\n");
    body.push_str(&"x\n".repeat(10));
    body.push_str("alpha\n");
    fs::write(dir.path().join("s.md"), body)?;

    let re = names_pattern(&names(&["alpha"]))?;
    let text = WalkSearch::new(5).search(dir.path(), &re)?;
    assert!(!text.contains("requires"));
    assert!(text.ends_with("alpha"));
    Ok(())
}

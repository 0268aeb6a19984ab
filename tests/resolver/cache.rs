use std::{sync::Arc, thread};

use anyhow::Result;
use langfall::Resolver;
use pretty_assertions::assert_eq;

use crate::Fixture;

#[test]
fn test_second_get_does_not_touch_storage() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.source("hu", &[("welcome", "Szia")])?;
    let (resolver, loader) = fixture.counted_resolver("default");

    let first = resolver.get("hu").unwrap();
    let calls = loader.storage_calls();
    let second = resolver.get("hu").unwrap();

    assert_eq!(loader.storage_calls(), calls);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
    Ok(())
}

#[test]
fn test_cached_entries_survive_source_changes() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.source("hu", &[("welcome", "Szia")])?;
    let resolver = fixture.resolver("default");

    assert_eq!(resolver.text("hu", "welcome")?, "Szia");

    fixture.source("hu", &[("welcome", "Helló")])?;
    assert_eq!(resolver.text("hu", "welcome")?, "Szia");
    Ok(())
}

#[test]
fn test_exists_answers_from_cache() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.source("hu", &[("welcome", "Szia")])?;
    let (resolver, loader) = fixture.counted_resolver("default");

    assert!(resolver.get("hu").is_some());
    fixture.remove_file("hu.json")?;
    let calls = loader.exists_calls();

    assert!(resolver.exists("hu"));
    assert_eq!(loader.exists_calls(), calls);
    Ok(())
}

#[test]
fn test_root_change_does_not_invalidate() -> Result<()> {
    let first = Fixture::new()?;
    first.source("hu", &[("welcome", "first")])?;
    let second = Fixture::new()?;
    second.source("hu", &[("welcome", "second")])?;
    second.source("de", &[("welcome", "zweite")])?;

    let resolver = first.resolver("default");
    assert_eq!(resolver.text("hu", "welcome")?, "first");

    resolver.set_path(second.root_str());
    assert_eq!(resolver.text("hu", "welcome")?, "first");
    assert_eq!(resolver.text("de", "welcome")?, "zweite");
    Ok(())
}

#[test]
fn test_concurrent_first_lookups_converge() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.source("hu", &[("welcome", "Szia")])?;
    let resolver: Arc<Resolver> = Arc::new(fixture.resolver("default"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || resolver.get("hu"))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    let cached = resolver.cached("hu").unwrap();
    for messages in &results {
        assert!(Arc::ptr_eq(messages, &cached));
    }
    Ok(())
}

#[test]
fn test_preload_warms_cache() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.source("en", &[("welcome", "Welcome")])?;
    fixture.source("hu", &[("welcome", "Szia")])?;
    let (resolver, loader) = fixture.counted_resolver("default");

    assert_eq!(resolver.preload(&["en", "hu"]), 2);
    let calls = loader.storage_calls();

    assert_eq!(resolver.text("hu", "welcome")?, "Szia");
    assert_eq!(resolver.text("en", "welcome")?, "Welcome");
    assert_eq!(loader.storage_calls(), calls);
    Ok(())
}

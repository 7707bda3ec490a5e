use std::fs;

use chess_deck_core::deck::{batch_fragment, BATCH_SIZE};
use chess_deck_core::{accepted_set, render_deck, BatchOffsets, BishopRule, DeckConfig, Error};
use tempfile::TempDir;

const MINIMAL_TEMPLATE: &str = "A\n\\def\\wholeCard{X}\n B\n";

fn config_in(dir: &TempDir, template: &str) -> DeckConfig {
    let template_path = dir.path().join("chess_card.tex");
    fs::write(&template_path, template).unwrap();

    DeckConfig {
        template: template_path,
        out_dir: dir.path().join("deckTex"),
        ..DeckConfig::default()
    }
}

fn card_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[test]
fn single_batch_against_minimal_template() {
    let dir = TempDir::new().unwrap();
    let config = DeckConfig {
        batches: Some(1),
        ..config_in(&dir, MINIMAL_TEMPLATE)
    };

    let summary = render_deck(&config).unwrap();
    assert_eq!(summary.files_written, 1);
    assert_eq!(summary.arrangements_used, BATCH_SIZE);
    assert_eq!(card_files(&config.out_dir), vec!["chess_card0.tex"]);

    let accepted = accepted_set(BishopRule::EvenSum).unwrap();
    let fragment = batch_fragment(&accepted, 0).unwrap();
    let written = fs::read_to_string(config.out_dir.join("chess_card0.tex")).unwrap();
    assert_eq!(written, format!("A\n{} B\n", fragment));
    assert!(written.starts_with("A\n\\def\\wholeCard{0/{"));
}

#[test]
fn default_batches_fill_every_complete_card() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, MINIMAL_TEMPLATE);

    let summary = render_deck(&config).unwrap();
    assert_eq!(summary.files_written, 180);
    assert_eq!(summary.arrangements_used, 720);

    let files = card_files(&config.out_dir);
    assert_eq!(files.len(), 180);
    assert!(files.contains(&"chess_card716.tex".to_string()));
    assert!(!files.contains(&"chess_card720.tex".to_string()));
}

#[test]
fn opposite_colours_render_reference_deck() {
    let dir = TempDir::new().unwrap();
    let config = DeckConfig {
        batches: Some(240),
        bishops: BishopRule::OppositeColors,
        ..config_in(&dir, MINIMAL_TEMPLATE)
    };

    let summary = render_deck(&config).unwrap();
    assert_eq!(summary.files_written, 240);
    assert!(config.out_dir.join("chess_card956.tex").exists());
}

#[test]
fn reference_offsets_reproduce_original_deck() {
    let dir = TempDir::new().unwrap();
    let config = DeckConfig {
        batches: Some(240),
        offsets: BatchOffsets::Reference,
        ..config_in(&dir, MINIMAL_TEMPLATE)
    };

    let summary = render_deck(&config).unwrap();
    assert_eq!(summary.files_written, 240);
    assert_eq!(summary.arrangements_used, 243);

    let accepted = accepted_set(BishopRule::EvenSum).unwrap();
    for (batch, name) in [(1, "chess_card4.tex"), (239, "chess_card956.tex")] {
        let written = fs::read_to_string(config.out_dir.join(name)).unwrap();
        let fragment = batch_fragment(&accepted, batch).unwrap();
        assert_eq!(written, format!("A\n{} B\n", fragment));
    }
}

#[test]
fn oversized_batch_count_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = DeckConfig {
        batches: Some(usize::MAX),
        ..config_in(&dir, MINIMAL_TEMPLATE)
    };

    assert!(matches!(
        render_deck(&config),
        Err(Error::InsufficientArrangements { .. })
    ));
    assert!(card_files(&config.out_dir).is_empty());
}

#[test]
fn missing_marker_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "A\n\\def\\otherCard{X}\nB\n");

    let err = render_deck(&config).unwrap_err();
    assert!(matches!(err, Error::MarkerNotFound { .. }));
    assert!(!config.out_dir.exists());
}

#[test]
fn too_many_batches_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = DeckConfig {
        batches: Some(240),
        ..config_in(&dir, MINIMAL_TEMPLATE)
    };

    let err = render_deck(&config).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientArrangements {
            offset: 0,
            needed: 960,
            available: 720,
        }
    ));
    assert!(card_files(&config.out_dir).is_empty());
}

#[test]
fn existing_cards_are_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = DeckConfig {
        batches: Some(2),
        ..config_in(&dir, MINIMAL_TEMPLATE)
    };
    fs::create_dir_all(&config.out_dir).unwrap();
    fs::write(config.out_dir.join("chess_card4.tex"), "stale").unwrap();

    let summary = render_deck(&config).unwrap();
    assert_eq!(summary.files_written, 2);
    assert_eq!(summary.files_overwritten, 1);

    let card = fs::read_to_string(config.out_dir.join("chess_card4.tex")).unwrap();
    assert_ne!(card, "stale");
    assert!(card.starts_with("A\n\\def\\wholeCard{"));
}

#[test]
fn unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "file in the way").unwrap();

    let config = DeckConfig {
        out_dir: blocker.clone(),
        batches: Some(1),
        ..config_in(&dir, MINIMAL_TEMPLATE)
    };

    match render_deck(&config) {
        Err(Error::Write { path, .. }) => assert_eq!(path, blocker),
        other => panic!("expected Write error, got {:?}", other),
    }
}

#[test]
fn missing_template_is_io_error() {
    let dir = TempDir::new().unwrap();
    let config = DeckConfig {
        template: dir.path().join("absent.tex"),
        out_dir: dir.path().join("deckTex"),
        ..DeckConfig::default()
    };

    assert!(matches!(render_deck(&config), Err(Error::Io(_))));
    assert!(!config.out_dir.exists());
}

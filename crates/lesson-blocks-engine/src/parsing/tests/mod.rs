//! Scenario and property tests for the parsing pipeline.
//!
//! Debug output of whole lessons is pinned with inline `insta` snapshots;
//! properties that must hold for every input live in `properties`.


use pretty_assertions::assert_eq;

use crate::parsing::{ParseOptions, blocks::Block, clean_text, parse_blocks, parse_lesson};

const OVERVIEW_LESSON: &str = "# Overview

This is a paragraph.
It spans two lines.

- first item
- second item

1. step one
2. step two

EXAMPLE: a worked example
NOTE: remember this";

#[test]
fn overview_lesson_with_headings() {
    let opts = ParseOptions::with_headings();
    let blocks = parse_blocks(OVERVIEW_LESSON, &opts);
    invariants::check(OVERVIEW_LESSON, &opts, &blocks);

    insta::assert_debug_snapshot!(blocks, @r#"
    [
        Heading {
            level: 1,
            text: "Overview",
        },
        Paragraph {
            text: "This is a paragraph. It spans two lines.",
        },
        BulletList {
            items: [
                "first item",
                "second item",
            ],
        },
        NumberList {
            items: [
                "step one",
                "step two",
            ],
        },
        Example {
            text: "a worked example",
        },
        Note {
            text: "remember this",
        },
    ]
    "#);
}

#[test]
fn overview_lesson_without_headings() {
    let blocks = parse_blocks(OVERVIEW_LESSON, &ParseOptions::default());
    assert_eq!(
        blocks[0],
        Block::Paragraph {
            text: "# Overview".into()
        }
    );
    assert_eq!(blocks.len(), 6);
}

#[test]
fn empty_text() {
    assert_eq!(clean_text(""), "");
    assert_eq!(parse_blocks("", &ParseOptions::default()), vec![]);
    assert_eq!(parse_lesson("", &ParseOptions::with_headings()), vec![]);
}

#[test]
fn blank_lines_only() {
    let text = "\n".repeat(5000);
    assert_eq!(parse_blocks(&text, &ParseOptions::default()), vec![]);
}

#[test]
fn bullet_list_directly_followed_by_prose() {
    let text = "- first\n- second\nThe list is over now.";
    assert_eq!(
        parse_blocks(text, &ParseOptions::default()),
        vec![
            Block::BulletList {
                items: vec!["first".into(), "second".into()]
            },
            Block::Paragraph {
                text: "The list is over now.".into()
            },
        ]
    );
}

#[test]
fn prose_directly_followed_by_list_then_prose() {
    let text = "Steps:\n1. mix\n2. bake\nServe warm.";
    assert_eq!(
        parse_blocks(text, &ParseOptions::default()),
        vec![
            Block::Paragraph {
                text: "Steps:".into()
            },
            Block::NumberList {
                items: vec!["mix".into(), "bake".into()]
            },
            Block::Paragraph {
                text: "Serve warm.".into()
            },
        ]
    );
}

#[test]
fn markers_interrupt_paragraphs_and_lists() {
    let text = "Intro line\n[IMAGE DESCRIPTION: a river delta]\n- item\nEXAMPLE: 2 + 2\nmore prose";
    assert_eq!(
        parse_blocks(text, &ParseOptions::default()),
        vec![
            Block::Paragraph {
                text: "Intro line".into()
            },
            Block::ImageDescription {
                text: "[IMAGE DESCRIPTION: a river delta]".into()
            },
            Block::BulletList {
                items: vec!["item".into()]
            },
            Block::Example {
                text: "2 + 2".into()
            },
            Block::Paragraph {
                text: "more prose".into()
            },
        ]
    );
}

#[test]
fn star_and_indented_bullets_merge_into_one_list() {
    let text = "* one\n   - two\n*\tthree";
    assert_eq!(
        parse_blocks(text, &ParseOptions::default()),
        vec![Block::BulletList {
            items: vec!["one".into(), "two".into(), "three".into()]
        }]
    );
}

#[test]
fn raw_generated_lesson_through_full_pipeline() {
    let raw = "**PLANT NUTRITION**\r\n\r\n\r\n\r\nPlants make their own **food** (glucose) through\r\n\tphotosynthesis.\r\n\r\n• sunlight\r\n● water\r\n◦ carbon dioxide\r\n\r\nNOTE: chlorophyll is __green__";
    let blocks = parse_lesson(raw, &ParseOptions::with_headings());

    insta::assert_debug_snapshot!(blocks, @r#"
    [
        Heading {
            level: 1,
            text: "PLANT NUTRITION",
        },
        Paragraph {
            text: "Plants make their own food (glucose) through photosynthesis.",
        },
        BulletList {
            items: [
                "sunlight",
                "water",
                "carbon dioxide",
            ],
        },
        Note {
            text: "chlorophyll is green",
        },
    ]
    "#);
}

#[test]
fn byte_order_mark_before_heading() {
    let blocks = parse_lesson("\u{FEFF}# Title\n\n- a", &ParseOptions::with_headings());
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                text: "Title".into()
            },
            Block::BulletList {
                items: vec!["a".into()]
            },
        ]
    );
}

#[test]
fn byte_order_mark_before_bullets() {
    let expected = vec![Block::BulletList {
        items: vec!["a".into(), "b".into()],
    }];
    let text = "\u{FEFF}- a\n- b";

    assert_eq!(parse_lesson(text, &ParseOptions::default()), expected);
    assert_eq!(parse_blocks(text, &ParseOptions::default()), expected);
}

#[test]
fn heading_heuristic_false_positive_is_kept() {
    let text = "DO NOT MIX THESE\nTwo chemicals react.";
    let blocks = parse_blocks(text, &ParseOptions::with_headings());
    assert_eq!(
        blocks[0],
        Block::Heading {
            level: 1,
            text: "DO NOT MIX THESE".into()
        }
    );
}

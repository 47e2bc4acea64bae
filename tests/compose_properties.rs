use proptest::prelude::*;

use spanfmt::compose::collapse_whitespace;
use spanfmt::syntax::TreeBuilder;
use spanfmt::{Modification, SpanTree, SyntaxKind, SyntaxTree};

/// A statement of identifier tokens separated by arbitrary whitespace,
/// grouped two tokens per SyntaxList.
fn build(words: &[String], gaps: &[String]) -> SyntaxTree {
    let mut text = String::new();
    let mut ranges = Vec::new();
    for (word, gap) in words.iter().zip(gaps) {
        text.push_str(gap);
        let start = text.len() as u32;
        text.push_str(word);
        ranges.push((start, text.len() as u32));
    }
    text.push_str(&gaps[words.len()]);

    let mut builder = TreeBuilder::new("prop.ts", text.clone());
    builder.start_node(SyntaxKind::ExpressionStatement, 0);
    for pair in ranges.chunks(2) {
        builder.start_node(SyntaxKind::SyntaxList, pair[0].0);
        for &(start, end) in pair {
            builder.token(SyntaxKind::Identifier, start, end);
        }
        builder.finish_node(pair[pair.len() - 1].1);
    }
    builder.finish_node(text.len() as u32);
    builder.finish()
}

fn words_and_gaps() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::vec("[a-z0-9_]{1,6}", 1..12).prop_flat_map(|words| {
        let n = words.len() + 1;
        (
            Just(words),
            prop::collection::vec("[ \t\n]{1,3}", n..=n),
        )
    })
}

proptest! {
    #[test]
    fn unmodified_tree_reproduces_collapsed_source((words, gaps) in words_and_gaps()) {
        let tree = build(&words, &gaps);
        let spans = SpanTree::build(tree.root()).unwrap();
        let expected = collapse_whitespace(tree.source_file().text());
        prop_assert_eq!(spans.modified_text(), expected);
    }

    #[test]
    fn skipping_one_token_drops_only_that_word(
        (words, gaps) in words_and_gaps(),
        pick in any::<prop::sample::Index>(),
    ) {
        let tree = build(&words, &gaps);
        let victim = pick.index(words.len());
        let mut spans = SpanTree::build(tree.root()).unwrap();

        let mut seen = 0;
        spans.for_each(|span| {
            if span.node().kind() == SyntaxKind::Identifier {
                if seen == victim {
                    span.modification = Modification::SkipAll;
                }
                seen += 1;
            }
        });

        let kept: Vec<&str> = words
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != victim)
            .map(|(_, w)| w.as_str())
            .collect();
        prop_assert_eq!(spans.modified_text(), kept.join(" "));
    }

    #[test]
    fn for_each_visits_every_node_once((words, gaps) in words_and_gaps()) {
        let tree = build(&words, &gaps);
        let mut spans = SpanTree::build(tree.root()).unwrap();
        let mut visited = 0;
        spans.for_each(|_| visited += 1);
        prop_assert_eq!(visited, tree.len());
    }
}

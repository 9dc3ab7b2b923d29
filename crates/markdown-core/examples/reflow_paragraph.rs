//! Paragraph reflow example
//!
//! Collects a paragraph's inline nodes, wraps the text to a target width,
//! and shows the minimal edit an editing surface would apply.

use markdown_core::{InlineNode, collect_paragraph, minimal_replacement, wrap_paragraph};

fn main() {
    let nodes = [
        InlineNode::Text("A paragraph with".to_string()),
        InlineNode::SoftBreak,
        InlineNode::Delimited {
            opening: "*".to_string(),
            children: vec![InlineNode::Text("emphasis".to_string())],
            closing: "*".to_string(),
        },
        InlineNode::Text(" and some".to_string()),
        InlineNode::SoftBreak,
        InlineNode::Protected("`inline code`".to_string()),
        InlineNode::Text(" that must stay intact.".to_string()),
    ];

    let collected = collect_paragraph(&nodes);
    let wrapped = wrap_paragraph(&collected, 24, 0, 0).expect("valid wrap column");

    println!("wrapped to 24 columns:\n{wrapped}\n");

    let unwrapped = wrapped.replace('\n', " ");
    match minimal_replacement(&unwrapped, &wrapped) {
        Some(replacement) => println!(
            "minimal edit against the single-line form: replace chars {}..{} with {:?}",
            replacement.start, replacement.end, replacement.text
        ),
        None => println!("nothing changed"),
    }
}

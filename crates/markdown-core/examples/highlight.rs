//! Syntax highlighting example
//!
//! Demonstrates how a syntax-tree walk feeds `StylePartition` and what the
//! merged partition looks like for nested markdown constructs.

use markdown_core::{StylePartition, StyleTag, TextRange};

fn main() {
    // "## A **bold [link](x)** here"
    //  0123456789012345678901234567
    let text = "## A **bold [link](x)** here";
    let mut partition = StylePartition::new(text.chars().count());

    // ranges as a markdown parser would report them, in document order
    let walk = [
        (0, 28, StyleTag::H2),
        (5, 23, StyleTag::Strong),
        (12, 21, StyleTag::Link),
    ];
    for (start, end, tag) in walk {
        partition
            .insert(TextRange::new(start, end), tag)
            .expect("valid range");
    }

    println!("text: {text}\n");
    for styled in partition.ranges() {
        let tags: Vec<String> = styled.styles.iter().map(|t| format!("{t:?}")).collect();
        let slice: String = text
            .chars()
            .skip(styled.range.start)
            .take(styled.range.len())
            .collect();
        println!(
            "{:>2}-{:<2} {:24} {}",
            styled.range.start,
            styled.range.end,
            format!("{{{}}}", tags.join(", ")),
            slice
        );
    }
}

//! Walks through a short investigation session on the demo network.
//!
//! ```text
//! cargo run --example investigation
//! ```

use txgrapher::prelude::*;

fn print_graph(title: &str, display: &DisplayGraph) {
    let summary = display.summary();
    println!(
        "== {title}: {} peers, {} out ({}), {} in ({})",
        summary.peer_count,
        summary.outgoing_count,
        format_inr(summary.outgoing_total),
        summary.incoming_count,
        format_inr(summary.incoming_total),
    );
    for node in &display.nodes {
        let role = if node.is_center_role { "*" } else { " " };
        println!(
            "{role} {:<8} {:<28} {:<8} ({:>8.1}, {:>8.1})",
            node.id, node.label, node.node_type, node.position.0.x, node.position.0.y
        );
    }
    for edge in &display.edges {
        let arrow = if edge.is_outgoing { "->" } else { "<-" };
        println!("  {} {} {arrow} {} {}", edge.id, edge.source, edge.target, edge.amount_label);
    }
}

fn main() -> Result<(), GraphError> {
    let provider = StaticGraphProvider::new().with("PER-001", RawGraph::demo());
    let slider = AmountSlider::default();

    let mut workspace = Workspace::default();
    workspace.load(&provider, "PER-001")?;
    print_graph("All transactions", workspace.display());

    workspace.apply(WorkspaceEvent::NodeActivated("PER-004".to_string()))?;
    if let Some(node) = workspace.selected_node() {
        println!("Selected {} ({}, {})", node.label, node.node_type, node.id);
    }

    let min_amount = slider.snap(12_000);
    println!("Min. transaction {}", format_inr(min_amount));
    workspace.apply(WorkspaceEvent::MinAmountChanged(min_amount))?;
    print_graph("Above threshold", workspace.display());
    println!("Selection after filtering: {:?}", workspace.selection());

    workspace.apply(WorkspaceEvent::DirectionChanged("outgoing".parse()?))?;
    workspace.apply(WorkspaceEvent::TypeToggled("Person".to_string()))?;
    print_graph("Outgoing, companies only", workspace.display());

    println!("{}", serde_json::to_string_pretty(workspace.display())?);
    Ok(())
}

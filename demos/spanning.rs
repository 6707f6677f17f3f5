//! Kruskal, Prim, incremental update, membership and bottleneck on small graphs.
//!
//! The subscriber runs at debug level so the library's tracing events are shown.

use spanning::mst::{
    bottleneck_weight, extend_with_vertex, is_edge_in_some_mst, kruskal, prim, Edge, Graph,
};

fn print_edges(label: &str, edges: &[Edge<i32>]) {
    let parts: Vec<String> = edges
        .iter()
        .map(|e| format!("({}-{}, {})", e.u, e.v, e.weight))
        .collect();
    println!("  {label}: {}", parts.join(" "));
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // --- Connected graph ---
    let g = Graph::from_tuples(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 3)])
        .expect("valid graph");
    println!("=== Connected graph (4 vertices, 5 edges) ===");

    let k = kruskal(&g);
    print_edges("kruskal", k.edges());
    let total = k.total_weight().expect("small weights fit in i32");
    println!("  total={total} connected={}", k.connected());

    let p = prim(&g, 0).expect("vertex 0 exists");
    print_edges("prim   ", p.edges());
    let total = p.total_weight().expect("small weights fit in i32");
    println!("  total={total} connected={}", p.connected());

    for query in [Edge::new(1, 2, 2), Edge::new(1, 3, 5)] {
        let yes = is_edge_in_some_mst(&g, &query).expect("edge exists");
        println!(
            "  ({}-{}, {}) in some MST: {}",
            query.u,
            query.v,
            query.weight,
            if yes { "YES" } else { "NO" }
        );
    }

    match bottleneck_weight(&g) {
        Some(b) => println!("  bottleneck weight: {b}"),
        None => println!("  no spanning tree exists"),
    }

    // --- Incremental update ---
    println!("\n=== Add vertex 4 ===");
    let extended = extend_with_vertex(&k, &[Edge::new(4, 0, 7), Edge::new(4, 3, 2)])
        .expect("candidates touch vertex 4");
    print_edges("updated", extended.edges());
    let total = extended.total_weight().expect("small weights fit in i32");
    println!("  total={total}");

    // --- Disconnected graph ---
    let g = Graph::from_tuples(4, &[(0, 1, 1), (2, 3, 2)]).expect("valid graph");
    println!("\n=== Disconnected graph ===");
    let k = kruskal(&g);
    print_edges("forest ", k.edges());
    println!("  connected={} components={}", k.connected(), k.component_count());
    match bottleneck_weight(&g) {
        Some(b) => println!("  bottleneck weight: {b}"),
        None => println!("  no spanning tree exists"),
    }
}

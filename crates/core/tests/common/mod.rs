/// DSL macro for building test graphs.
///
/// Produces `WUGraph<&'static str>`.
///
/// # Syntax
///
/// ```ignore
/// graph! {
///     [A, B, C, D],        // vertices, in enumeration order
///     A - B: 1,            // edge (A, B) with weight 1
///     B - C: 2,
///     D - D: 5,            // self-edge
/// }
/// ```
///
/// Edges naming a vertex missing from the list are ignored, as
/// `WUGraph::add_edge` does.
#[macro_export]
macro_rules! graph {
    ([$($v:ident),* $(,)?] $(, $a:ident - $b:ident : $w:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut graph = wugraph_core::WUGraph::<&'static str>::new();
        $( graph.add_vertex(stringify!($v)); )*
        $( graph.add_edge(stringify!($a), stringify!($b), $w); )*
        graph
    }};
}

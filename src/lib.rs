//! Interactive editing core for sketching undirected graphs: the vertex and
//! edge store, pointer hit-testing, and the session state machine that turns
//! pointer and key input into graph edits.

pub mod editor;
pub mod graph;

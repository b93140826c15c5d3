use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use linked_seq::{
    BackwardTraversal, DoublyLinkedList, Graph, LinkedSequence, SinglyLinkedList, SparseArray,
    Stack,
};
use std::fmt::Display;
use tracing::{info, warn};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Structure {
    All,
    Doubly,
    Singly,
    Stack,
    Sparse,
    Graph,
}

#[derive(Parser, Debug)]
#[command(version, about = "Walks through the structures of linked_seq")]
struct Args {
    /// Which structure to demonstrate
    #[arg(long, value_enum, default_value_t = Structure::All)]
    structure: Structure,
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("demo=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn join<I>(items: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Replays the insert/traverse/delete/search walk-through on any sequence.
fn sequence_demo<S>(name: &str) -> S
where
    S: LinkedSequence<i32> + Default,
{
    let mut seq = S::default();
    seq.insert_first(3);
    seq.insert_first(2);
    seq.insert_first(1);
    seq.insert_last(4);
    seq.insert_last(5);
    info!("{} forward: {}", name, join(seq.forward(), " -> "));

    match seq.delete(&3) {
        Some(value) => info!(
            "{} after deleting {}: {}",
            name,
            value,
            join(seq.forward(), " -> ")
        ),
        None => warn!("{}: 3 was not found", name),
    }
    if seq.delete(&99).is_none() {
        info!("{}: deleting 99 left {} elements", name, seq.len());
    }
    info!(
        "{} search: 4 -> {}, 6 -> {}",
        name,
        seq.search(&4),
        seq.search(&6)
    );
    seq
}

fn doubly_demo() {
    let list: DoublyLinkedList<i32> = sequence_demo("doubly");
    info!("doubly backward: {}", join(list.backward(), " -> "));

    let mut single = DoublyLinkedList::new();
    single.insert_first(7);
    single.delete(&7);
    info!(
        "doubly after removing its only node: head = {:?}, tail = {:?}",
        single.front(),
        single.back()
    );
}

fn singly_demo() {
    let _: SinglyLinkedList<i32> = sequence_demo("singly");
}

fn stack_demo() {
    let mut stack = Stack::new();
    for x in ["a", "b", "c"] {
        stack.push(x);
    }
    info!("stack top to bottom: {}", join(stack.iter(), ", "));
    while let Some(top) = stack.pop() {
        info!("stack popped {}", top);
    }
    info!("stack empty: {}", stack.is_empty());
}

fn sparse_demo() {
    let mut array = SparseArray::new();
    array.push(1);
    array.push(2);
    array.push(3);
    info!("sparse get(3): {:?}", array.get(3));
    info!("sparse pop: {:?}", array.pop());
    info!("sparse: {:?}", array);

    array.extend([5, 8]);
    let deleted = array.delete(1);
    info!("sparse delete(1): {:?} -> [{}]", deleted, array);
    info!("sparse doubled: [{}]", array.map(|x, _| x * 2));
    info!("sparse odd: [{}]", array.filter(|x, _| x % 2 == 1));
    info!("sparse sum: {:?}", array.reduce(|acc, x, _| acc + x, None));
}

fn graph_demo() -> Result<()> {
    let mut graph = Graph::new();
    for vertex in ["A", "B", "C"] {
        graph.add_vertex(vertex);
    }
    graph.add_edge("A", "B")?;
    graph.add_edge("B", "C")?;
    graph.add_edge("A", "C")?;
    for line in graph.to_string().lines() {
        info!("graph {}", line);
    }
    info!("graph has edge A-B: {}", graph.has_edge(&"A", &"B"));
    info!("graph has edge A-C: {}", graph.has_edge(&"A", &"C"));

    graph.remove_vertex(&"B").context("removing vertex B")?;
    for line in graph.to_string().lines() {
        info!("graph {}", line);
    }

    if let Err(err) = graph.add_edge("A", "D") {
        warn!("graph edge A-D skipped: {}", err);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let all = args.structure == Structure::All;
    if all || args.structure == Structure::Doubly {
        doubly_demo();
    }
    if all || args.structure == Structure::Singly {
        singly_demo();
    }
    if all || args.structure == Structure::Stack {
        stack_demo();
    }
    if all || args.structure == Structure::Sparse {
        sparse_demo();
    }
    if all || args.structure == Structure::Graph {
        graph_demo()?;
    }
    Ok(())
}

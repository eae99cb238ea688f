//! Graphviz (DOT) description of a computation graph.
//!
//! Read-only: the export walks producer links and operation inputs/outputs, it never
//! touches values or gradients. Rendering the text to an image is left to the `dot` tool.

use crate::autograd::Operation;
use crate::node::Node;
use std::collections::HashSet;
use std::fmt::Write;
use std::rc::Rc;

fn format_shape(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({},)", single),
        _ => {
            let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
            format!("({})", dims.join(", "))
        }
    }
}

fn dot_var(node: &Node, verbose: bool) -> String {
    let mut label = node.name().unwrap_or_default();
    if verbose {
        if let (Ok(shape), Ok(dtype)) = (node.shape(), node.dtype()) {
            if !label.is_empty() {
                label.push_str(": ");
            }
            let _ = write!(label, "{} {}", format_shape(&shape), dtype);
        }
    }
    format!("{}[label=\"{}\", color=orange, style=filled]\n", node.id(), label)
}

fn dot_func(op: &Rc<Operation>) -> String {
    let mut txt = format!(
        "{}[label=\"{}\", color=lightblue, style=filled, shape=box]\n",
        op.id(),
        op.function_name()
    );
    for x in op.inputs() {
        let _ = writeln!(txt, "{} -> {}", x.id(), op.id());
    }
    // Outputs are weak: a reclaimed output simply has no edge.
    for y in op.outputs().into_iter().flatten() {
        let _ = writeln!(txt, "{} -> {}", op.id(), y.id());
    }
    txt
}

/// Builds the DOT text for the graph that produced `output`.
///
/// Variables are orange ellipses labelled by name (plus shape and dtype when `verbose`),
/// functions are light-blue boxes labelled by function name.
pub fn get_dot_graph(output: &Node, verbose: bool) -> String {
    let mut txt = dot_var(output, verbose);
    let mut funcs: Vec<Rc<Operation>> = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();

    let mut add_func = |op: Rc<Operation>, funcs: &mut Vec<Rc<Operation>>| {
        if seen.insert(op.id()) {
            funcs.push(op);
        }
    };

    if let Some(op) = output.producer() {
        add_func(op, &mut funcs);
    }
    while let Some(op) = funcs.pop() {
        txt.push_str(&dot_func(&op));
        for x in op.inputs() {
            txt.push_str(&dot_var(x, verbose));
            if let Some(producer) = x.producer() {
                add_func(producer, &mut funcs);
            }
        }
    }
    format!("digraph g {{\n{}}}", txt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::math_elem::square;

    #[test]
    fn test_get_dot_graph_add() {
        let x0 = Node::scalar(1.0).unwrap();
        let x1 = Node::scalar(1.0).unwrap();
        let y = &x0 + &x1;
        let op = y.producer().unwrap();

        let expected = format!(
            "digraph g {{\n\
             {y}[label=\"\", color=orange, style=filled]\n\
             {f}[label=\"Add\", color=lightblue, style=filled, shape=box]\n\
             {x0} -> {f}\n\
             {x1} -> {f}\n\
             {f} -> {y}\n\
             {x0}[label=\"\", color=orange, style=filled]\n\
             {x1}[label=\"\", color=orange, style=filled]\n\
             }}",
            y = y.id(),
            f = op.id(),
            x0 = x0.id(),
            x1 = x1.id(),
        );
        assert_eq!(get_dot_graph(&y, false), expected);
    }

    #[test]
    fn test_get_dot_graph_verbose_labels() {
        let x = crate::node::ones(&[2, 3]);
        x.set_name("x");
        let y = square(&x).unwrap();
        let dot = get_dot_graph(&y, true);
        assert!(dot.contains("[label=\"x: (2, 3) float64\""));
        assert!(dot.contains("[label=\"(2, 3) float64\""));
        assert!(dot.contains("label=\"Square\""));
    }

    #[test]
    fn test_get_dot_graph_leaf_only() {
        let x = Node::scalar(3.0).unwrap();
        x.set_name("x");
        assert_eq!(
            get_dot_graph(&x, true),
            format!("digraph g {{\n{}[label=\"x: () float64\", color=orange, style=filled]\n}}", x.id())
        );
    }

    #[test]
    fn test_format_shape() {
        assert_eq!(format_shape(&[]), "()");
        assert_eq!(format_shape(&[3]), "(3,)");
        assert_eq!(format_shape(&[2, 3]), "(2, 3)");
    }
}

use crate::core::ast::node::{BinaryNode, BinaryOp, FloatNode, IntNode, Node, UnaryNode, UnaryOp};
use std::rc::Rc;

impl Node {
    /// compile time reduction; literals reduce 2 themselves, constant
    /// arithmetic folds, anything else comes back unreduced
    pub fn comptime(&self) -> Node {
        match self {
            Node::Binary(b) => {
                let left = b.left.comptime();
                let right = b.right.comptime();
                match (&left, &right) {
                    (Node::Int(l), Node::Int(r)) => match fold_int(b.op, l.value, r.value) {
                        Some(value) => Node::Int(IntNode {
                            value,
                            span: b.span,
                        }),
                        None => rebuild(b, left, right),
                    },
                    (Node::Float(l), Node::Float(r)) => match fold_float(b.op, l.value, r.value) {
                        Some(value) => Node::Float(FloatNode {
                            value,
                            span: b.span,
                        }),
                        None => rebuild(b, left, right),
                    },
                    (Node::Int(l), Node::Float(r)) => match fold_float(b.op, l.value as f64, r.value) {
                        Some(value) => Node::Float(FloatNode {
                            value,
                            span: b.span,
                        }),
                        None => rebuild(b, left, right),
                    },
                    (Node::Float(l), Node::Int(r)) => match fold_float(b.op, l.value, r.value as f64) {
                        Some(value) => Node::Float(FloatNode {
                            value,
                            span: b.span,
                        }),
                        None => rebuild(b, left, right),
                    },
                    _ => rebuild(b, left, right),
                }
            }
            Node::Unary(u) => {
                let operand = u.expr.comptime();
                match (&u.op, &operand) {
                    (UnaryOp::Neg, Node::Int(n)) => Node::Int(IntNode {
                        value: -n.value,
                        span: u.span,
                    }),
                    (UnaryOp::Neg, Node::Float(n)) => Node::Float(FloatNode {
                        value: -n.value,
                        span: u.span,
                    }),
                    _ => Node::Unary(UnaryNode {
                        op: u.op,
                        expr: Rc::new(operand),
                        span: u.span,
                    }),
                }
            }
            other => other.clone(),
        }
    }
}

fn rebuild(original: &BinaryNode, left: Node, right: Node) -> Node {
    Node::Binary(BinaryNode {
        op: original.op,
        left: Rc::new(left),
        right: Rc::new(right),
        span: original.span,
    })
}

fn fold_int(op: BinaryOp, a: i64, b: i64) -> Option<i64> {
    match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        // div by zero stays unreduced; the array length check reports it
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Mod => a.checked_rem(b),
    }
}

fn fold_float(op: BinaryOp, a: f64, b: f64) -> Option<f64> {
    match op {
        BinaryOp::Add => Some(a + b),
        BinaryOp::Sub => Some(a - b),
        BinaryOp::Mul => Some(a * b),
        BinaryOp::Div => (b != 0.0).then(|| a / b),
        BinaryOp::Mod => (b != 0.0).then(|| a % b),
    }
}

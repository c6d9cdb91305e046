//! Model part containers
//!
//! A minimal stand-in for the solver-side node and constraint containers the
//! processes act on: per-node scalar values and fixity flags keyed by
//! variable, plus scalar-valued multipoint constraints. The model part is
//! exclusively owned by the sequential caller; there is no shared state.

use crate::variables::NodalVariable;
use nalgebra::Point3;
use std::collections::{HashMap, HashSet};

/// A mesh node with per-variable solution values and fixity flags.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node index within its model part
    pub id: usize,
    /// Node coordinates (m)
    pub coords: Point3<f64>,
    values: HashMap<NodalVariable, f64>,
    fixed: HashSet<NodalVariable>,
}

impl Node {
    pub fn new(id: usize, coords: Point3<f64>) -> Self {
        Self {
            id,
            coords,
            values: HashMap::new(),
            fixed: HashSet::new(),
        }
    }

    /// Current value of a variable at this node (0.0 if never assigned)
    pub fn value(&self, var: NodalVariable) -> f64 {
        self.values.get(&var).copied().unwrap_or(0.0)
    }

    pub fn set_value(&mut self, var: NodalVariable, value: f64) {
        self.values.insert(var, value);
    }

    /// Whether the degree of freedom for `var` is held fixed
    pub fn is_fixed(&self, var: NodalVariable) -> bool {
        self.fixed.contains(&var)
    }

    pub fn set_fixity(&mut self, var: NodalVariable, fixed: bool) {
        if fixed {
            self.fixed.insert(var);
        } else {
            self.fixed.remove(&var);
        }
    }
}

/// A multipoint constraint carrying scalar values per variable.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Constraint index within its model part
    pub id: usize,
    values: HashMap<NodalVariable, f64>,
}

impl Constraint {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            values: HashMap::new(),
        }
    }

    pub fn value(&self, var: NodalVariable) -> f64 {
        self.values.get(&var).copied().unwrap_or(0.0)
    }

    pub fn set_value(&mut self, var: NodalVariable, value: f64) {
        self.values.insert(var, value);
    }
}

/// A named collection of nodes and constraints a process targets.
#[derive(Debug, Clone)]
pub struct ModelPart {
    name: String,
    nodes: Vec<Node>,
    constraints: Vec<Constraint>,
}

impl ModelPart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a node at the given coordinates, returning its index
    pub fn add_node(&mut self, coords: Point3<f64>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, coords));
        id
    }

    /// Add a constraint, returning its index
    pub fn add_constraint(&mut self) -> usize {
        let id = self.constraints.len();
        self.constraints.push(Constraint::new(id));
        id
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> &mut [Constraint] {
        &mut self.constraints
    }

    /// Assign the same value of `var` to every node
    pub fn set_nodal_value(&mut self, var: NodalVariable, value: f64) {
        for node in &mut self.nodes {
            node.set_value(var, value);
        }
    }

    /// Fix or release the degree of freedom for `var` on every node
    pub fn apply_fixity(&mut self, var: NodalVariable, fixed: bool) {
        for node in &mut self.nodes {
            node.set_fixity(var, fixed);
        }
    }
}

//! Test-only helpers for running transition tables.
#![allow(dead_code)]

use std::collections::VecDeque;

use dfa_minimize::{State, StateId, Symbol};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

/// Inputs used when comparing tables. 7 never appears in generated tables, so
/// it always takes the default edge.
pub const SYMBOLS: [Symbol; 4] = [0, 1, 2, 7];

/// A table with every edge resolved to a node index. The extra last node is
/// the rejecting sink that missing targets lead to.
#[derive(Debug)]
pub struct Completed {
    next: Vec<HashMap<Symbol, usize>>,
    default: Vec<usize>,
    marks: Vec<(bool, bool)>,
    pub start: usize,
}

impl Completed {
    pub fn new(states: &[State], start_index: usize) -> Self {
        let sink = states.len();
        let mut slot_of: HashMap<StateId, usize> = HashMap::default();
        for (slot, state) in states.iter().enumerate() {
            slot_of.entry(state.id).or_insert(slot);
        }
        let resolve = |id: StateId| slot_of.get(&id).copied().unwrap_or(sink);

        let mut next = Vec::with_capacity(sink + 1);
        let mut default = Vec::with_capacity(sink + 1);
        let mut marks = Vec::with_capacity(sink + 1);
        for state in states {
            let mut edges = HashMap::default();
            for tr in &state.transitions {
                edges.entry(tr.input).or_insert_with(|| resolve(tr.to));
            }
            next.push(edges);
            default.push(resolve(state.default_to));
            marks.push((state.is_accepting(), state.is_rejecting()));
        }
        next.push(HashMap::default());
        default.push(sink);
        marks.push((false, true));

        Self {
            next,
            default,
            marks,
            start: start_index.min(sink.saturating_sub(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn step(&self, node: usize, symbol: Symbol) -> usize {
        self.next[node]
            .get(&symbol)
            .copied()
            .unwrap_or(self.default[node])
    }

    pub fn marks(&self, node: usize) -> (bool, bool) {
        self.marks[node]
    }

    pub fn run(&self, word: &[Symbol]) -> (bool, bool) {
        let node = word
            .iter()
            .fold(self.start, |node, &symbol| self.step(node, symbol));
        self.marks(node)
    }
}

/// Walks both tables in lockstep over every word made of `symbols`.
pub fn equivalent(lhs: &Completed, rhs: &Completed, symbols: &[Symbol]) -> bool {
    let mut seen: HashSet<(usize, usize)> = HashSet::default();
    let mut queue = VecDeque::from([(lhs.start, rhs.start)]);
    seen.insert((lhs.start, rhs.start));
    while let Some((l, r)) = queue.pop_front() {
        if lhs.marks(l) != rhs.marks(r) {
            return false;
        }
        for &symbol in symbols {
            let pair = (lhs.step(l, symbol), rhs.step(r, symbol));
            if seen.insert(pair) {
                queue.push_back(pair);
            }
        }
    }
    true
}

/// Table filling: whether every two of the first `count` nodes can be told
/// apart by some word made of `symbols`.
pub fn pairwise_distinguishable(table: &Completed, count: usize, symbols: &[Symbol]) -> bool {
    let n = table.len();
    let mut apart = vec![vec![false; n]; n];
    for p in 0..n {
        for q in 0..n {
            apart[p][q] = table.marks(p) != table.marks(q);
        }
    }
    let mut changed = true;
    while changed {
        changed = false;
        for p in 0..n {
            for q in 0..n {
                if apart[p][q] {
                    continue;
                }
                if symbols
                    .iter()
                    .any(|&s| apart[table.step(p, s)][table.step(q, s)])
                {
                    apart[p][q] = true;
                    changed = true;
                }
            }
        }
    }
    (0..count).all(|p| (0..count).all(|q| p == q || apart[p][q]))
}

/// Ids of the states reachable from the first state, following in-range targets.
pub fn reachable_ids(states: &[State]) -> HashSet<StateId> {
    let mut seen: HashSet<StateId> = HashSet::default();
    if states.is_empty() {
        return seen;
    }
    let mut queue = VecDeque::from([0usize]);
    seen.insert(states[0].id);
    while let Some(index) = queue.pop_front() {
        let state = &states[index];
        let targets = std::iter::once(state.default_to).chain(state.transitions.iter().map(|tr| tr.to));
        for target in targets {
            if (target as usize) < states.len() && seen.insert(target) {
                queue.push_back(target as usize);
            }
        }
    }
    seen
}

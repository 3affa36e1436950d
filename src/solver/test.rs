use super::{solve, Solver, SolverConfig};
use crate::{formula::Formula, literal::Literal, SolveError, SolverResult};
use proptest::prelude::*;
use varisat::ExtendFormula;

fn lit(s: &str) -> Literal {
    s.parse().unwrap()
}

fn clauses(clauses: &[[&str; 2]]) -> Vec<[Literal; 2]> {
    clauses.iter().map(|clause| clause.map(lit)).collect()
}

/// Solves `formula` with varisat, whose verdict serves as reference.
fn varisat_verdict(formula: &Formula) -> bool {
    let mut solver = varisat::Solver::new();
    for clause in formula {
        let lits: Vec<_> = clause
            .iter()
            .map(|lit| {
                let var: isize = lit.name().parse().unwrap();
                varisat::Lit::from_dimacs(if lit.is_negated() { -var } else { var })
            })
            .collect();
        solver.add_clause(&lits);
    }
    solver.solve().unwrap()
}

#[test]
fn single_clause_sat() {
    assert_eq!(solve(clauses(&[["a", "b"]])), Ok(true));
}

#[test]
fn contradicting_units_unsat() {
    assert_eq!(solve(clauses(&[["a", "a"], ["-a", "-a"]])), Ok(false));
}

#[test]
fn all_combinations_excluded_unsat() {
    let formula = clauses(&[["a", "b"], ["a", "-b"], ["-a", "b"], ["-a", "-b"]]);
    assert_eq!(solve(formula), Ok(false));
}

#[test]
fn empty_formula_sat() {
    let empty: Vec<[Literal; 2]> = Vec::new();
    assert_eq!(solve(empty), Ok(true));
}

#[test]
fn disjoint_formulas_sat() {
    let formula = clauses(&[["a", "b"], ["-a", "b"], ["c", "-d"], ["-c", "-d"], ["e", "e"]]);
    assert_eq!(solve(formula), Ok(true));
}

#[test]
fn disjoint_with_one_unsat_part() {
    let formula = clauses(&[["a", "b"], ["c", "c"], ["-c", "-c"]]);
    assert_eq!(solve(formula), Ok(false));
}

#[test]
fn implication_cycle_through_complement() {
    // a -> b -> -a and -a -> c -> a
    let formula = clauses(&[["-a", "b"], ["-b", "-a"], ["a", "c"], ["-c", "a"]]);
    assert_eq!(solve(formula), Ok(false));
}

#[test]
fn dimacs_formulas() {
    let sat = cnf_formula![
        1 2;
        -1 3;
        -2 -3;
        -3 1;
    ];
    assert_eq!(solve(&sat), Ok(true));

    let unsat = cnf_formula![
        1 2;
        -1 2;
        1 -2;
        -1 -2;
    ];
    assert_eq!(solve(&unsat), Ok(false));
}

#[test]
fn malformed_input() {
    let formula = vec![vec![lit("a"), lit("b")], vec![lit("a"), lit("b"), lit("c")]];
    assert_eq!(solve(&formula), Err(SolveError::MalformedClause { index: 1, found: 3 }));
}

#[test]
fn variable_limit() {
    let mut solver = Solver::new(SolverConfig { max_variables: Some(1) });
    assert_eq!(solver.solve(clauses(&[["a", "-a"]])), Ok(SolverResult::Satisfiable));
    assert_eq!(
        solver.solve(clauses(&[["a", "b"]])),
        Err(SolveError::ResourceLimit { found: 2, limit: 1 })
    );
}

#[test]
fn statistics_are_per_call() {
    let mut solver = Solver::default();
    solver.solve(clauses(&[["a", "b"], ["b", "c"]])).unwrap();
    assert_eq!(solver.stats().clauses, 2);
    assert_eq!(solver.stats().variables, 3);
    assert_eq!(solver.stats().edges, 4);
    assert_eq!(solver.stats().components, 6);

    solver.solve(clauses(&[["x", "x"]])).unwrap();
    assert_eq!(solver.stats().clauses, 1);
    assert_eq!(solver.stats().variables, 1);
    assert_eq!(solver.stats().components, 2);
}

#[test]
fn no_state_carried_between_calls() {
    let mut solver = Solver::default();
    let unsat = clauses(&[["a", "a"], ["-a", "-a"]]);
    let sat = clauses(&[["a", "b"]]);
    assert_eq!(solver.solve(&unsat), Ok(SolverResult::Unsatisfiable));
    assert_eq!(solver.solve(&sat), Ok(SolverResult::Satisfiable));
    assert_eq!(solver.solve(&unsat), Ok(SolverResult::Unsatisfiable));
    assert_eq!(solve(&sat), solve(&sat));
}

proptest! {
    #[test]
    fn agrees_with_varisat(formula in crate::formula::strategy::formula(8, 0..30)) {
        let expected = varisat_verdict(&formula);
        prop_assert_eq!(solve(&formula)?, expected);
    }

    #[test]
    fn clause_order_is_irrelevant(formula in crate::formula::strategy::formula(6, 0..20)) {
        let mut reversed: Vec<_> = formula.clauses().to_vec();
        reversed.reverse();
        prop_assert_eq!(solve(&formula)?, solve(&reversed)?);
    }
}

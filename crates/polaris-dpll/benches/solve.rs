//! Benchmarks for the DPLL engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polaris_dpll::{DpllSolver, VsidsConfig};

/// Pigeonhole principle PHP(p -> h): p pigeons into h holes, UNSAT for
/// p > h. Variable (i, j) = pigeon i sits in hole j.
fn pigeonhole(pigeons: usize, holes: usize) -> (usize, Vec<Vec<i32>>) {
    let var = |i: usize, j: usize| (i * holes + j + 1) as i32;
    let mut clauses = Vec::new();

    // Every pigeon sits somewhere.
    for i in 0..pigeons {
        clauses.push((0..holes).map(|j| var(i, j)).collect());
    }
    // No two pigeons share a hole.
    for j in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                clauses.push(vec![-var(a, j), -var(b, j)]);
            }
        }
    }

    (pigeons * holes, clauses)
}

/// All full-width clauses over n variables except the one ruling out
/// the all-true assignment: satisfiable with exactly one model.
fn saturated_sat(n: usize) -> (usize, Vec<Vec<i32>>) {
    let mut clauses = Vec::new();
    for mask in 1..(1u32 << n) {
        let clause = (0..n)
            .map(|v| {
                let lit = (v + 1) as i32;
                if mask & (1 << v) != 0 {
                    lit
                } else {
                    -lit
                }
            })
            .collect();
        clauses.push(clause);
    }
    (n, clauses)
}

fn bench_pigeonhole(c: &mut Criterion) {
    let (num_vars, clauses) = pigeonhole(4, 3);
    c.bench_function("php_4_3_unsat", |b| {
        b.iter(|| {
            let mut solver = DpllSolver::new(num_vars, &VsidsConfig::minisat_classic());
            solver.init_activity(&clauses);
            let (sat, _) = solver.solve(black_box(&clauses));
            assert!(!sat);
        });
    });
}

fn bench_saturated(c: &mut Criterion) {
    let (num_vars, clauses) = saturated_sat(8);
    c.bench_function("saturated_8_sat", |b| {
        b.iter(|| {
            let mut solver = DpllSolver::new(num_vars, &VsidsConfig::glucose_aggressive());
            solver.init_activity(&clauses);
            let (sat, _) = solver.solve(black_box(&clauses));
            assert!(sat);
        });
    });
}

criterion_group!(benches, bench_pigeonhole, bench_saturated);
criterion_main!(benches);

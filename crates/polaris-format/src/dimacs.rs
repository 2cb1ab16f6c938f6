//! DIMACS CNF format parser.
//!
//! Standard format used in SAT competitions. Comment lines start with
//! `c` or `%`, the header line is `p cnf <nvars> <nclauses>`, and clause
//! bodies are whitespace-separated signed integers terminated by `0`.
//! Clauses may span multiple lines and several clauses may share a line.

use polaris_base::{Error, Formula, Lit, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A parsed CNF formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    /// Number of variables declared by the header.
    pub num_vars: usize,
    /// Clauses as vectors of literals.
    pub clauses: Formula,
}

impl CnfFormula {
    /// Serializes the formula back to DIMACS text.
    #[must_use]
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("p cnf {} {}\n", self.num_vars, self.clauses.len()));
        for clause in &self.clauses {
            for lit in clause {
                out.push_str(&format!("{lit} "));
            }
            out.push_str("0\n");
        }
        out
    }
}

/// Parses DIMACS CNF from a file.
pub fn parse_path<P: AsRef<Path>>(path: P) -> Result<CnfFormula> {
    let file = std::fs::File::open(path)?;
    parse_reader(file)
}

/// Parses DIMACS CNF from a string.
pub fn parse_str(input: &str) -> Result<CnfFormula> {
    parse_reader(input.as_bytes())
}

/// Parses DIMACS CNF from a reader.
///
/// The header must precede all clause data. Literals are validated
/// against the declared variable count. A `0` token terminates the
/// current clause; a `0` with no pending literals is ignored, which
/// tolerates the trailing `%` / `0` lines of SATLIB benchmark files.
pub fn parse_reader<R: Read>(reader: R) -> Result<CnfFormula> {
    let reader = BufReader::new(reader);
    let mut num_vars = 0usize;
    let mut clauses: Formula = Vec::new();
    let mut pending: Vec<Lit> = Vec::new();
    let mut header_found = false;

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('c') || line.starts_with('%') {
            continue;
        }

        // Parse header
        if line.starts_with('p') {
            if header_found {
                return Err(Error::Parse {
                    line: line_no,
                    msg: "duplicate 'p cnf' header".to_string(),
                });
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 || parts[0] != "p" || parts[1] != "cnf" {
                return Err(Error::Parse {
                    line: line_no,
                    msg: format!("malformed header: {line:?}"),
                });
            }
            num_vars = parts[2].parse().map_err(|e| Error::Parse {
                line: line_no,
                msg: format!("invalid variable count: {e}"),
            })?;
            let _num_clauses: usize = parts[3].parse().map_err(|e| Error::Parse {
                line: line_no,
                msg: format!("invalid clause count: {e}"),
            })?;
            header_found = true;
            continue;
        }

        if !header_found {
            return Err(Error::Parse {
                line: line_no,
                msg: "clause data before 'p cnf' header".to_string(),
            });
        }

        // Parse clause tokens
        for token in line.split_whitespace() {
            let lit: Lit = token.parse().map_err(|e| Error::Parse {
                line: line_no,
                msg: format!("invalid literal {token:?}: {e}"),
            })?;
            if lit == 0 {
                if !pending.is_empty() {
                    clauses.push(std::mem::take(&mut pending));
                }
            } else {
                let var = lit.unsigned_abs() as usize;
                if var > num_vars {
                    return Err(Error::Parse {
                        line: line_no,
                        msg: format!("literal {lit} out of range (nvars = {num_vars})"),
                    });
                }
                pending.push(lit);
            }
        }
    }

    if !header_found {
        return Err(Error::Parse {
            line: 0,
            msg: "missing 'p cnf' header".to_string(),
        });
    }
    // Final clause not terminated by 0
    if !pending.is_empty() {
        clauses.push(pending);
    }

    Ok(CnfFormula { num_vars, clauses })
}

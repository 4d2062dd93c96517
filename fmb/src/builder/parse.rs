/*!
A line-oriented flattened-problem format.

```text
# comments start with '#'; blank lines are ignored
sort person min 1 max 8 monotonic false
function zero 0 -> person
function succ 1 person -> person
predicate even 1 person
clause vars x person y person lits +vareq x y
clause vars x person lits -pred even x +funceq succ x x
```

- `sort <name> min <u32> max <u32|*> monotonic <true|false>` declares a
  source sort that is also its own distinct sort (this format has no
  separate sort-inference pass, so source and distinct sorts coincide).
- `function <name> <arity> <arg-sort>* -> <result-sort>` and
  `predicate <name> <arity> <arg-sort>*` declare symbols; `arity` must
  match the number of argument sorts given.
- `clause vars (<name> <sort>)* lits <literal>*` declares one clause: the
  `vars` segment introduces clause-local variable names and their sorts,
  the `lits` segment is a sequence of literals:
  - `(+|-)vareq <var> <var>`
  - `(+|-)funceq <function> <arg-var>* <result-var>`
  - `(+|-)pred <predicate> <arg-var>*`

This stands in for the out-of-scope clausification and sort-inference
passes (§6); it is read by the CLI and by integration tests, never by the
core itself.
*/

use crate::structures::clause::{FlatClause, FlatLiteral};
use crate::structures::signature::{FunctionSymbol, PredicateSymbol, Signature};
use crate::structures::sort::{DistinctSort, SortTable};
use crate::db::problem::{Problem, SortedSignature};
use crate::types::err::BuildError;
use crate::types::{ClauseVar, FunctionId, PredicateId, SourceSort};
use std::collections::HashMap;
use std::path::Path;

pub fn parse_file(path: &Path) -> Result<(Problem, SortedSignature), BuildError> {
    let text = std::fs::read_to_string(path).map_err(|_| BuildError::NoFile)?;
    parse_str(&text)
}

pub fn parse_str(input: &str) -> Result<(Problem, SortedSignature), BuildError> {
    let mut sort_ids: HashMap<String, SourceSort> = HashMap::new();
    let mut distinct: Vec<DistinctSort> = Vec::new();

    let mut function_ids: HashMap<String, FunctionId> = HashMap::new();
    let mut predicate_ids: HashMap<String, PredicateId> = HashMap::new();
    let mut signature = Signature::default();

    let mut clauses = Vec::new();

    for (lineno, raw) in input.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(BuildError::Line(lineno))?;

        match keyword {
            "sort" => parse_sort(tokens, lineno, &mut sort_ids, &mut distinct)?,
            "function" => parse_function(tokens, lineno, &sort_ids, &mut function_ids, &mut signature)?,
            "predicate" => parse_predicate(tokens, lineno, &sort_ids, &mut predicate_ids, &mut signature)?,
            "clause" => clauses.push(parse_clause(
                tokens,
                lineno,
                &sort_ids,
                &function_ids,
                &predicate_ids,
            )?),
            _ => return Err(BuildError::Line(lineno)),
        }
    }

    if sort_ids.is_empty() {
        return Err(BuildError::MissingSection("sorts"));
    }

    let parents: Vec<crate::types::DistinctSortId> = (0..distinct.len() as u32).collect();
    let sort_bounds = vec![None; distinct.len()];

    let sorts = SortTable {
        parents,
        sort_bounds,
        distinct,
        non_strict_constraints: Vec::new(),
        strict_constraints: Vec::new(),
    };

    let mut sorted_constants: HashMap<SourceSort, Vec<FunctionId>> = HashMap::new();
    let mut sorted_functions: HashMap<SourceSort, Vec<FunctionId>> = HashMap::new();
    for (id, function) in signature.functions.iter().enumerate() {
        let id = id as FunctionId;
        let bucket = if function.arity == 0 {
            sorted_constants.entry(function.result_sort()).or_default()
        } else {
            sorted_functions.entry(function.result_sort()).or_default()
        };
        bucket.push(id);
    }

    let var_eq_sorts = sort_ids.values().map(|&s| (s, s)).collect();

    let sorted_signature = SortedSignature {
        signature,
        sorts,
        var_eq_sorts,
        sorted_constants,
        sorted_functions,
    };

    let problem = Problem {
        clauses,
        had_incomplete_transformation: false,
        known_infinite_domain: false,
        has_interpreted_operations: false,
    };

    log::debug!(
        target: crate::misc::log::targets::BUILDER,
        "parsed {} sort(s), {} function(s), {} predicate(s), {} clause(s)",
        sorted_signature.sorts.distinct.len(),
        sorted_signature.signature.functions.len(),
        sorted_signature.signature.predicates.len(),
        problem.clauses.len()
    );
    Ok((problem, sorted_signature))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

fn parse_sort<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    lineno: usize,
    sort_ids: &mut HashMap<String, SourceSort>,
    distinct: &mut Vec<DistinctSort>,
) -> Result<(), BuildError> {
    let name = tokens.next().ok_or(BuildError::Line(lineno))?;
    expect(&mut tokens, "min", lineno)?;
    let min: u32 = next_u32(&mut tokens, lineno)?;
    expect(&mut tokens, "max", lineno)?;
    let max_token = tokens.next().ok_or(BuildError::Line(lineno))?;
    let max = if max_token == "*" {
        None
    } else {
        Some(max_token.parse::<u32>().map_err(|_| BuildError::Line(lineno))?)
    };
    expect(&mut tokens, "monotonic", lineno)?;
    let monotonic: bool = tokens
        .next()
        .ok_or(BuildError::Line(lineno))?
        .parse()
        .map_err(|_| BuildError::Line(lineno))?;

    let id = distinct.len() as SourceSort;
    distinct.push(DistinctSort::new(min, max, min, monotonic));
    sort_ids.insert(name.to_string(), id);
    Ok(())
}

fn parse_function<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    lineno: usize,
    sort_ids: &HashMap<String, SourceSort>,
    function_ids: &mut HashMap<String, FunctionId>,
    signature: &mut Signature,
) -> Result<(), BuildError> {
    let name = tokens.next().ok_or(BuildError::Line(lineno))?;
    let arity: u32 = next_u32(&mut tokens, lineno)?;

    let mut arg_sorts = Vec::with_capacity(arity as usize);
    for _ in 0..arity {
        let sort_name = tokens.next().ok_or(BuildError::Line(lineno))?;
        arg_sorts.push(lookup_sort(sort_ids, sort_name)?);
    }

    expect(&mut tokens, "->", lineno)?;
    let result_name = tokens.next().ok_or(BuildError::Line(lineno))?;
    arg_sorts.push(lookup_sort(sort_ids, result_name)?);

    let id = signature.functions.len() as FunctionId;
    signature.functions.push(FunctionSymbol {
        name: name.to_string(),
        arity,
        signature: arg_sorts,
        deleted: false,
        usage_count: 0,
        definition: None,
    });
    function_ids.insert(name.to_string(), id);
    Ok(())
}

fn parse_predicate<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    lineno: usize,
    sort_ids: &HashMap<String, SourceSort>,
    predicate_ids: &mut HashMap<String, PredicateId>,
    signature: &mut Signature,
) -> Result<(), BuildError> {
    let name = tokens.next().ok_or(BuildError::Line(lineno))?;
    let arity: u32 = next_u32(&mut tokens, lineno)?;

    let mut arg_sorts = Vec::with_capacity(arity as usize);
    for _ in 0..arity {
        let sort_name = tokens.next().ok_or(BuildError::Line(lineno))?;
        arg_sorts.push(lookup_sort(sort_ids, sort_name)?);
    }

    let id = signature.predicates.len() as PredicateId;
    signature.predicates.push(PredicateSymbol {
        name: name.to_string(),
        arity,
        signature: arg_sorts,
        deleted: false,
        usage_count: 0,
        definition: None,
        partially_deleted: false,
        trivial: None,
    });
    predicate_ids.insert(name.to_string(), id);
    Ok(())
}

/// Whether `token` opens a new literal (`+name`/`-name`), used to decide
/// where a variable-argument list ends: `funceq`/`pred` consume tokens
/// greedily since their arity isn't known without re-consulting the
/// signature, so argument lists run until the next such marker or EOL.
fn starts_literal(token: &str) -> bool {
    token.starts_with('+') || token.starts_with('-')
}

fn parse_clause<'a>(
    tokens: impl Iterator<Item = &'a str>,
    lineno: usize,
    sort_ids: &HashMap<String, SourceSort>,
    function_ids: &HashMap<String, FunctionId>,
    predicate_ids: &HashMap<String, PredicateId>,
) -> Result<FlatClause, BuildError> {
    let mut tokens = tokens.peekable();
    expect(&mut tokens, "vars", lineno)?;

    let mut var_ids: HashMap<String, ClauseVar> = HashMap::new();
    let mut var_sorts: HashMap<ClauseVar, SourceSort> = HashMap::new();

    loop {
        match tokens.next() {
            Some("lits") => break,
            Some(name) => {
                let sort_name = tokens.next().ok_or(BuildError::Line(lineno))?;
                let sort = lookup_sort(sort_ids, sort_name)?;
                let id = var_ids.len() as ClauseVar;
                var_ids.insert(name.to_string(), id);
                var_sorts.insert(id, sort);
            }
            None => return Err(BuildError::MissingSection("lits")),
        }
    }

    let lookup_var = |token: &str, var_ids: &HashMap<String, ClauseVar>| {
        var_ids
            .get(token)
            .copied()
            .ok_or_else(|| BuildError::UnknownVariable(token.to_string()))
    };

    let mut literals = Vec::new();
    while let Some(token) = tokens.next() {
        let (polarity, shape) = match token.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => match token.strip_prefix('-') {
                Some(rest) => (false, rest),
                None => return Err(BuildError::Line(lineno)),
            },
        };

        let literal = match shape {
            "vareq" => {
                let x = lookup_var(tokens.next().ok_or(BuildError::Line(lineno))?, &var_ids)?;
                let y = lookup_var(tokens.next().ok_or(BuildError::Line(lineno))?, &var_ids)?;
                FlatLiteral::VarEq { polarity, x, y }
            }
            "funceq" => {
                let name = tokens.next().ok_or(BuildError::Line(lineno))?;
                let f = *function_ids
                    .get(name)
                    .ok_or_else(|| BuildError::UnknownSymbol(name.to_string()))?;

                let mut vars = Vec::new();
                while let Some(&next) = tokens.peek() {
                    if starts_literal(next) {
                        break;
                    }
                    vars.push(lookup_var(tokens.next().unwrap(), &var_ids)?);
                }
                let result = vars.pop().ok_or(BuildError::Line(lineno))?;
                FlatLiteral::FuncEq { polarity, f, args: vars, result }
            }
            "pred" => {
                let name = tokens.next().ok_or(BuildError::Line(lineno))?;
                let p = *predicate_ids
                    .get(name)
                    .ok_or_else(|| BuildError::UnknownSymbol(name.to_string()))?;

                let mut args = Vec::new();
                while let Some(&next) = tokens.peek() {
                    if starts_literal(next) {
                        break;
                    }
                    args.push(lookup_var(tokens.next().unwrap(), &var_ids)?);
                }
                FlatLiteral::Pred { polarity, p, args }
            }
            _ => return Err(BuildError::Line(lineno)),
        };

        literals.push(literal);
    }

    Ok(FlatClause::new(literals, var_sorts))
}

fn lookup_sort(sort_ids: &HashMap<String, SourceSort>, name: &str) -> Result<SourceSort, BuildError> {
    sort_ids.get(name).copied().ok_or_else(|| BuildError::UnknownSort(name.to_string()))
}

fn expect<'a>(tokens: &mut impl Iterator<Item = &'a str>, expected: &str, lineno: usize) -> Result<(), BuildError> {
    match tokens.next() {
        Some(t) if t == expected => Ok(()),
        _ => Err(BuildError::Line(lineno)),
    }
}

fn next_u32<'a>(tokens: &mut impl Iterator<Item = &'a str>, lineno: usize) -> Result<u32, BuildError> {
    tokens.next().ok_or(BuildError::Line(lineno))?.parse().map_err(|_| BuildError::Line(lineno))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_representative_multi_sort_problem() {
        let source = "
# a comment line, and a blank line below

sort person min 1 max 8 monotonic false
sort colour min 1 max 3 monotonic true
function zero 0 -> person
function succ 1 person -> person
predicate even 1 person
predicate likes 2 person colour
clause vars x person y person lits +vareq x y
clause vars x person lits -pred even x +funceq succ x x
";
        let (problem, signature) = parse_str(source).unwrap();

        assert_eq!(signature.sorts.distinct.len(), 2);
        assert_eq!(signature.sorts.distinct[0].max, Some(8));
        assert!(!signature.sorts.distinct[0].monotonic);
        assert!(signature.sorts.distinct[1].monotonic);

        assert_eq!(signature.signature.functions.len(), 2);
        assert_eq!(signature.signature.functions[0].name, "zero");
        assert_eq!(signature.signature.functions[0].arity, 0);
        assert_eq!(signature.signature.functions[1].signature, vec![0, 0]);

        assert_eq!(signature.signature.predicates.len(), 2);
        assert_eq!(signature.signature.predicates[1].signature, vec![0, 1]);

        assert_eq!(signature.sorted_constants[&0], vec![0]);
        assert_eq!(signature.sorted_functions[&0], vec![1]);

        assert_eq!(problem.clauses.len(), 2);
        assert_eq!(problem.clauses[0].literals.len(), 1);
        assert_eq!(problem.clauses[1].literals.len(), 2);
        match &problem.clauses[1].literals[1] {
            FlatLiteral::FuncEq { polarity, f, args, result } => {
                assert!(*polarity);
                assert_eq!(*f, 1);
                assert_eq!(args, &vec![0]);
                assert_eq!(*result, 0);
            }
            other => panic!("expected a FuncEq literal, got {other:?}"),
        }
    }

    #[test]
    fn rejects_a_clause_with_no_sort_declarations() {
        let source = "clause vars lits\n";
        match parse_str(source) {
            Err(BuildError::MissingSection("sorts")) => {}
            other => panic!("expected a missing-sorts error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_an_unknown_sort_name() {
        let source = "
sort person min 1 max 4 monotonic false
function c 0 -> nowhere
";
        match parse_str(source) {
            Err(BuildError::UnknownSort(name)) => assert_eq!(name, "nowhere"),
            other => panic!("expected an unknown-sort error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_an_unknown_symbol_in_a_clause() {
        let source = "
sort person min 1 max 4 monotonic false
clause vars x person lits -pred ghost x
";
        match parse_str(source) {
            Err(BuildError::UnknownSymbol(name)) => assert_eq!(name, "ghost"),
            other => panic!("expected an unknown-symbol error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_a_clause_missing_its_lits_section() {
        let source = "
sort person min 1 max 4 monotonic false
clause vars x person
";
        match parse_str(source) {
            Err(BuildError::MissingSection("lits")) => {}
            other => panic!("expected a missing-lits error, got {other:?}"),
        }
    }
}

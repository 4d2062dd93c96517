use fmb::db::problem::SortedSignature;
use fmb::structures::interpretation::Interpretation;

/// Prints a found model in a flat, greppable form: one `sort`/`fn`/`pred`
/// line per entry, order matching the signature.
pub fn print_model(signature: &SortedSignature, model: &Interpretation, print_partial: bool) {
    let mut sorts: Vec<_> = model.sort_sizes.iter().collect();
    sorts.sort_by_key(|(source, _)| **source);
    for (source, size) in sorts {
        println!("v sort {source} = {size}");
    }

    // Every non-deleted symbol is printed from its own SAT-backed table;
    // deleted symbols are printed too, from the values `extract_model`
    // recovered from their stored definitions (§4.7), so the printed model
    // reflects the full interpretation rather than only the live signature.
    for (id, function) in signature.signature.functions.iter().enumerate() {
        let id = id as u32;
        let Some(table) = model.functions.get(&id) else {
            continue;
        };
        let mut rows: Vec<_> = table.iter().collect();
        rows.sort_by_key(|(args, _)| (*args).clone());
        for (args, value) in rows {
            let args = args.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
            println!("v fn {}({}) = {}", function.name, args, value);
        }
    }

    for (id, predicate) in signature.signature.predicates.iter().enumerate() {
        let id = id as u32;
        let Some(table) = model.predicates.get(&id) else {
            continue;
        };
        let mut rows: Vec<_> = table.iter().collect();
        rows.sort_by_key(|(args, _)| (*args).clone());
        for (args, value) in rows {
            let args = args.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
            println!("v pred {}({}) = {}", predicate.name, args, value);
        }
    }

    if print_partial {
        for (f, args) in &model.partial {
            let name = &signature.signature.function(*f).name;
            let args = args.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
            println!("c partial fn {name}({args}) left undefined");
        }
    }
}

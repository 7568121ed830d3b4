//! Handle field selection translation to a return projection.

use indexmap::IndexMap;

use query_engine_aql::aql;

/// Convert the selected paths to a RETURN clause. The document key
/// field is always included first so results stay mappable back to
/// their identifiers. No selection returns the whole document.
pub fn translate_projection(
    variable: &aql::ast::DocumentVariable,
    key_field: &str,
    select: Option<&[String]>,
) -> aql::ast::Return {
    let fields = match select {
        None => return aql::ast::Return::Document(variable.clone()),
        Some([]) => return aql::ast::Return::Document(variable.clone()),
        Some(fields) => fields,
    };

    let mut tree: IndexMap<String, Node> = IndexMap::new();
    insert_path(&mut tree, variable, &segments_of(key_field), vec![]);
    for field in fields {
        let segments = segments_of(field);
        if !segments.is_empty() {
            insert_path(&mut tree, variable, &segments, vec![]);
        }
    }

    aql::ast::Return::Projection(lower(tree))
}

/// The nested shape under construction. A later insertion overwrites:
/// selecting `a` after `a.b` collapses the object back to one field.
enum Node {
    Leaf(aql::ast::Expression),
    Object(IndexMap<String, Node>),
}

fn segments_of(path: &str) -> Vec<aql::ast::FieldSegment> {
    path.split('.')
        .map(aql::ast::FieldSegment::new)
        .filter(|segment| !segment.as_str().is_empty())
        .collect()
}

fn insert_path(
    tree: &mut IndexMap<String, Node>,
    variable: &aql::ast::DocumentVariable,
    remaining: &[aql::ast::FieldSegment],
    mut walked: Vec<aql::ast::FieldSegment>,
) {
    let Some((first, rest)) = remaining.split_first() else {
        return;
    };
    walked.push(first.clone());

    if rest.is_empty() {
        let access = aql::ast::Expression::FieldAccess {
            base: Box::new(aql::helpers::variable_reference(variable)),
            segments: walked,
        };
        tree.insert(first.as_str().to_string(), Node::Leaf(access));
        return;
    }

    let entry = tree
        .entry(first.as_str().to_string())
        .or_insert_with(|| Node::Object(IndexMap::new()));
    if let Node::Leaf(_) = entry {
        *entry = Node::Object(IndexMap::new());
    }
    if let Node::Object(children) = entry {
        insert_path(children, variable, rest, walked);
    }
}

fn lower(tree: IndexMap<String, Node>) -> aql::ast::ProjectionObject {
    let entries = tree
        .into_iter()
        .map(|(name, node)| {
            let value = match node {
                Node::Leaf(access) => aql::ast::ProjectionValue::Expression(access),
                Node::Object(children) => aql::ast::ProjectionValue::Object(lower(children)),
            };
            (aql::ast::FieldName::new(&name), value)
        })
        .collect();
    aql::ast::ProjectionObject { entries }
}
